pub mod commands;
pub mod config;
pub mod parser;
pub mod session;
pub mod state;
