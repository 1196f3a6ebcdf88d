mod redirect;
mod tokenize;

pub use redirect::{parse_redirect, RedirectMode, RedirectSpec};
pub use tokenize::tokenize;
