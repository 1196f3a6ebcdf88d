mod completer;
mod editor;
pub mod history;
mod source;

pub use completer::ShellCompleter;
pub use editor::EditorInput;
pub use history::History;
pub use source::{LineSource, ScriptedInput};
