use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use super::{command::CommandCompleter, path::PathCompleter};
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// Editor helper: completion, highlighting, and the directory both
/// resolve against.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
    current_dir: PathBuf,
}

impl ShellCompleter {
    pub fn new(commands: Vec<&'static str>, color: bool) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(commands),
            path_completer: PathCompleter::new(),
            highlighter: SyntaxHighlighter::new(color),
            current_dir: PathBuf::from("/"),
        }
    }

    pub fn set_current_dir(&mut self, dir: &Path) {
        if self.current_dir != dir {
            self.current_dir = dir.to_path_buf();
        }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_up_to_cursor = &line[..pos];
        let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();

        if line_up_to_cursor.is_empty() || line_up_to_cursor.ends_with(char::is_whitespace) {
            words.push("");
        }

        match words.len() {
            0 | 1 => {
                let word = words.first().copied().unwrap_or("");
                (pos - word.len(), self.command_completer.complete_command(word))
            }
            _ => {
                let last_word = words.last().copied().unwrap_or("");
                (
                    pos - last_word.len(),
                    self.path_completer.complete_path(&self.current_dir, last_word),
                )
            }
        }
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(
            self.highlighter
                .highlight_command(line, |name| self.command_completer.is_known(name)),
        )
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}
