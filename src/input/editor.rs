use std::path::Path;

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

use super::{History, LineSource, ShellCompleter};
use crate::error::ShellError;

/// Interactive terminal input backed by rustyline.
pub struct EditorInput {
    editor: Editor<ShellCompleter, FileHistory>,
    history: History,
    quiet: bool,
}

impl EditorInput {
    pub fn new(
        completer: ShellCompleter,
        history: History,
        history_size: usize,
        quiet: bool,
    ) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_auto_add_history(false);
        editor.set_max_history_size(history_size.max(1))?;

        for entry in history.entries() {
            editor.add_history_entry(entry.as_str())?;
        }

        Ok(Self {
            editor,
            history,
            quiet,
        })
    }

    fn record(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if let Err(e) = self.editor.add_history_entry(line) {
            log::debug!("editor history rejected entry: {}", e);
        }
        if let Err(e) = self.history.add(line) {
            if !self.quiet {
                eprintln!("Warning: Failed to add command to history: {}", e);
            }
            log::warn!("failed to persist history entry: {}", e);
        }
    }
}

impl LineSource for EditorInput {
    fn read_command(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                self.record(&line);
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn read_text(&mut self) -> Result<Option<String>, ReadlineError> {
        match self.editor.readline("") {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set_working_dir(&mut self, dir: &Path) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_current_dir(dir);
        }
    }
}
