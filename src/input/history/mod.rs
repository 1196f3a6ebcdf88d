mod file_ops;

use std::path::PathBuf;

use crate::error::ShellError;
use self::file_ops::FileOps;

/// Command lines entered across sessions, persisted one per line.
pub struct History {
    entries: Vec<String>,
    file_ops: FileOps,
    max_entries: usize,
}

impl History {
    pub fn new(history_file: PathBuf, max_entries: usize) -> Result<Self, ShellError> {
        let file_ops = FileOps::new(history_file);
        let mut entries = file_ops.load_entries()?;

        let overflow = entries.len().saturating_sub(max_entries);
        if overflow > 0 {
            entries.drain(..overflow);
            file_ops.rewrite(&entries)?;
            log::debug!(
                "trimmed {} old entries from {}",
                overflow,
                file_ops.path().display()
            );
        }

        Ok(History {
            entries,
            file_ops,
            max_entries,
        })
    }

    pub fn add(&mut self, entry: &str) -> Result<(), ShellError> {
        let entry = entry.trim();
        if entry.is_empty() {
            return Ok(());
        }
        if self.entries.last().map(String::as_str) == Some(entry) {
            return Ok(());
        }

        self.entries.push(entry.to_owned());
        self.trim_entries();
        self.file_ops.append_entry(entry)?;

        Ok(())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn trim_entries(&mut self) {
        let overflow = self.entries.len().saturating_sub(self.max_entries);
        self.entries.drain(..overflow);
    }
}
