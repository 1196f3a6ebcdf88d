use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use crate::error::ShellError;

pub struct FileOps {
    file_path: PathBuf,
}

impl FileOps {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Non-blank lines of the history file, oldest first.
    pub fn load_entries(&self) -> Result<Vec<String>, ShellError> {
        let mut entries = Vec::new();

        if self.file_path.exists() {
            let file = File::open(&self.file_path)?;
            let reader = BufReader::new(file);

            for line in reader.lines() {
                let line = line?;
                if !line.trim().is_empty() {
                    entries.push(line);
                }
            }
        }

        Ok(entries)
    }

    pub fn append_entry(&self, entry: &str) -> Result<(), ShellError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)?;

        writeln!(file, "{}", entry)?;
        Ok(())
    }

    /// Replaces the file contents with `entries`.
    pub fn rewrite(&self, entries: &[String]) -> Result<(), ShellError> {
        let mut file = File::create(&self.file_path)?;
        for entry in entries {
            writeln!(file, "{}", entry)?;
        }
        Ok(())
    }
}
