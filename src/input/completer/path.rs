use std::{fs, path::Path};

use rustyline::completion::Pair;

use crate::path::PathResolver;

#[derive(Clone)]
pub struct PathCompleter {
    resolver: PathResolver,
}

impl PathCompleter {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }

    /// Completes the last path segment of `incomplete`, looking it up
    /// relative to `base` unless it is absolute.
    pub fn complete_path(&self, base: &Path, incomplete: &str) -> Vec<Pair> {
        let (typed_dir, file_prefix) = match incomplete.rfind('/') {
            Some(i) => incomplete.split_at(i + 1),
            None => ("", incomplete),
        };
        let search_dir = if typed_dir.is_empty() {
            base.to_path_buf()
        } else {
            self.resolver.resolve(base, typed_dir)
        };

        let mut matches = Vec::new();
        if let Ok(entries) = fs::read_dir(&search_dir) {
            for entry in entries.filter_map(Result::ok) {
                let name = entry.file_name().to_string_lossy().into_owned();
                if !name.starts_with(file_prefix) {
                    continue;
                }
                // dotfiles only show up once the user starts typing one
                if file_prefix.is_empty() && name.starts_with('.') {
                    continue;
                }
                let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                matches.push(self.create_completion_pair(typed_dir, &name, is_dir));
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }

    fn create_completion_pair(&self, typed_dir: &str, name: &str, is_dir: bool) -> Pair {
        if is_dir {
            Pair {
                display: format!("{}/", name),
                replacement: format!("{}{}/", typed_dir, name),
            }
        } else {
            Pair {
                display: name.to_string(),
                replacement: format!("{}{} ", typed_dir, name),
            }
        }
    }
}
