use std::path::{Path, PathBuf};

use crate::path::PathResolver;

/// Per-session mutable state: where relative paths resolve from, and
/// whether the loop should keep reading input.
#[derive(Debug, Clone)]
pub struct SessionState {
    current_dir: PathBuf,
    running: bool,
}

impl SessionState {
    pub fn new(start_dir: &Path) -> Self {
        Self {
            current_dir: PathResolver::new().normalize(start_dir),
            running: true,
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub(crate) fn set_current_dir(&mut self, dir: PathBuf) {
        log::debug!("current directory: {}", dir.display());
        self.current_dir = dir;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub(crate) fn stop(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_running_in_normalized_dir() {
        let state = SessionState::new(Path::new("/tmp/./a/../b"));
        assert!(state.is_running());
        assert_eq!(state.current_dir(), Path::new("/tmp/b"));
    }

    #[test]
    fn test_stop() {
        let mut state = SessionState::new(Path::new("/"));
        state.stop();
        assert!(!state.is_running());
    }
}
