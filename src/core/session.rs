use std::io::Write;
use std::path::Path;

use rustyline::error::ReadlineError;

use super::commands::{CommandExecutor, Context};
use super::state::SessionState;
use crate::error::ShellError;
use crate::fs::FileSystem;
use crate::input::LineSource;

/// One interactive session: its state, the command table and the
/// filesystem the commands act on.
pub struct Session {
    state: SessionState,
    executor: CommandExecutor,
    fs: Box<dyn FileSystem>,
}

impl Session {
    pub fn new(start_dir: &Path, fs: Box<dyn FileSystem>) -> Self {
        Self {
            state: SessionState::new(start_dir),
            executor: CommandExecutor::new(),
            fs,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    pub fn prompt(&self) -> String {
        format!("{}> ", self.state.current_dir().display())
    }

    pub fn execute_line(&mut self, line: &str, input: &mut dyn LineSource, out: &mut dyn Write) {
        let mut ctx = Context::new(&mut self.state, self.fs.as_ref(), input, out);
        self.executor.dispatch(line.trim(), &mut ctx);
    }

    /// Reads and runs lines until `exit` or the end of input.
    pub fn run<I: LineSource, W: Write>(
        &mut self,
        input: &mut I,
        out: &mut W,
    ) -> Result<(), ShellError> {
        while self.state.is_running() {
            input.set_working_dir(self.state.current_dir());
            let prompt = self.prompt();
            match input.read_command(&prompt) {
                Ok(Some(line)) => self.execute_line(&line, input, out),
                Ok(None) => {
                    log::debug!("end of input");
                    self.execute_line("exit", input, out);
                }
                Err(ReadlineError::Interrupted) => {
                    writeln!(out, "Use 'exit' to exit the shell")?;
                }
                Err(e) => {
                    log::error!("failed to read input: {}", e);
                    return Err(e.into());
                }
            }
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::LocalFs;
    use crate::input::ScriptedInput;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(dir: &Path, script: &str) -> (Session, String) {
        let mut session = Session::new(dir, Box::new(LocalFs::new()));
        let mut input = ScriptedInput::new(Cursor::new(script.as_bytes().to_vec()));
        let mut out = Vec::new();
        session.run(&mut input, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_stops_reading() {
        let dir = TempDir::new().unwrap();
        let (session, out) = run_script(dir.path(), "touch a\nexit\ntouch b\n");

        assert!(!session.state().is_running());
        assert_eq!(out, "File created: a\nExiting the CLI...\n");
        assert!(!dir.path().join("b").exists());
    }

    #[test]
    fn test_end_of_input_acts_like_exit() {
        let dir = TempDir::new().unwrap();
        let (session, out) = run_script(dir.path(), "pwd\n");

        assert!(!session.state().is_running());
        assert!(out.ends_with("Exiting the CLI...\n"));
    }

    #[test]
    fn test_mkdir_then_cd_updates_prompt() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(dir.path(), Box::new(LocalFs::new()));
        let mut input = ScriptedInput::new(Cursor::new(Vec::new()));
        let mut out = Vec::new();

        session.execute_line("mkdir D", &mut input, &mut out);
        session.execute_line("  cd D  ", &mut input, &mut out);
        assert_eq!(session.state().current_dir(), dir.path().join("D"));
        assert_eq!(
            session.prompt(),
            format!("{}> ", dir.path().join("D").display())
        );
    }

    #[test]
    fn test_cat_capture_consumes_lines_from_the_same_input() {
        let dir = TempDir::new().unwrap();
        let (_, out) = run_script(dir.path(), "cat note\nhello\nEOF\ncat note\nexit\n");

        assert_eq!(fs::read_to_string(dir.path().join("note")).unwrap(), "hello\n");
        assert!(out.contains("Text written to file: note\nhello\nExiting the CLI...\n"));
    }

    #[test]
    fn test_unknown_and_blank_lines_keep_the_loop_going() {
        let dir = TempDir::new().unwrap();
        let (session, out) = run_script(dir.path(), "\nfoo\n   \npwd\nexit\n");

        assert_eq!(
            out,
            format!(
                "Command not found: foo\n{}\nExiting the CLI...\n",
                dir.path().display()
            )
        );
        assert_eq!(session.state().current_dir(), dir.path());
    }
}
