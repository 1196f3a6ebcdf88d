use std::io::BufRead;
use std::path::Path;

use rustyline::error::ReadlineError;

/// Where the session reads its lines from.
///
/// `Ok(None)` means the input is exhausted.
pub trait LineSource {
    /// Reads the next command line, showing `prompt` if the source is
    /// interactive.
    fn read_command(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError>;

    /// Reads one line of free text for a command that is capturing input.
    fn read_text(&mut self) -> Result<Option<String>, ReadlineError>;

    /// Called before each prompt with the session's current directory.
    fn set_working_dir(&mut self, _dir: &Path) {}
}

/// Reads lines from any buffered reader, without prompts.
pub struct ScriptedInput<R> {
    reader: R,
}

impl<R: BufRead> ScriptedInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self) -> Result<Option<String>, ReadlineError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        let line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => {
                log::warn!("input line is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Ok(Some(line))
    }
}

impl<R: BufRead> LineSource for ScriptedInput<R> {
    fn read_command(&mut self, _prompt: &str) -> Result<Option<String>, ReadlineError> {
        self.next_line()
    }

    fn read_text(&mut self) -> Result<Option<String>, ReadlineError> {
        self.next_line()
    }
}
