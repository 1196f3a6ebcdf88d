use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rustyline::error::ReadlineError;

mod cat;
mod cd;
mod exit;
mod help;
mod ls;
mod mkdir;
mod mv;
mod pwd;
mod rm;
mod rmdir;
mod touch;

pub use cat::CatCommand;
pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use mv::MvCommand;
pub use pwd::PwdCommand;
pub use rm::RmCommand;
pub use rmdir::RmdirCommand;
pub use touch::TouchCommand;

use crate::core::parser::tokenize;
use crate::core::state::SessionState;
use crate::fs::{FileSystem, FsError};
use crate::input::LineSource;
use crate::path::PathResolver;

#[derive(Debug)]
pub enum CommandError {
    MissingOperand(&'static str),
    UnknownCommand(String),
    InvalidOption(String),
    Usage {
        command: &'static str,
        message: String,
    },
    Fs {
        command: &'static str,
        action: &'static str,
        target: String,
        source: FsError,
    },
    IoError(io::Error),
    Input(ReadlineError),
}

impl CommandError {
    pub(crate) fn fs(
        command: &'static str,
        action: &'static str,
        target: &str,
        source: FsError,
    ) -> Self {
        CommandError::Fs {
            command,
            action,
            target: target.to_string(),
            source,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MissingOperand(cmd) => write!(f, "{}: missing operand", cmd),
            CommandError::UnknownCommand(cmd) => write!(f, "Command not found: {}", cmd),
            CommandError::InvalidOption(flag) => write!(f, "Invalid option: {}", flag),
            CommandError::Usage { command, message } => write!(f, "{}: {}", command, message),
            CommandError::Fs {
                command,
                action,
                target,
                source,
            } => write!(f, "{}: {} '{}': {}", command, action, target, source),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::Input(err) => write!(f, "input error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ReadlineError> for CommandError {
    fn from(err: ReadlineError) -> Self {
        CommandError::Input(err)
    }
}

/// Everything a command may touch while it runs.
pub struct Context<'a> {
    pub state: &'a mut SessionState,
    pub fs: &'a dyn FileSystem,
    pub input: &'a mut dyn LineSource,
    pub out: &'a mut dyn Write,
    resolver: PathResolver,
}

impl<'a> Context<'a> {
    pub fn new(
        state: &'a mut SessionState,
        fs: &'a dyn FileSystem,
        input: &'a mut dyn LineSource,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            state,
            fs,
            input,
            out,
            resolver: PathResolver::new(),
        }
    }

    /// Resolves a command argument against the session directory.
    pub fn resolve(&self, arg: &str) -> PathBuf {
        self.resolver.resolve(self.state.current_dir(), arg)
    }

    /// True when `path` is the session directory or one of its ancestors,
    /// which must not be removed or moved away.
    pub fn encloses_current_dir(&self, path: &Path) -> bool {
        self.state.current_dir().starts_with(path)
    }

    /// Prints a failure for one item of a command and lets the command go on.
    pub fn report(&mut self, err: CommandError) -> Result<(), CommandError> {
        log::debug!("{}", err);
        writeln!(self.out, "{}", err)?;
        Ok(())
    }
}

pub trait Command {
    fn name(&self) -> &'static str;
    fn usage(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Arguments required before the command is run at all.
    fn min_args(&self) -> usize {
        0
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Pwd(PwdCommand),
    Cd(CdCommand),
    Ls(LsCommand),
    Mkdir(MkdirCommand),
    Rmdir(RmdirCommand),
    Touch(TouchCommand),
    Rm(RmCommand),
    Mv(MvCommand),
    Cat(CatCommand),
    Exit(ExitCommand),
    Help(HelpCommand),
}

impl CommandType {
    fn inner(&self) -> &dyn Command {
        match self {
            CommandType::Pwd(cmd) => cmd,
            CommandType::Cd(cmd) => cmd,
            CommandType::Ls(cmd) => cmd,
            CommandType::Mkdir(cmd) => cmd,
            CommandType::Rmdir(cmd) => cmd,
            CommandType::Touch(cmd) => cmd,
            CommandType::Rm(cmd) => cmd,
            CommandType::Mv(cmd) => cmd,
            CommandType::Cat(cmd) => cmd,
            CommandType::Exit(cmd) => cmd,
            CommandType::Help(cmd) => cmd,
        }
    }
}

/// The fixed table of built-in commands.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let table = vec![
            CommandType::Pwd(PwdCommand::new()),
            CommandType::Cd(CdCommand::new()),
            CommandType::Ls(LsCommand::new()),
            CommandType::Mkdir(MkdirCommand::new()),
            CommandType::Rmdir(RmdirCommand::new()),
            CommandType::Touch(TouchCommand::new()),
            CommandType::Rm(RmCommand::new()),
            CommandType::Mv(MvCommand::new()),
            CommandType::Cat(CatCommand::new()),
            CommandType::Exit(ExitCommand::new()),
        ];

        // help lists commands in registration order, itself last
        let mut topics: Vec<(&'static str, &'static str)> = table
            .iter()
            .map(|cmd| (cmd.inner().usage(), cmd.inner().description()))
            .collect();
        let help = HelpCommand::new(Vec::new());
        topics.push((help.usage(), help.description()));

        let mut commands = BTreeMap::new();
        for cmd in table {
            commands.insert(cmd.inner().name(), cmd);
        }
        commands.insert("help", CommandType::Help(HelpCommand::new(topics)));

        Self { commands }
    }

    /// Runs `command` with `args`, checking arity first.
    pub fn execute(
        &self,
        command: &str,
        args: &[String],
        ctx: &mut Context<'_>,
    ) -> Result<(), CommandError> {
        let cmd = self
            .commands
            .get(command)
            .map(CommandType::inner)
            .ok_or_else(|| CommandError::UnknownCommand(command.to_string()))?;

        if args.len() < cmd.min_args() {
            return Err(CommandError::MissingOperand(cmd.name()));
        }
        cmd.execute(args, ctx)
    }

    /// Tokenizes and runs one input line. Failures are printed, never
    /// returned; a blank line does nothing.
    pub fn dispatch(&self, line: &str, ctx: &mut Context<'_>) {
        let tokens = tokenize(line);
        let (command, args) = match tokens.split_first() {
            Some((command, args)) if !command.is_empty() => (command, args),
            _ => return,
        };

        log::debug!("dispatching `{}` with {} argument(s)", command, args.len());
        if let Err(err) = self.execute(command, args, ctx) {
            if let Err(write_err) = ctx.report(err) {
                log::warn!("could not report command failure: {}", write_err);
            }
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }
}

/// Line terminator appended to every line `cat` writes.
#[cfg(windows)]
pub(crate) const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub(crate) const LINE_ENDING: &str = "\n";


#[cfg(test)]
mod tests {
    use super::testing::Harness;
    use super::*;

    #[test]
    fn test_unknown_command() {
        let mut sh = Harness::new();
        let before = sh.cwd().to_path_buf();

        let out = sh.run("foo bar");
        assert_eq!(out, "Command not found: foo\n");
        assert_eq!(sh.cwd(), before);
        assert!(sh.state.is_running());
    }

    #[test]
    fn test_blank_line_is_a_no_op() {
        let mut sh = Harness::new();
        assert_eq!(sh.run(""), "");
        assert_eq!(sh.run("   "), "");
        assert!(sh.state.is_running());
    }

    #[test]
    fn test_missing_operand_per_command() {
        let mut sh = Harness::new();
        for cmd in ["cd", "mkdir", "rmdir", "touch", "rm", "mv"] {
            assert_eq!(sh.run(cmd), format!("{}: missing operand\n", cmd));
        }
        assert_eq!(sh.run("mv only_one"), "mv: missing operand\n");
        assert_eq!(std::fs::read_dir(sh.dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_builtin_command_detection() {
        let executor = CommandExecutor::new();
        for cmd in [
            "pwd", "cd", "ls", "mkdir", "rmdir", "touch", "rm", "mv", "cat", "exit", "help",
        ] {
            assert!(executor.is_builtin(cmd), "{} should be built in", cmd);
        }
        assert!(!executor.is_builtin("grep"));
        assert!(!executor.is_builtin(""));
        assert_eq!(executor.command_names().len(), 11);
    }

    #[test]
    fn test_failure_in_one_command_does_not_stop_the_next() {
        let mut sh = Harness::new();
        sh.run("cd missing");
        let out = sh.run("touch ok.txt");
        assert_eq!(out, "File created: ok.txt\n");
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::MissingOperand("cd"),
            CommandError::UnknownCommand("x".to_string()),
            CommandError::InvalidOption("-z".to_string()),
            CommandError::Usage {
                command: "cat",
                message: "bad".to_string(),
            },
            CommandError::IoError(io::Error::new(io::ErrorKind::Other, "io error")),
            CommandError::Input(ReadlineError::Interrupted),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }

        let err = CommandError::fs(
            "rm",
            "cannot remove",
            "dir",
            FsError::new(crate::fs::FsErrorKind::IsADirectory),
        );
        assert_eq!(err.to_string(), "rm: cannot remove 'dir': Is a directory");
    }
}
