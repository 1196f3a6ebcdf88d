use std::io::Write;

use super::{Command, CommandError, Context};

#[derive(Clone, Default)]
pub struct PwdCommand;

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "Print current working directory."
    }

    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        writeln!(ctx.out, "{}", ctx.state.current_dir().display())?;
        Ok(())
    }
}
