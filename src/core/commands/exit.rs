use std::io::Write;

use super::{Command, CommandError, Context};

#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn usage(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Terminate the CLI."
    }

    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        ctx.state.stop();
        writeln!(ctx.out, "Exiting the CLI...")?;
        Ok(())
    }
}
