use std::io::Write;

use super::{Command, CommandError, Context};

/// Prints one usage line per registered command.
#[derive(Clone, Default)]
pub struct HelpCommand {
    topics: Vec<(&'static str, &'static str)>,
}

impl HelpCommand {
    pub fn new(topics: Vec<(&'static str, &'static str)>) -> Self {
        Self { topics }
    }
}

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Display this help message."
    }

    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        writeln!(ctx.out, "Supported commands:")?;
        for (usage, description) in &self.topics {
            writeln!(ctx.out, "  {}: {}", usage, description)?;
        }
        Ok(())
    }
}
