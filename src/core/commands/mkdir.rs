use std::io::Write;

use super::{Command, CommandError, Context};

#[derive(Clone, Default)]
pub struct MkdirCommand;

impl MkdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn usage(&self) -> &'static str {
        "mkdir <dir>..."
    }

    fn description(&self) -> &'static str {
        "Create new directories."
    }

    fn min_args(&self) -> usize {
        1
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        for name in args {
            let path = ctx.resolve(name);
            match ctx.fs.create_dir(&path) {
                Ok(()) => writeln!(ctx.out, "Directory created: {}", name)?,
                Err(e) => ctx.report(CommandError::fs(
                    "mkdir",
                    "cannot create directory",
                    name,
                    e,
                ))?,
            }
        }
        Ok(())
    }
}
