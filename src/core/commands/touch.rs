use std::io::Write;

use super::{Command, CommandError, Context};

#[derive(Clone, Default)]
pub struct TouchCommand;

impl TouchCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn usage(&self) -> &'static str {
        "touch <file>..."
    }

    fn description(&self) -> &'static str {
        "Create empty files."
    }

    fn min_args(&self) -> usize {
        1
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        for name in args {
            let path = ctx.resolve(name);
            match ctx.fs.create_file(&path) {
                Ok(()) => writeln!(ctx.out, "File created: {}", name)?,
                Err(e) => ctx.report(CommandError::fs("touch", "cannot create file", name, e))?,
            }
        }
        Ok(())
    }
}
