use std::io::Write;

use super::{Command, CommandError, Context};
use crate::fs::{FsError, FsErrorKind};

#[derive(Clone, Default)]
pub struct RmCommand;

impl RmCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn usage(&self) -> &'static str {
        "rm <file>..."
    }

    fn description(&self) -> &'static str {
        "Remove files."
    }

    fn min_args(&self) -> usize {
        1
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        for name in args {
            let path = ctx.resolve(name);
            let result = if ctx.encloses_current_dir(&path) {
                Err(FsError::new(FsErrorKind::InvalidArgument))
            } else if ctx.fs.is_dir(&path) {
                Err(FsError::new(FsErrorKind::IsADirectory))
            } else {
                ctx.fs.delete(&path)
            };

            match result {
                Ok(()) => writeln!(ctx.out, "File removed: {}", name)?,
                Err(e) => ctx.report(CommandError::fs("rm", "cannot remove", name, e))?,
            }
        }
        Ok(())
    }
}
