use std::io::Write;

use super::{Command, CommandError, Context};
use crate::fs::{FsError, FsErrorKind};

#[derive(Clone, Default)]
pub struct RmdirCommand;

impl RmdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn usage(&self) -> &'static str {
        "rmdir <dir>..."
    }

    fn description(&self) -> &'static str {
        "Remove empty directories."
    }

    fn min_args(&self) -> usize {
        1
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        for name in args {
            let path = ctx.resolve(name);
            let result = if ctx.encloses_current_dir(&path) {
                Err(FsError::new(FsErrorKind::InvalidArgument))
            } else if ctx.fs.exists(&path) && !ctx.fs.is_dir(&path) {
                Err(FsError::new(FsErrorKind::NotADirectory))
            } else {
                ctx.fs.delete(&path)
            };

            match result {
                Ok(()) => writeln!(ctx.out, "Directory removed: {}", name)?,
                Err(e) => ctx.report(CommandError::fs("rmdir", "failed to remove", name, e))?,
            }
        }
        Ok(())
    }
}
