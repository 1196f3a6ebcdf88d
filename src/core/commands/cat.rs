use std::io::Write;

use super::{Command, CommandError, Context, LINE_ENDING};
use crate::core::parser::{parse_redirect, RedirectMode, RedirectSpec};
use crate::fs::{FsError, FsErrorKind, WriteMode};

/// Line that ends interactive text capture.
const SENTINEL: &str = "EOF";

#[derive(Clone, Default)]
pub struct CatCommand;

impl CatCommand {
    pub fn new() -> Self {
        Self
    }

    /// Reads lines until the sentinel or the end of input.
    fn capture(&self, ctx: &mut Context<'_>) -> Result<Vec<String>, CommandError> {
        let mut lines = Vec::new();
        while let Some(line) = ctx.input.read_text()? {
            if line == SENTINEL {
                break;
            }
            lines.push(line);
        }
        Ok(lines)
    }

    fn write_lines(writer: &mut dyn Write, lines: &[String]) -> std::io::Result<()> {
        for line in lines {
            write!(writer, "{}{}", line, LINE_ENDING)?;
        }
        Ok(())
    }

    fn echo_capture(&self, ctx: &mut Context<'_>) -> Result<(), CommandError> {
        writeln!(
            ctx.out,
            "Enter text (type '{}' on a new line to finish):",
            SENTINEL
        )?;
        ctx.out.flush()?;
        let lines = self.capture(ctx)?;

        writeln!(ctx.out, "You entered:")?;
        for line in &lines {
            writeln!(ctx.out, "{}", line)?;
        }
        Ok(())
    }

    fn display(&self, files: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        for name in files {
            let path = ctx.resolve(name);
            if !ctx.fs.exists(&path) {
                self.create_from_input(name, ctx)?;
                continue;
            }

            match ctx.fs.read_lines(&path) {
                Ok(lines) => {
                    for line in lines {
                        writeln!(ctx.out, "{}", line)?;
                    }
                }
                // removed between the existence check and the read
                Err(e) if e.kind() == FsErrorKind::NotFound => {
                    self.create_from_input(name, ctx)?;
                }
                Err(e) => ctx.report(CommandError::fs("cat", "error reading file", name, e))?,
            }
        }
        Ok(())
    }

    /// Creates `name` and fills it with captured text.
    fn create_from_input(&self, name: &str, ctx: &mut Context<'_>) -> Result<(), CommandError> {
        let path = ctx.resolve(name);
        writeln!(ctx.out, "File not found. Creating new file: {}", name)?;
        if let Err(e) = ctx.fs.create_file(&path) {
            return ctx.report(CommandError::fs("cat", "cannot create file", name, e));
        }

        writeln!(
            ctx.out,
            "Enter text to write to {} (type '{}' on a new line to finish):",
            name, SENTINEL
        )?;
        ctx.out.flush()?;
        let lines = self.capture(ctx)?;

        let written = ctx
            .fs
            .open_for_write(&path, WriteMode::Truncate, false)
            .and_then(|mut writer| {
                Self::write_lines(writer.as_mut(), &lines)?;
                writer.flush()?;
                Ok(())
            });
        match written {
            Ok(()) => writeln!(ctx.out, "Text written to file: {}", name)?,
            Err(e) => ctx.report(CommandError::fs("cat", "error writing to file", name, e))?,
        }
        Ok(())
    }

    fn redirect(&self, spec: &RedirectSpec, ctx: &mut Context<'_>) -> Result<(), CommandError> {
        let target = spec.target.as_deref().unwrap_or_default();
        let mode = match spec.mode {
            RedirectMode::Append => WriteMode::Append,
            _ => WriteMode::Truncate,
        };
        let target_path = ctx.resolve(target);
        let mut writer = ctx
            .fs
            .open_for_write(&target_path, mode, true)
            .map_err(|e| CommandError::fs("cat", "cannot open", target, e))?;
        let write_failed =
            |e: std::io::Error| CommandError::fs("cat", "error writing to file", target, FsError::from(e));

        if spec.sources.is_empty() {
            writeln!(
                ctx.out,
                "Enter text (type '{}' on a new line to finish):",
                SENTINEL
            )?;
            ctx.out.flush()?;
            let lines = self.capture(ctx)?;
            Self::write_lines(writer.as_mut(), &lines).map_err(write_failed)?;
        }

        for source in &spec.sources {
            let path = ctx.resolve(source);
            if !ctx.fs.exists(&path) {
                writeln!(ctx.out, "cat: {}: file not found", source)?;
                continue;
            }
            match ctx.fs.read_lines(&path) {
                Ok(lines) => Self::write_lines(writer.as_mut(), &lines).map_err(write_failed)?,
                Err(e) => ctx.report(CommandError::fs("cat", "error reading file", source, e))?,
            }
        }
        writer.flush().map_err(write_failed)?;
        drop(writer);

        log::debug!("cat wrote to {}", target_path.display());
        match mode {
            WriteMode::Truncate => writeln!(ctx.out, "Output written to {}", target)?,
            WriteMode::Append => writeln!(ctx.out, "Output appended to {}", target)?,
        }
        Ok(())
    }
}

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn usage(&self) -> &'static str {
        "cat [file...] [> | >> target]"
    }

    fn description(&self) -> &'static str {
        "Display files, create them from typed text, or concatenate into a target file."
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        let spec = parse_redirect(args).map_err(|op| CommandError::Usage {
            command: "cat",
            message: format!("missing file name after '{}'", op),
        })?;

        match spec.mode {
            RedirectMode::None if spec.sources.is_empty() => self.echo_capture(ctx),
            RedirectMode::None => self.display(&spec.sources, ctx),
            RedirectMode::Overwrite | RedirectMode::Append => self.redirect(&spec, ctx),
        }
    }
}
