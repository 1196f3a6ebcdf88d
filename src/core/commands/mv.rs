use std::io::Write;

use super::{Command, CommandError, Context};
use crate::fs::{FsError, FsErrorKind};

#[derive(Clone, Default)]
pub struct MvCommand;

impl MvCommand {
    pub fn new() -> Self {
        Self
    }

    fn move_into(
        &self,
        sources: &[String],
        dest_arg: &str,
        ctx: &mut Context<'_>,
    ) -> Result<(), CommandError> {
        let dest = ctx.resolve(dest_arg);
        for name in sources {
            let src = ctx.resolve(name);
            if ctx.encloses_current_dir(&src) {
                ctx.report(CommandError::fs(
                    "mv",
                    "cannot move",
                    name,
                    FsError::new(FsErrorKind::InvalidArgument),
                ))?;
                continue;
            }
            let Some(base_name) = src.file_name() else {
                ctx.report(CommandError::Usage {
                    command: "mv",
                    message: format!("cannot move '{}': invalid source", name),
                })?;
                continue;
            };

            let target = dest.join(base_name);
            match ctx.fs.move_entry(&src, &target, false) {
                Ok(()) => writeln!(ctx.out, "Moved '{}' to '{}'", name, target.display())?,
                Err(e) => ctx.report(CommandError::fs("mv", "cannot move", name, e))?,
            }
        }
        Ok(())
    }

    fn rename(&self, from: &str, to: &str, ctx: &mut Context<'_>) -> Result<(), CommandError> {
        let src = ctx.resolve(from);
        let dst = ctx.resolve(to);
        if ctx.encloses_current_dir(&src) {
            return Err(CommandError::fs(
                "mv",
                "cannot move",
                from,
                FsError::new(FsErrorKind::InvalidArgument),
            ));
        }
        ctx.fs
            .move_entry(&src, &dst, false)
            .map_err(|e| CommandError::fs("mv", "cannot move", from, e))?;
        writeln!(ctx.out, "Renamed '{}' to '{}'", from, to)?;
        Ok(())
    }
}

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn usage(&self) -> &'static str {
        "mv <source>... <dest>"
    }

    fn description(&self) -> &'static str {
        "Rename source to dest, or move sources into dest if it is a directory."
    }

    fn min_args(&self) -> usize {
        2
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        let Some((dest_arg, sources)) = args.split_last() else {
            return Err(CommandError::MissingOperand("mv"));
        };

        if ctx.fs.is_dir(&ctx.resolve(dest_arg)) {
            return self.move_into(sources, dest_arg, ctx);
        }

        match sources {
            [source] => self.rename(source, dest_arg, ctx),
            _ => Err(CommandError::fs(
                "mv",
                "target",
                dest_arg,
                FsError::new(FsErrorKind::NotADirectory),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::commands::testing::Harness;

    #[test]
    fn test_mv_rename() {
        let mut sh = Harness::new();
        sh.write("file1.txt", "body");

        let out = sh.run("mv file1.txt file2.txt");
        assert_eq!(out, "Renamed 'file1.txt' to 'file2.txt'\n");
        assert!(!sh.path("file1.txt").exists());
        assert_eq!(sh.read("file2.txt"), "body");
    }

    #[test]
    fn test_mv_into_directory() {
        let mut sh = Harness::new();
        sh.run("touch file1.txt");
        sh.run("mkdir targetDir");

        let out = sh.run("mv file1.txt targetDir");
        assert!(out.starts_with("Moved 'file1.txt' to '"));
        assert!(sh.path("targetDir/file1.txt").exists());
        assert!(!sh.path("file1.txt").exists());
    }

    #[test]
    fn test_mv_many_into_directory_keeps_base_names() {
        let mut sh = Harness::new();
        sh.run("mkdir sub dest");
        sh.write("a.txt", "a");
        sh.write("sub/b.txt", "b");

        let out = sh.run("mv a.txt sub/b.txt missing.txt dest");
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("mv: cannot move 'missing.txt': No such file or directory"));
        assert_eq!(sh.read("dest/a.txt"), "a");
        assert_eq!(sh.read("dest/b.txt"), "b");
        assert!(!sh.path("sub/b.txt").exists());
    }

    #[test]
    fn test_mv_many_to_non_directory() {
        let mut sh = Harness::new();
        sh.run("touch a b");

        let out = sh.run("mv a b c");
        assert_eq!(out, "mv: target 'c': Not a directory\n");
        assert!(sh.path("a").exists());
        assert!(sh.path("b").exists());
        assert!(!sh.path("c").exists());
    }

    #[test]
    fn test_mv_missing_source() {
        let mut sh = Harness::new();
        let out = sh.run("mv ghost other");
        assert_eq!(out, "mv: cannot move 'ghost': No such file or directory\n");
        assert!(!sh.path("other").exists());
    }

    #[test]
    fn test_mv_does_not_overwrite() {
        let mut sh = Harness::new();
        sh.write("a", "new");
        sh.write("b", "old");

        let out = sh.run("mv a b");
        assert_eq!(out, "mv: cannot move 'a': File exists\n");
        assert_eq!(sh.read("b"), "old");
        assert_eq!(sh.read("a"), "new");
    }

    #[test]
    fn test_mv_current_dir_is_refused() {
        let mut sh = Harness::new();
        sh.run("mkdir work other");
        sh.run("cd work");
        let cwd = sh.cwd().to_path_buf();

        assert_eq!(
            sh.run("mv . ../moved"),
            "mv: cannot move '.': Invalid argument\n"
        );
        assert!(sh.cwd().is_dir());
        assert!(!sh.path("moved").exists());

        sh.run("touch f.txt");
        let out = sh.run("mv .. f.txt ../other");
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("mv: cannot move '..': Invalid argument\n"));
        assert!(sh.path("other/f.txt").exists());
        assert_eq!(sh.cwd(), cwd);
        assert!(sh.cwd().is_dir());
    }
}
