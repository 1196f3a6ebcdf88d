use super::{Command, CommandError, Context};
use crate::fs::{FsError, FsErrorKind};

#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn usage(&self) -> &'static str {
        "cd <dir>"
    }

    fn description(&self) -> &'static str {
        "Change directory."
    }

    fn min_args(&self) -> usize {
        1
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        if args.len() > 1 {
            return Err(CommandError::Usage {
                command: "cd",
                message: "too many arguments".to_string(),
            });
        }

        let path_str = &args[0];
        let target = ctx.resolve(path_str);
        if !ctx.fs.exists(&target) {
            return Err(CommandError::fs(
                "cd",
                "cannot change directory to",
                path_str,
                FsError::new(FsErrorKind::NotFound),
            ));
        }
        if !ctx.fs.is_dir(&target) {
            return Err(CommandError::fs(
                "cd",
                "cannot change directory to",
                path_str,
                FsError::new(FsErrorKind::NotADirectory),
            ));
        }

        ctx.state.set_current_dir(target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::commands::testing::Harness;
    use std::fs;

    #[test]
    fn test_cd_into_new_dir() {
        let mut sh = Harness::new();
        let expected = sh.cwd().join("sub");
        sh.run("mkdir sub");

        assert_eq!(sh.run("cd sub"), "");
        assert_eq!(sh.cwd(), expected);
    }

    #[test]
    fn test_cd_parent_normalizes() {
        let mut sh = Harness::new();
        let start = sh.cwd().to_path_buf();
        fs::create_dir_all(sh.path("a/b")).unwrap();

        sh.run("cd a/b");
        sh.run("cd ../..");
        assert_eq!(sh.cwd(), start);
    }

    #[test]
    fn test_cd_absolute() {
        let mut sh = Harness::new();
        fs::create_dir(sh.path("abs")).unwrap();
        let target = sh.path("abs");

        sh.run(&format!("cd {}", target.display()));
        assert_eq!(sh.cwd(), target);
    }

    #[test]
    fn test_cd_missing_dir() {
        let mut sh = Harness::new();
        let start = sh.cwd().to_path_buf();

        let out = sh.run("cd nowhere");
        assert_eq!(
            out,
            "cd: cannot change directory to 'nowhere': No such file or directory\n"
        );
        assert_eq!(sh.cwd(), start);
    }

    #[test]
    fn test_cd_into_file() {
        let mut sh = Harness::new();
        sh.write("file.txt", "");
        let start = sh.cwd().to_path_buf();

        let out = sh.run("cd file.txt");
        assert!(out.contains("Not a directory"));
        assert_eq!(sh.cwd(), start);
    }

    #[test]
    fn test_cd_too_many_arguments() {
        let mut sh = Harness::new();
        sh.run("mkdir x y");
        let start = sh.cwd().to_path_buf();

        assert_eq!(sh.run("cd x y"), "cd: too many arguments\n");
        assert_eq!(sh.cwd(), start);
    }
}
