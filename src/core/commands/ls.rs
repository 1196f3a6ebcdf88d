use std::io::Write;

use super::{Command, CommandError, Context};
use crate::fs::{FsError, FsErrorKind};

/// What a single `ls` invocation asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Listing {
    Entries {
        show_hidden: bool,
        reverse: bool,
        recursive: bool,
    },
    Grep(String),
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn parse_listing(args: &[String]) -> Result<Listing, CommandError> {
    if let Some(pipe) = args.iter().position(|arg| arg == "|") {
        if pipe != 0 {
            return Err(CommandError::Usage {
                command: "ls",
                message: "options cannot be combined with a pipeline".to_string(),
            });
        }
        return match args.get(1).map(String::as_str) {
            None => Err(CommandError::Usage {
                command: "ls",
                message: "missing command after '|'".to_string(),
            }),
            Some("grep") => match &args[2..] {
                [term] => Ok(Listing::Grep(term.clone())),
                [] => Err(CommandError::MissingOperand("grep")),
                _ => Err(CommandError::Usage {
                    command: "grep",
                    message: "too many arguments".to_string(),
                }),
            },
            Some(other) => Err(CommandError::UnknownCommand(other.to_string())),
        };
    }

    let mut show_hidden = false;
    let mut reverse = false;
    let mut recursive = false;
    for arg in args {
        let letters = match arg.strip_prefix('-') {
            Some(letters) if !letters.is_empty() => letters,
            _ => return Err(CommandError::InvalidOption(arg.clone())),
        };
        for letter in letters.chars() {
            match letter {
                'a' => show_hidden = true,
                'r' => reverse = true,
                'R' => recursive = true,
                _ => return Err(CommandError::InvalidOption(arg.clone())),
            }
        }
    }

    Ok(Listing::Entries {
        show_hidden,
        reverse,
        recursive,
    })
}

#[derive(Clone, Default)]
pub struct LsCommand;

impl LsCommand {
    pub fn new() -> Self {
        Self
    }

    fn list_children(
        &self,
        show_hidden: bool,
        reverse: bool,
        ctx: &mut Context<'_>,
    ) -> Result<(), CommandError> {
        let dir = ctx.state.current_dir().to_path_buf();
        let mut names = ctx.fs.list_children(&dir).map_err(|e| {
            CommandError::fs("ls", "cannot open directory", &dir.display().to_string(), e)
        })?;

        if !show_hidden {
            names.retain(|name| !is_hidden(name));
        }
        if reverse {
            names.sort();
            names.reverse();
        }

        writeln!(ctx.out, "Listing files in: {}", dir.display())?;
        for name in names {
            writeln!(ctx.out, "{}", name)?;
        }
        Ok(())
    }

    fn list_tree(
        &self,
        show_hidden: bool,
        reverse: bool,
        ctx: &mut Context<'_>,
    ) -> Result<(), CommandError> {
        let dir = ctx.state.current_dir().to_path_buf();
        if !ctx.fs.is_dir(&dir) {
            return Err(CommandError::fs(
                "ls",
                "cannot open directory",
                &dir.display().to_string(),
                FsError::new(FsErrorKind::NotADirectory),
            ));
        }

        writeln!(ctx.out, "Listing files in: {}", dir.display())?;
        let fs = ctx.fs;
        for entry in fs.walk(&dir, reverse, show_hidden) {
            match entry {
                Ok(entry) => writeln!(ctx.out, "{}", entry.relative.display())?,
                Err(e) => {
                    let failed = e.path().unwrap_or(&dir).display().to_string();
                    ctx.report(CommandError::fs("ls", "cannot read", &failed, e))?;
                }
            }
        }
        Ok(())
    }

    fn grep(&self, term: &str, ctx: &mut Context<'_>) -> Result<(), CommandError> {
        let dir = ctx.state.current_dir().to_path_buf();
        let names = ctx.fs.list_children(&dir).map_err(|e| {
            CommandError::fs("ls", "cannot open directory", &dir.display().to_string(), e)
        })?;

        for name in names.iter().filter(|name| name.contains(term)) {
            writeln!(ctx.out, "{}", name)?;
        }
        Ok(())
    }
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn usage(&self) -> &'static str {
        "ls [-a] [-r] [-R] | ls | grep <term>"
    }

    fn description(&self) -> &'static str {
        "List files in the current directory (-a hidden, -r reverse, -R recursive)."
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        match parse_listing(args)? {
            Listing::Grep(term) => self.grep(&term, ctx),
            Listing::Entries {
                show_hidden,
                reverse,
                recursive: true,
            } => self.list_tree(show_hidden, reverse, ctx),
            Listing::Entries {
                show_hidden,
                reverse,
                recursive: false,
            } => self.list_children(show_hidden, reverse, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::Harness;
    use std::collections::HashSet;
    use crate::core::state::SessionState;
    use crate::fs::{FileSystem, FsResult, WalkEntry, WriteMode};
    use crate::input::ScriptedInput;
    use std::fs;
    use std::io::{self, Cursor};
    use std::path::Path;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn listed(out: &str) -> Vec<&str> {
        out.lines()
            .filter(|line| !line.starts_with("Listing files in: "))
            .collect()
    }

    #[test]
    fn test_parse_flags() {
        assert_eq!(
            parse_listing(&args(&["-a", "-r"])).unwrap(),
            Listing::Entries {
                show_hidden: true,
                reverse: true,
                recursive: false
            }
        );
        assert_eq!(
            parse_listing(&args(&["-Ra"])).unwrap(),
            Listing::Entries {
                show_hidden: true,
                reverse: false,
                recursive: true
            }
        );
        assert_eq!(
            parse_listing(&args(&["|", "grep", "x"])).unwrap(),
            Listing::Grep("x".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            parse_listing(&args(&["-l"])),
            Err(CommandError::InvalidOption(flag)) if flag == "-l"
        ));
        assert!(matches!(
            parse_listing(&args(&["somedir"])),
            Err(CommandError::InvalidOption(_))
        ));
        assert!(matches!(
            parse_listing(&args(&["-"])),
            Err(CommandError::InvalidOption(_))
        ));
        assert!(matches!(
            parse_listing(&args(&["-a", "|", "grep", "x"])),
            Err(CommandError::Usage { .. })
        ));
        assert!(matches!(
            parse_listing(&args(&["|", "grep"])),
            Err(CommandError::MissingOperand("grep"))
        ));
        assert!(matches!(
            parse_listing(&args(&["|", "wc"])),
            Err(CommandError::UnknownCommand(cmd)) if cmd == "wc"
        ));
    }

    #[test]
    fn test_ls_empty_directory() {
        let mut sh = Harness::new();
        let out = sh.run("ls");
        assert_eq!(out, format!("Listing files in: {}\n", sh.cwd().display()));
    }

    #[test]
    fn test_ls_with_files() {
        let mut sh = Harness::new();
        sh.write("file1.txt", "");
        sh.write("file2.txt", "");
        fs::create_dir(sh.path("folder1")).unwrap();

        let out = sh.run("ls");
        assert_eq!(listed(&out), vec!["file1.txt", "file2.txt", "folder1"]);
    }

    #[test]
    fn test_ls_hides_dotfiles_unless_asked() {
        let mut sh = Harness::new();
        sh.write(".hiddenFile.txt", "");
        sh.write("shown.txt", "");

        let plain = sh.run("ls");
        let all = sh.run("ls -a");
        assert_eq!(listed(&plain), vec!["shown.txt"]);
        assert_eq!(listed(&all), vec![".hiddenFile.txt", "shown.txt"]);

        let plain: HashSet<_> = listed(&plain).into_iter().collect();
        let all: HashSet<_> = listed(&all).into_iter().collect();
        assert!(all.is_superset(&plain));
        assert!(all.difference(&plain).all(|name| name.starts_with('.')));
    }

    #[test]
    fn test_ls_reverse() {
        let mut sh = Harness::new();
        for name in ["file1.txt", "file3.txt", "file2.txt"] {
            sh.write(name, "");
        }

        let forward = sh.run("ls");
        let backward = sh.run("ls -r");
        let mut expected = listed(&forward);
        expected.reverse();
        assert_eq!(listed(&backward), vec!["file3.txt", "file2.txt", "file1.txt"]);
        assert_eq!(listed(&backward), expected);
    }

    #[test]
    fn test_ls_all_and_reverse_compose() {
        let mut sh = Harness::new();
        for name in [".a", "b", "c"] {
            sh.write(name, "");
        }

        assert_eq!(listed(&sh.run("ls -a -r")), vec!["c", "b", ".a"]);
        assert_eq!(listed(&sh.run("ls -ra")), vec!["c", "b", ".a"]);
    }

    #[test]
    fn test_ls_grep() {
        let mut sh = Harness::new();
        sh.write("test_grep.txt", "");
        sh.write("other_file.txt", "");
        sh.write(".test_grep_hidden", "");

        let out = sh.run("ls | grep test_grep");
        assert_eq!(out, ".test_grep_hidden\ntest_grep.txt\n");
        assert_eq!(sh.run("ls | grep TEST"), "");
    }

    #[test]
    fn test_ls_invalid_option_lists_nothing() {
        let mut sh = Harness::new();
        sh.write("visible.txt", "");

        assert_eq!(sh.run("ls -a -x"), "Invalid option: -x\n");
    }

    #[test]
    fn test_ls_recursive() {
        let mut sh = Harness::new();
        fs::create_dir_all(sh.path("dir/nested")).unwrap();
        sh.write("dir/nested/deep.txt", "");
        sh.write("dir/top.txt", "");
        sh.write("root.txt", "");
        fs::create_dir(sh.path(".git")).unwrap();
        sh.write(".git/config", "");

        let out = sh.run("ls -R");
        let lines = listed(&out);
        let expected: HashSet<String> = [
            "dir",
            "dir/nested",
            "dir/nested/deep.txt",
            "dir/top.txt",
            "root.txt",
        ]
        .iter()
        .map(|p| Path::new(p).display().to_string())
        .collect();
        let got: HashSet<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(got, expected);

        let position = |p: &str| {
            let p = Path::new(p).display().to_string();
            lines.iter().position(|l| *l == p).unwrap()
        };
        assert!(position("dir") < position("dir/nested"));
        assert!(position("dir/nested") < position("dir/nested/deep.txt"));
        assert!(position("dir") < position("dir/top.txt"));

        let with_hidden = sh.run("ls -R -a");
        assert!(listed(&with_hidden).contains(&".git"));
        assert_eq!(listed(&with_hidden).len(), 7);
    }

    #[test]
    fn test_ls_unreadable_directory() {
        let mut sh = Harness::new();
        sh.write("not_a_directory.txt", "");
        sh.state.set_current_dir(sh.path("not_a_directory.txt"));

        let out = sh.run("ls");
        assert!(out.starts_with("ls: cannot open directory '"));
        assert!(!out.contains("Listing files in"));
    }

    /// Gateway whose walk hits one unreadable subdirectory.
    struct LockedSubdir;

    impl FileSystem for LockedSubdir {
        fn exists(&self, _path: &Path) -> bool {
            true
        }

        fn is_dir(&self, _path: &Path) -> bool {
            true
        }

        fn list_children(&self, _path: &Path) -> FsResult<Vec<String>> {
            Ok(Vec::new())
        }

        fn walk<'a>(
            &'a self,
            _root: &Path,
            _reverse: bool,
            _show_hidden: bool,
        ) -> Box<dyn Iterator<Item = FsResult<WalkEntry>> + 'a> {
            let denied = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
            Box::new(
                vec![
                    Ok(WalkEntry {
                        relative: "open".into(),
                    }),
                    Err(FsError::from(denied).with_path("/work/locked")),
                    Ok(WalkEntry {
                        relative: "zzz.txt".into(),
                    }),
                ]
                .into_iter(),
            )
        }

        fn create_file(&self, _path: &Path) -> FsResult<()> {
            Ok(())
        }

        fn create_dir(&self, _path: &Path) -> FsResult<()> {
            Ok(())
        }

        fn delete(&self, _path: &Path) -> FsResult<()> {
            Ok(())
        }

        fn move_entry(&self, _src: &Path, _dst: &Path, _overwrite: bool) -> FsResult<()> {
            Ok(())
        }

        fn read_lines(&self, _path: &Path) -> FsResult<Vec<String>> {
            Ok(Vec::new())
        }

        fn open_for_write(
            &self,
            _path: &Path,
            _mode: WriteMode,
            _create: bool,
        ) -> FsResult<Box<dyn Write>> {
            Ok(Box::new(io::sink()))
        }
    }

    #[test]
    fn test_ls_recursive_names_the_unreadable_subdirectory() {
        let mut state = SessionState::new(Path::new("/work"));
        let mut input = ScriptedInput::new(Cursor::new(Vec::<u8>::new()));
        let mut out: Vec<u8> = Vec::new();
        let gateway = LockedSubdir;
        let mut ctx = Context::new(&mut state, &gateway, &mut input, &mut out);

        LsCommand::new().execute(&args(&["-R"]), &mut ctx).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "Listing files in: /work\n\
             open\n\
             ls: cannot read '/work/locked': Permission denied\n\
             zzz.txt\n"
        );
    }
}
