use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use walkdir::WalkDir;

use super::{FileSystem, FsError, FsErrorKind, FsResult, WalkEntry, WriteMode};

/// [`FileSystem`] backed by the host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_children(&self, path: &Path) -> FsResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn walk<'a>(
        &'a self,
        root: &Path,
        reverse: bool,
        show_hidden: bool,
    ) -> Box<dyn Iterator<Item = FsResult<WalkEntry>> + 'a> {
        let base = root.to_path_buf();
        let walker = WalkDir::new(root)
            .min_depth(1)
            .sort_by(move |a, b| {
                if reverse {
                    b.file_name().cmp(a.file_name())
                } else {
                    a.file_name().cmp(b.file_name())
                }
            })
            .into_iter()
            .filter_entry(move |entry| {
                show_hidden
                    || entry.depth() == 0
                    || !entry.file_name().to_string_lossy().starts_with('.')
            })
            .map(move |entry| -> FsResult<WalkEntry> {
                let entry = entry?;
                let relative = entry
                    .path()
                    .strip_prefix(&base)
                    .unwrap_or(entry.path())
                    .to_path_buf();
                Ok(WalkEntry { relative })
            });
        Box::new(walker)
    }

    fn create_file(&self, path: &Path) -> FsResult<()> {
        OpenOptions::new().write(true).create_new(true).open(path)?;
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> FsResult<()> {
        fs::create_dir(path)?;
        Ok(())
    }

    fn delete(&self, path: &Path) -> FsResult<()> {
        let metadata = fs::symlink_metadata(path)?;
        if metadata.is_dir() {
            fs::remove_dir(path)?;
        } else {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn move_entry(&self, src: &Path, dst: &Path, overwrite: bool) -> FsResult<()> {
        fs::symlink_metadata(src)?;
        if !overwrite && fs::symlink_metadata(dst).is_ok() {
            return Err(FsError::new(FsErrorKind::AlreadyExists));
        }
        fs::rename(src, dst)?;
        Ok(())
    }

    fn read_lines(&self, path: &Path) -> FsResult<Vec<String>> {
        if path.is_dir() {
            return Err(FsError::new(FsErrorKind::IsADirectory));
        }
        let reader = BufReader::new(File::open(path)?);
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }
        Ok(lines)
    }

    fn open_for_write(
        &self,
        path: &Path,
        mode: WriteMode,
        create: bool,
    ) -> FsResult<Box<dyn Write>> {
        if path.is_dir() {
            return Err(FsError::new(FsErrorKind::IsADirectory));
        }
        let mut options = OpenOptions::new();
        match mode {
            WriteMode::Truncate => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        let file = options.create(create).open(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}
