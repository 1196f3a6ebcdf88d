use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod local;

pub use local::LocalFs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    NotFound,
    AlreadyExists,
    NotADirectory,
    IsADirectory,
    DirectoryNotEmpty,
    InvalidArgument,
    Io,
}

/// A failed filesystem operation, classified so callers can match on the
/// kind instead of on OS messages.
#[derive(Debug)]
pub struct FsError {
    kind: FsErrorKind,
    message: Option<String>,
    path: Option<PathBuf>,
}

impl FsError {
    pub fn new(kind: FsErrorKind) -> Self {
        Self {
            kind,
            message: None,
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn kind(&self) -> FsErrorKind {
        self.kind
    }

    /// The entry that failed, when it differs from the one the caller asked
    /// about (e.g. a subdirectory hit during a walk).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl From<io::Error> for FsError {
    fn from(err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => FsErrorKind::NotFound,
            io::ErrorKind::AlreadyExists => FsErrorKind::AlreadyExists,
            io::ErrorKind::NotADirectory => FsErrorKind::NotADirectory,
            io::ErrorKind::IsADirectory => FsErrorKind::IsADirectory,
            io::ErrorKind::DirectoryNotEmpty => FsErrorKind::DirectoryNotEmpty,
            io::ErrorKind::InvalidInput => FsErrorKind::InvalidArgument,
            _ => FsErrorKind::Io,
        };
        let message = match kind {
            FsErrorKind::Io => Some(err.to_string()),
            _ => None,
        };
        FsError {
            kind,
            message,
            path: None,
        }
    }
}

impl From<walkdir::Error> for FsError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf);
        let fs_err = match err.into_io_error() {
            Some(io_err) => FsError::from(io_err),
            None => FsError {
                kind: FsErrorKind::Io,
                message: Some("filesystem loop detected".to_string()),
                path: None,
            },
        };
        match path {
            Some(path) => fs_err.with_path(path),
            None => fs_err,
        }
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FsErrorKind::NotFound => write!(f, "No such file or directory"),
            FsErrorKind::AlreadyExists => write!(f, "File exists"),
            FsErrorKind::NotADirectory => write!(f, "Not a directory"),
            FsErrorKind::IsADirectory => write!(f, "Is a directory"),
            FsErrorKind::DirectoryNotEmpty => write!(f, "Directory not empty"),
            FsErrorKind::InvalidArgument => write!(f, "Invalid argument"),
            FsErrorKind::Io => write!(
                f,
                "{}",
                self.message.as_deref().unwrap_or("Input/output error")
            ),
        }
    }
}

impl std::error::Error for FsError {}

pub type FsResult<T> = Result<T, FsError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Truncate,
    Append,
}

/// One entry produced by a recursive walk, relative to the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub relative: PathBuf,
}

/// Filesystem access used by the command handlers.
///
/// Paths handed to these methods are already absolute; resolution against
/// the session directory happens before the gateway is reached.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;

    /// Entry names of a directory, sorted by name.
    fn list_children(&self, path: &Path) -> FsResult<Vec<String>>;

    /// Depth-first walk of everything below `root`, parents before their
    /// contents. Siblings come in name order, or descending when `reverse`.
    /// Unless `show_hidden` is set, dot entries are skipped and hidden
    /// directories are never entered.
    fn walk<'a>(
        &'a self,
        root: &Path,
        reverse: bool,
        show_hidden: bool,
    ) -> Box<dyn Iterator<Item = FsResult<WalkEntry>> + 'a>;

    fn create_file(&self, path: &Path) -> FsResult<()>;
    fn create_dir(&self, path: &Path) -> FsResult<()>;

    /// Removes a file or an empty directory.
    fn delete(&self, path: &Path) -> FsResult<()>;

    fn move_entry(&self, src: &Path, dst: &Path, overwrite: bool) -> FsResult<()>;
    fn read_lines(&self, path: &Path) -> FsResult<Vec<String>>;
    fn open_for_write(
        &self,
        path: &Path,
        mode: WriteMode,
        create: bool,
    ) -> FsResult<Box<dyn Write>>;
}
