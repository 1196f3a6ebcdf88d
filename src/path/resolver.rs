use std::path::{Component, Path, PathBuf};

/// Turns user-typed paths into absolute, normalized paths without touching
/// the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// Joins `input` onto `base` unless it is already absolute, then
    /// normalizes the result. The path does not need to exist.
    pub fn resolve(&self, base: &Path, input: &str) -> PathBuf {
        let input = Path::new(input);
        if input.is_absolute() {
            self.normalize(input)
        } else {
            self.normalize(&base.join(input))
        }
    }

    /// Drops `.` segments and lets `..` consume the previous segment. `..`
    /// at the root stays at the root.
    pub fn normalize(&self, path: &Path) -> PathBuf {
        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
                Component::RootDir => normalized.push(component.as_os_str()),
                Component::CurDir => {}
                Component::ParentDir => {
                    if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                        normalized.pop();
                    }
                }
                Component::Normal(part) => normalized.push(part),
            }
        }
        normalized
    }
}
