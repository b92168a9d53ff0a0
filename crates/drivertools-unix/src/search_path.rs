//! Search path construction from a `PATH`-style variable.

use std::path::{Component, Path, PathBuf};

/// `PATH` entry separator on Unix.
const PATH_SEPARATOR: char = ':';

/// Build the ordered list of directories to scan for executables.
///
/// - Empty entries are skipped.
/// - Relative entries are resolved against `cwd`; when `cwd` is missing or
///   itself relative they are skipped.
/// - Every returned path is absolute and lexically normalized.
///
/// An absent or empty `path_var` yields an empty list.
pub fn env_search_paths(path_var: Option<&str>, cwd: Option<&Path>) -> Vec<PathBuf> {
    let Some(path_var) = path_var else {
        return Vec::new();
    };

    path_var
        .split(PATH_SEPARATOR)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| absolutize(Path::new(entry), cwd))
        .collect()
}

fn absolutize(entry: &Path, cwd: Option<&Path>) -> Option<PathBuf> {
    if entry.is_absolute() {
        return Some(normalize(entry));
    }

    match cwd {
        Some(cwd) if cwd.is_absolute() => Some(normalize(&cwd.join(entry))),
        _ => {
            tracing::trace!(entry = %entry.display(), "Skipping relative search path entry");
            None
        }
    }
}

/// Remove `.` components and fold `..` into its parent, without touching the
/// filesystem. `..` at the root stays at the root.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
