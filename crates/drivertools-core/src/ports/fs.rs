//! Filesystem port for testable candidate probing.

use crate::attempt::AttemptOutcome;
use std::path::Path;

/// Checks whether a candidate tool path exists.
pub trait FsProvider: Send + Sync {
    /// Probe a single candidate path.
    ///
    /// Only existence matters; implementations must not check permissions
    /// or run the file.
    fn probe(&self, path: &Path) -> AttemptOutcome;
}

/// Production filesystem provider backed by `std::fs`.
///
/// Symlinks are followed, so a link to a real binary counts as found.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFs;

impl FsProvider for SystemFs {
    fn probe(&self, path: &Path) -> AttemptOutcome {
        match std::fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => AttemptOutcome::Found,
            Ok(_) => AttemptOutcome::NotAFile,
            Err(_) => AttemptOutcome::NotFound,
        }
    }
}
