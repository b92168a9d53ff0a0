//! Platform fallback port.
//!
//! Some hosts keep tools outside any conventional `PATH` entry (on macOS,
//! inside the active developer directory). A resolver is handed at most one
//! fallback at construction and consults it only after its own search fails.

use crate::error::ToolchainResult;
use std::path::PathBuf;

/// Last-resort executable lookup provided by the host platform.
pub trait PlatformFallback: Send + Sync {
    /// Resolve `executable` to an absolute path.
    ///
    /// Failures must be reported as `ToolchainError::ToolNotFound`; the
    /// resolver hands them back to its caller unchanged.
    fn lookup(&self, executable: &str) -> ToolchainResult<PathBuf>;
}
