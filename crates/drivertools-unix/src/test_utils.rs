//! Test doubles shared by the unit tests in this crate.

use drivertools_core::{AttemptOutcome, FsProvider};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// In-memory filesystem with predefined files and directories.
#[derive(Default)]
pub struct MockFs {
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }
}

impl FsProvider for MockFs {
    fn probe(&self, path: &Path) -> AttemptOutcome {
        if self.files.contains(path) {
            AttemptOutcome::Found
        } else if self.dirs.contains(path) {
            AttemptOutcome::NotAFile
        } else {
            AttemptOutcome::NotFound
        }
    }
}
