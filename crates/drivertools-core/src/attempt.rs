//! Records of individual candidate probes made during a lookup.

use std::path::PathBuf;

/// A single probe of a candidate location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// The full path that was checked.
    pub candidate: PathBuf,
    /// What the probe found there.
    pub outcome: AttemptOutcome,
}

impl Attempt {
    pub fn new(candidate: impl Into<PathBuf>, outcome: AttemptOutcome) -> Self {
        Self {
            candidate: candidate.into(),
            outcome,
        }
    }

    pub fn is_found(&self) -> bool {
        self.outcome == AttemptOutcome::Found
    }
}

impl std::fmt::Display for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.candidate.display(), self.outcome)
    }
}

/// Outcome of probing one candidate path.
///
/// Lookups only care about existence; no permission or version checks are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// A file exists at the candidate path.
    Found,
    /// Nothing exists at the candidate path.
    NotFound,
    /// Something exists there, but it is not a file (e.g. a directory).
    NotAFile,
}

impl std::fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found => write!(f, "found"),
            Self::NotFound => write!(f, "not found"),
            Self::NotAFile => write!(f, "not a file"),
        }
    }
}
