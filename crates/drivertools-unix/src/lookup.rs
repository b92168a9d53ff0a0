//! Directory-list probing for a single executable.

use drivertools_core::{Attempt, AttemptOutcome, FsProvider};
use std::path::PathBuf;

/// Result of scanning a list of directories for one executable.
#[derive(Debug, Clone, Default)]
pub struct LookupOutcome {
    /// First candidate that exists, if any.
    pub found: Option<PathBuf>,
    /// Every candidate probed, in order, ending with the hit if there was one.
    pub attempts: Vec<Attempt>,
}

/// Look for `filename` in each of `dirs`, in order, stopping at the first hit.
///
/// `filename` must be a bare name. An empty name, or one containing `/`,
/// matches nothing and probes nothing.
pub fn lookup_executable_path(
    filename: &str,
    dirs: &[PathBuf],
    fs: &dyn FsProvider,
) -> LookupOutcome {
    let mut outcome = LookupOutcome::default();
    if !is_bare_name(filename) {
        return outcome;
    }

    for dir in dirs {
        let candidate = dir.join(filename);
        let probed = fs.probe(&candidate);
        tracing::trace!(candidate = %candidate.display(), outcome = %probed, "Probed tool candidate");

        outcome.attempts.push(Attempt::new(candidate.clone(), probed));
        if probed == AttemptOutcome::Found {
            outcome.found = Some(candidate);
            return outcome;
        }
    }

    outcome
}

/// Whether `name` is a single non-empty path component.
pub(crate) fn is_bare_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/')
}
