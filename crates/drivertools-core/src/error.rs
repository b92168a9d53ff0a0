//! Toolchain error types.

use crate::attempt::Attempt;
use std::fmt::{self, Write as _};
use thiserror::Error;

/// Errors returned when resolving a tool.
///
/// There is a single kind: every failure mode of a lookup
/// (co-located miss, search path miss, platform fallback miss) collapses
/// into "the tool could not be found".
#[derive(Debug, Error)]
pub enum ToolchainError {
    #[error("unable to find tool '{tool}'. Tried:\n{attempts}")]
    ToolNotFound { tool: String, attempts: String },
}

impl ToolchainError {
    /// Create a `ToolNotFound` error listing every candidate probed.
    pub fn not_found(tool: impl Into<String>, attempts: &[Attempt]) -> Self {
        Self::not_found_with(tool, attempts)
    }

    /// Create a `ToolNotFound` error with one `✗` line per checked location.
    ///
    /// For lookups whose candidates are not plain paths, such as a command
    /// that was asked to locate the tool.
    pub fn not_found_with<I>(tool: impl Into<String>, checked: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let mut listing = String::new();
        for (i, item) in checked.into_iter().enumerate() {
            if i > 0 {
                listing.push('\n');
            }
            let _ = write!(listing, "  ✗ {item}");
        }
        if listing.is_empty() {
            listing.push_str("  (no candidates checked)");
        }

        Self::ToolNotFound {
            tool: tool.into(),
            attempts: listing,
        }
    }

    /// The executable name the failed lookup was for.
    pub fn tool(&self) -> &str {
        match self {
            Self::ToolNotFound { tool, .. } => tool,
        }
    }
}

/// Result type for toolchain operations.
pub type ToolchainResult<T> = Result<T, ToolchainError>;
