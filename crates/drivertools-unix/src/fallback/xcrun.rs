//! `xcrun`-backed fallback for macOS hosts.
//!
//! Developer tools on macOS often live inside the active Xcode or Command
//! Line Tools directory rather than on `PATH`. `xcrun --find` knows where.

use drivertools_core::{Environment, PlatformFallback, ToolchainError, ToolchainResult};
use std::path::PathBuf;
use std::process::Command;

/// Finds tools by asking `xcrun --find <tool>`.
#[derive(Debug, Clone)]
pub struct XcrunFallback {
    program: PathBuf,
    sdk: Option<String>,
}

impl XcrunFallback {
    /// Create a fallback that runs `xcrun` from `PATH`.
    ///
    /// A non-empty `SDKROOT` in `env` is passed along as `-sdk`.
    pub fn new(env: &Environment) -> Self {
        Self {
            program: PathBuf::from("xcrun"),
            sdk: env
                .get("SDKROOT")
                .filter(|sdk| !sdk.is_empty())
                .map(String::from),
        }
    }

    /// Run `program` in place of `xcrun`.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self, executable: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(sdk) = &self.sdk {
            cmd.arg("-sdk").arg(sdk);
        }
        cmd.arg("--find").arg(executable);
        cmd
    }

    fn failure(&self, executable: &str, reason: impl std::fmt::Display) -> ToolchainError {
        ToolchainError::not_found_with(
            executable,
            [format!("{} --find {executable}: {reason}", self.program.display())],
        )
    }
}

impl PlatformFallback for XcrunFallback {
    fn lookup(&self, executable: &str) -> ToolchainResult<PathBuf> {
        let output = self
            .command(executable)
            .output()
            .map_err(|e| self.failure(executable, e))?;

        if !output.status.success() {
            return Err(self.failure(executable, output.status));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let found = stdout.lines().next().map(str::trim).unwrap_or_default();
        if found.is_empty() {
            return Err(self.failure(executable, "no output"));
        }

        tracing::debug!(%executable, path = found, "Resolved tool with xcrun");
        Ok(PathBuf::from(found))
    }
}
