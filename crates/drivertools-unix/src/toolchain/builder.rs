//! Builder for [`GenericUnixToolchain`].

use super::GenericUnixToolchain;
use crate::fallback::default_fallback;
use crate::search_path::{env_search_paths, normalize};
use drivertools_core::{Environment, FsProvider, PlatformFallback, SystemFs, Tool};
use std::collections::HashMap;
use std::path::PathBuf;

enum FallbackChoice {
    HostDefault,
    Custom(Box<dyn PlatformFallback>),
    Disabled,
}

/// Configures a [`GenericUnixToolchain`].
///
/// Anything left unset is taken from the running process when
/// [`build`](Self::build) is called.
pub struct GenericUnixToolchainBuilder {
    env: Environment,
    executable_dir: Option<PathBuf>,
    current_dir: Option<PathBuf>,
    fallback: FallbackChoice,
    fs: Box<dyn FsProvider>,
    overrides: HashMap<Tool, PathBuf>,
}

impl GenericUnixToolchainBuilder {
    pub(super) fn new(env: Environment) -> Self {
        Self {
            env,
            executable_dir: None,
            current_dir: None,
            fallback: FallbackChoice::HostDefault,
            fs: Box::new(SystemFs),
            overrides: HashMap::new(),
        }
    }

    /// Directory to search before `PATH`. Defaults to the directory of
    /// `std::env::current_exe()`. A relative path is taken from the process
    /// working directory.
    #[must_use]
    pub fn executable_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.executable_dir = Some(dir.into());
        self
    }

    /// Directory relative `PATH` entries are resolved against. Defaults to
    /// `std::env::current_dir()`. A relative path is taken from the process
    /// working directory.
    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Use `fallback` instead of the host default.
    #[must_use]
    pub fn fallback(mut self, fallback: impl PlatformFallback + 'static) -> Self {
        self.fallback = FallbackChoice::Custom(Box::new(fallback));
        self
    }

    /// Never consult a platform fallback, even on hosts that have one.
    #[must_use]
    pub fn without_fallback(mut self) -> Self {
        self.fallback = FallbackChoice::Disabled;
        self
    }

    #[must_use]
    pub fn fs(mut self, fs: impl FsProvider + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    /// Pin `tool` to `path` for `Toolchain::resolved_tool_path`.
    #[must_use]
    pub fn override_tool_path(mut self, tool: Tool, path: impl Into<PathBuf>) -> Self {
        self.overrides.insert(tool, path.into());
        self
    }

    /// Compute the search path and assemble the toolchain.
    ///
    /// Never fails. If the driver's own location or the working directory
    /// cannot be determined, the co-located step is skipped or relative
    /// `PATH` entries are dropped.
    pub fn build(self) -> GenericUnixToolchain {
        let executable_dir = match self.executable_dir {
            Some(dir) => anchor(dir, "executable directory"),
            None => detect_executable_dir(),
        };
        let current_dir = match self.current_dir {
            Some(dir) => anchor(dir, "current directory"),
            None => detect_current_dir(),
        };
        let search_paths = env_search_paths(self.env.get("PATH"), current_dir.as_deref());

        let fallback = match self.fallback {
            FallbackChoice::HostDefault => default_fallback(&self.env),
            FallbackChoice::Custom(fallback) => Some(fallback),
            FallbackChoice::Disabled => None,
        };

        tracing::debug!(
            executable_dir = ?executable_dir,
            search_paths = search_paths.len(),
            has_fallback = fallback.is_some(),
            "Built generic Unix toolchain"
        );

        GenericUnixToolchain {
            env: self.env,
            executable_dir,
            search_paths,
            fallback,
            fs: self.fs,
            overrides: self.overrides,
        }
    }
}

/// Make a configured directory absolute, dropping it if the process working
/// directory is needed and unknown.
fn anchor(dir: PathBuf, what: &str) -> Option<PathBuf> {
    if dir.is_absolute() {
        return Some(normalize(&dir));
    }

    match std::env::current_dir() {
        Ok(cwd) => Some(normalize(&cwd.join(&dir))),
        Err(e) => {
            tracing::warn!(
                error = %e,
                dir = %dir.display(),
                "Cannot resolve relative {what}; ignoring it"
            );
            None
        }
    }
}

fn detect_executable_dir() -> Option<PathBuf> {
    match std::env::current_exe() {
        Ok(exe) => exe.parent().map(PathBuf::from),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Cannot determine driver location; skipping co-located tools"
            );
            None
        }
    }
}

fn detect_current_dir() -> Option<PathBuf> {
    match std::env::current_dir() {
        Ok(cwd) => Some(cwd),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Cannot determine current directory; ignoring relative PATH entries"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_come_from_process() {
        let tc = GenericUnixToolchain::builder(Environment::new())
            .without_fallback()
            .build();

        let expected = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(PathBuf::from));
        assert_eq!(tc.executable_dir().map(PathBuf::from), expected);
        assert!(!tc.has_fallback());
    }

    #[test]
    fn test_explicit_dirs_are_used() {
        let tc = GenericUnixToolchain::builder(Environment::new().with_var("PATH", "bin"))
            .executable_dir("/opt/driver/bin")
            .current_dir("/work")
            .without_fallback()
            .build();

        assert_eq!(
            tc.executable_dir(),
            Some(std::path::Path::new("/opt/driver/bin"))
        );
        assert_eq!(tc.search_paths(), &[PathBuf::from("/work/bin")]);
    }

    #[test]
    fn test_relative_dirs_are_made_absolute() {
        let cwd = std::env::current_dir().unwrap();
        let fs = crate::test_utils::MockFs::new().with_file(cwd.join("driver/bin/clang"));

        let tc = GenericUnixToolchain::builder(Environment::new().with_var("PATH", "a:../b"))
            .executable_dir("driver/bin")
            .current_dir("relative/cwd")
            .without_fallback()
            .fs(fs)
            .build();

        assert_eq!(tc.executable_dir(), Some(cwd.join("driver/bin").as_path()));
        assert_eq!(
            tc.search_paths(),
            &[cwd.join("relative/cwd/a"), cwd.join("relative/b")]
        );

        let resolved = tc.lookup("clang").unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved, cwd.join("driver/bin/clang"));
    }

    #[test]
    fn test_host_default_fallback_selection() {
        let tc = GenericUnixToolchain::builder(Environment::new())
            .executable_dir("/opt/driver/bin")
            .build();

        assert_eq!(tc.has_fallback(), cfg!(target_os = "macos"));
    }
}
