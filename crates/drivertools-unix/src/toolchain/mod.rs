//! Toolchain for Unix-like hosts.
//!
//! Tools are looked up in three places, first match wins:
//!
//! 1. The directory the driver executable lives in, so a packaged toolchain
//!    uses the binaries it ships with.
//! 2. Each `PATH` directory, in order.
//! 3. The platform fallback, when one was configured.

mod builder;

pub use builder::GenericUnixToolchainBuilder;

use crate::lookup::{is_bare_name, lookup_executable_path};
use drivertools_core::{
    Environment, FsProvider, LinkOutputType, PlatformFallback, Sanitizer, Tool, Toolchain,
    ToolchainError, ToolchainResult, Triple,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Toolchain for Unix-like systems.
///
/// Immutable once built: the environment, search path, and fallback are
/// fixed at construction. Lookups are not cached, so every call sees the
/// filesystem as it is at that moment.
pub struct GenericUnixToolchain {
    env: Environment,
    executable_dir: Option<PathBuf>,
    search_paths: Vec<PathBuf>,
    fallback: Option<Box<dyn PlatformFallback>>,
    fs: Box<dyn FsProvider>,
    overrides: HashMap<Tool, PathBuf>,
}

impl GenericUnixToolchain {
    /// Build a toolchain for the running driver.
    ///
    /// Uses the current executable's directory, the current working
    /// directory, and the host's default platform fallback.
    pub fn new(env: Environment) -> Self {
        Self::builder(env).build()
    }

    pub fn builder(env: Environment) -> GenericUnixToolchainBuilder {
        GenericUnixToolchainBuilder::new(env)
    }

    /// Directory searched before `PATH`.
    pub fn executable_dir(&self) -> Option<&Path> {
        self.executable_dir.as_deref()
    }

    /// Directories derived from `PATH` at construction.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    pub const fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Resolve an executable name to an absolute path.
    ///
    /// Looks next to the driver first, then along `PATH`, then asks the
    /// platform fallback. A fallback error is returned as-is.
    ///
    /// `executable` must be a bare file name; a name containing `/` is
    /// rejected as not found without probing anything.
    pub fn lookup(&self, executable: &str) -> ToolchainResult<PathBuf> {
        if !is_bare_name(executable) {
            tracing::debug!(%executable, "Not a bare file name; refusing lookup");
            return Err(ToolchainError::not_found(executable, &[]));
        }

        let mut attempts = Vec::new();

        if let Some(dir) = &self.executable_dir {
            let colocated =
                lookup_executable_path(executable, std::slice::from_ref(dir), self.fs.as_ref());
            attempts.extend(colocated.attempts);
            if let Some(path) = colocated.found {
                tracing::debug!(%executable, path = %path.display(), "Found co-located tool");
                return Ok(path);
            }
        }

        let searched = lookup_executable_path(executable, &self.search_paths, self.fs.as_ref());
        attempts.extend(searched.attempts);
        if let Some(path) = searched.found {
            tracing::debug!(%executable, path = %path.display(), "Found tool in search path");
            return Ok(path);
        }

        if let Some(fallback) = &self.fallback {
            tracing::debug!(%executable, "Tool not in search path, trying platform fallback");
            return fallback.lookup(executable);
        }

        tracing::debug!(%executable, checked = attempts.len(), "Tool not found");
        Err(ToolchainError::not_found(executable, &attempts))
    }
}

impl Toolchain for GenericUnixToolchain {
    fn env(&self) -> &Environment {
        &self.env
    }

    fn tool_path(&self, tool: Tool) -> ToolchainResult<PathBuf> {
        self.lookup(tool.executable_name())
    }

    fn tool_override(&self, tool: Tool) -> Option<&Path> {
        self.overrides.get(&tool).map(PathBuf::as_path)
    }

    fn make_linker_output_filename(
        &self,
        module_name: &str,
        output_type: LinkOutputType,
    ) -> String {
        match output_type {
            LinkOutputType::Executable => module_name.to_string(),
            LinkOutputType::DynamicLibrary => format!("lib{module_name}.so"),
            LinkOutputType::StaticLibrary => format!("lib{module_name}.a"),
        }
    }

    fn default_sdk_path(&self) -> Option<PathBuf> {
        None
    }

    fn should_store_invocation_in_debug_info(&self) -> bool {
        false
    }

    // TODO: emit `libclang_rt.<name>-<arch>.so` for shared requests once
    // shared sanitizer runtimes are linked on Linux; both map to the archive today.
    fn runtime_library_name(
        &self,
        sanitizer: Sanitizer,
        target: &Triple,
        _is_shared: bool,
    ) -> String {
        format!(
            "libclang_rt.{}-{}.a",
            sanitizer.library_name(),
            target.arch_name()
        )
    }
}

impl std::fmt::Debug for GenericUnixToolchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericUnixToolchain")
            .field("executable_dir", &self.executable_dir)
            .field("search_paths", &self.search_paths)
            .field("has_fallback", &self.fallback.is_some())
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}
