//! Toolchain port.
//!
//! This is the seam a compiler driver codes against. A driver asks the
//! toolchain where its tools are and how its outputs are named; it never
//! probes the filesystem itself.

use crate::domain::{LinkOutputType, Sanitizer, Tool, Triple};
use crate::env::Environment;
use crate::error::ToolchainResult;
use std::path::{Path, PathBuf};

/// Tool location and naming policy for one host platform family.
pub trait Toolchain: Send + Sync {
    /// The environment snapshot this toolchain was built from.
    fn env(&self) -> &Environment;

    /// Resolve a tool role to an absolute path using the platform's search order.
    fn tool_path(&self, tool: Tool) -> ToolchainResult<PathBuf>;

    /// An explicit path registered for `tool`, if any.
    fn tool_override(&self, _tool: Tool) -> Option<&Path> {
        None
    }

    /// Filename the linker should write for `module_name`.
    fn make_linker_output_filename(&self, module_name: &str, output_type: LinkOutputType)
    -> String;

    /// The SDK root to compile against, if the platform has one.
    fn default_sdk_path(&self) -> Option<PathBuf>;

    /// Whether the driver invocation is recorded in emitted debug info.
    fn should_store_invocation_in_debug_info(&self) -> bool;

    /// Filename of the runtime library for `sanitizer` on `target`.
    fn runtime_library_name(&self, sanitizer: Sanitizer, target: &Triple, is_shared: bool)
    -> String;

    /// Resolve a tool, honoring configured overrides before searching.
    ///
    /// Precedence:
    /// 1. Path registered on the toolchain (`tool_override`)
    /// 2. `DRIVERTOOLS_<EXE>_EXEC` in the environment snapshot
    /// 3. `tool_path`
    ///
    /// Overrides are returned as given, without checking that they exist.
    fn resolved_tool_path(&self, tool: Tool) -> ToolchainResult<PathBuf> {
        if let Some(path) = self.tool_override(tool) {
            tracing::debug!(%tool, path = %path.display(), "Using registered tool override");
            return Ok(path.to_path_buf());
        }

        let var = override_env_var(tool);
        if let Some(value) = self.env().get(&var).filter(|v| !v.is_empty()) {
            tracing::debug!(%tool, %var, path = value, "Using tool override from environment");
            return Ok(PathBuf::from(value));
        }

        self.tool_path(tool)
    }
}

/// Environment variable that overrides the location of `tool`.
///
/// `swift-autolink-extract` becomes `DRIVERTOOLS_SWIFT_AUTOLINK_EXTRACT_EXEC`.
pub fn override_env_var(tool: Tool) -> String {
    format!(
        "DRIVERTOOLS_{}_EXEC",
        tool.executable_name().to_ascii_uppercase().replace('-', "_")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolchainError;
    use std::collections::HashMap;

    /// Toolchain that finds nothing on its own.
    struct StubToolchain {
        env: Environment,
        overrides: HashMap<Tool, PathBuf>,
    }

    impl Toolchain for StubToolchain {
        fn env(&self) -> &Environment {
            &self.env
        }

        fn tool_path(&self, tool: Tool) -> ToolchainResult<PathBuf> {
            Err(ToolchainError::not_found(tool.executable_name(), &[]))
        }

        fn tool_override(&self, tool: Tool) -> Option<&Path> {
            self.overrides.get(&tool).map(PathBuf::as_path)
        }

        fn make_linker_output_filename(&self, module_name: &str, _: LinkOutputType) -> String {
            module_name.to_string()
        }

        fn default_sdk_path(&self) -> Option<PathBuf> {
            None
        }

        fn should_store_invocation_in_debug_info(&self) -> bool {
            false
        }

        fn runtime_library_name(&self, _: Sanitizer, _: &Triple, _: bool) -> String {
            String::new()
        }
    }

    fn stub(env: Environment) -> StubToolchain {
        StubToolchain {
            env,
            overrides: HashMap::new(),
        }
    }

    #[test]
    fn test_override_env_var_names() {
        assert_eq!(override_env_var(Tool::Compiler), "DRIVERTOOLS_SWIFT_EXEC");
        assert_eq!(override_env_var(Tool::StaticLinker), "DRIVERTOOLS_AR_EXEC");
        assert_eq!(
            override_env_var(Tool::AutolinkExtract),
            "DRIVERTOOLS_SWIFT_AUTOLINK_EXTRACT_EXEC"
        );
    }

    #[test]
    fn test_resolved_falls_through_to_tool_path() {
        let toolchain = stub(Environment::new());
        let err = toolchain.resolved_tool_path(Tool::Clang).unwrap_err();
        assert_eq!(err.tool(), "clang");
    }

    #[test]
    fn test_env_override_is_used() {
        let toolchain =
            stub(Environment::new().with_var("DRIVERTOOLS_AR_EXEC", "/opt/llvm/bin/llvm-ar"));
        assert_eq!(
            toolchain.resolved_tool_path(Tool::StaticLinker).unwrap(),
            PathBuf::from("/opt/llvm/bin/llvm-ar")
        );
    }

    #[test]
    fn test_empty_env_override_is_ignored() {
        let toolchain = stub(Environment::new().with_var("DRIVERTOOLS_AR_EXEC", ""));
        assert!(toolchain.resolved_tool_path(Tool::StaticLinker).is_err());
    }

    #[test]
    fn test_registered_override_beats_env() {
        let mut toolchain =
            stub(Environment::new().with_var("DRIVERTOOLS_CLANG_EXEC", "/from/env/clang"));
        toolchain
            .overrides
            .insert(Tool::Clang, PathBuf::from("/registered/clang"));

        assert_eq!(
            toolchain.resolved_tool_path(Tool::Clang).unwrap(),
            PathBuf::from("/registered/clang")
        );
        // The shared executable name does not leak overrides across roles.
        assert_eq!(
            toolchain.resolved_tool_path(Tool::DynamicLinker).unwrap(),
            PathBuf::from("/from/env/clang")
        );
    }
}
