//! Logical tool roles within a toolchain.

use serde::{Deserialize, Serialize};

/// A role a command-line tool plays in the build pipeline.
///
/// Two roles may share an executable (`DynamicLinker` and `Clang` are both
/// `clang` on Unix), but every role names exactly one executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// The compiler frontend itself.
    Compiler,
    /// Archiver used to produce static libraries.
    StaticLinker,
    /// Linker driver used to produce executables and shared libraries.
    DynamicLinker,
    /// The C-family compiler.
    Clang,
    /// Extracts autolink entries from object files.
    AutolinkExtract,
    /// Debug symbol utility.
    Dsymutil,
}

impl Tool {
    /// Every tool role, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Compiler,
        Self::StaticLinker,
        Self::DynamicLinker,
        Self::Clang,
        Self::AutolinkExtract,
        Self::Dsymutil,
    ];

    /// The canonical executable name for this role.
    pub const fn executable_name(self) -> &'static str {
        match self {
            Self::Compiler => "swift",
            Self::StaticLinker => "ar",
            Self::DynamicLinker | Self::Clang => "clang",
            Self::AutolinkExtract => "swift-autolink-extract",
            Self::Dsymutil => "dsymutil",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.executable_name())
    }
}
