//! Runtime sanitizer variants.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A runtime instrumentation library linked into built binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sanitizer {
    /// Address sanitizer.
    Address,
    /// Thread sanitizer.
    Thread,
    /// Undefined behavior sanitizer.
    Undefined,
    /// libFuzzer.
    Fuzzer,
    /// Scudo hardened allocator.
    Scudo,
}

impl Sanitizer {
    /// The spelling accepted on the driver command line (`-sanitize=<name>`).
    pub const fn option_name(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Thread => "thread",
            Self::Undefined => "undefined",
            Self::Fuzzer => "fuzzer",
            Self::Scudo => "scudo",
        }
    }

    /// Short name used in runtime library filenames.
    pub const fn library_name(self) -> &'static str {
        match self {
            Self::Address => "asan",
            Self::Thread => "tsan",
            Self::Undefined => "ubsan",
            Self::Fuzzer => "fuzzer",
            Self::Scudo => "scudo",
        }
    }
}

impl std::fmt::Display for Sanitizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.option_name())
    }
}

/// Returned when parsing a sanitizer name that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sanitizer '{0}'")]
pub struct UnknownSanitizer(pub String);

impl FromStr for Sanitizer {
    type Err = UnknownSanitizer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "address" => Ok(Self::Address),
            "thread" => Ok(Self::Thread),
            "undefined" => Ok(Self::Undefined),
            "fuzzer" => Ok(Self::Fuzzer),
            "scudo" => Ok(Self::Scudo),
            other => Err(UnknownSanitizer(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_names() {
        assert_eq!(Sanitizer::Address.library_name(), "asan");
        assert_eq!(Sanitizer::Thread.library_name(), "tsan");
        assert_eq!(Sanitizer::Undefined.library_name(), "ubsan");
        assert_eq!(Sanitizer::Fuzzer.library_name(), "fuzzer");
        assert_eq!(Sanitizer::Scudo.library_name(), "scudo");
    }

    #[test]
    fn test_parse_option_names() {
        assert_eq!("address".parse::<Sanitizer>(), Ok(Sanitizer::Address));
        assert_eq!("undefined".parse::<Sanitizer>(), Ok(Sanitizer::Undefined));
        assert_eq!(
            "asan".parse::<Sanitizer>(),
            Err(UnknownSanitizer("asan".to_string()))
        );
    }
}
