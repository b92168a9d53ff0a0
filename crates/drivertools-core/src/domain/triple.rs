//! Target triples.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A compilation target identifier of the form `arch-vendor-os[-environment]`.
///
/// The string is kept verbatim; components are split out on demand. Any
/// string is accepted, so a malformed `-target` value still round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Triple(String);

impl Triple {
    pub fn new(triple: impl Into<String>) -> Self {
        Self(triple.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The architecture component, exactly as written (`x86_64`, `aarch64`, ...).
    pub fn arch_name(&self) -> &str {
        self.component(0)
    }

    pub fn vendor_name(&self) -> &str {
        self.component(1)
    }

    pub fn os_name(&self) -> &str {
        self.component(2)
    }

    /// Everything after the OS component, or `""` for three-part triples.
    pub fn environment_name(&self) -> &str {
        self.0.splitn(4, '-').nth(3).unwrap_or("")
    }

    fn component(&self, index: usize) -> &str {
        self.0.split('-').nth(index).unwrap_or("")
    }
}

impl FromStr for Triple {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Triple {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
