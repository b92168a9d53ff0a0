//! Kinds of linker output.

use serde::{Deserialize, Serialize};

/// What a link step produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkOutputType {
    Executable,
    DynamicLibrary,
    StaticLibrary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&LinkOutputType::DynamicLibrary).unwrap();
        assert_eq!(json, "\"dynamic-library\"");
    }
}
