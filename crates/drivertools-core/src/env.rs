//! Immutable environment snapshot a toolchain is constructed from.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

/// A snapshot of environment variables.
///
/// Taken once, when a toolchain is built, and never refreshed. Tests build
/// one by hand instead of mutating the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped, except
    /// `PATH`: its valid entries are kept and only the bad ones dropped.
    pub fn from_process() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    fn from_os_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        let mut skipped = 0usize;
        let vars = vars
            .into_iter()
            .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (Ok(key), Err(value)) if key == "PATH" => Some((key, salvage_path(&value))),
                _ => {
                    skipped += 1;
                    None
                }
            })
            .collect();

        if skipped > 0 {
            tracing::debug!(skipped, "Ignoring non UTF-8 environment variables");
        }

        Self { vars }
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over every variable, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Keep the `PATH` entries that decode cleanly.
fn salvage_path(value: &OsStr) -> String {
    let decoded = value.to_string_lossy();
    let (kept, dropped): (Vec<&str>, Vec<&str>) = decoded
        .split(':')
        .partition(|entry| !entry.contains(char::REPLACEMENT_CHARACTER));

    tracing::warn!(
        dropped = dropped.len(),
        "PATH contains entries that are not valid UTF-8; they will not be searched"
    );
    kept.join(":")
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
