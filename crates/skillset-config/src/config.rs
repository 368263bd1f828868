//! The in-memory configuration object

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Project-local skills configuration
///
/// A flat JSON object. Known keys hold strings; any other keys found in the
/// file are carried through untouched, in their original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillsConfig {
    entries: Map<String, Value>,
}

impl SkillsConfig {
    /// Create an empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a string value, `None` if absent or not a string
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Whether the key holds a non-empty string
    #[must_use]
    pub fn has_value(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Set a string value, replacing whatever was there
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), Value::String(value.into()));
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the configuration is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Single-line JSON, as printed by the command-line helper
    #[must_use]
    pub fn to_compact_json(&self) -> String {
        Value::Object(self.entries.clone()).to_string()
    }
}

impl From<Map<String, Value>> for SkillsConfig {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}
