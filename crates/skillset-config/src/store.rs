//! Persistence of `skills-configs.json` under a project root

use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::SkillsConfig;
use crate::error::{ConfigError, Result};

/// File name of the project-local configuration
pub const CONFIG_FILE_NAME: &str = "skills-configs.json";

/// Reads and writes the configuration file of one project root
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store for `<root>/skills-configs.json`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(CONFIG_FILE_NAME),
        }
    }

    /// Full path of the configuration file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration
    ///
    /// A missing file, unparsable content, or a top-level value that is not an
    /// object all yield an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read.
    pub async fn load(&self) -> Result<SkillsConfig> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config file at {:?}", self.path);
                return Ok(SkillsConfig::new());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(entries)) => {
                debug!("Loaded {} config entries from {:?}", entries.len(), self.path);
                Ok(SkillsConfig::from(entries))
            }
            Ok(Value::Null) => Ok(SkillsConfig::new()),
            Ok(other) => {
                warn!(
                    "Ignoring {:?}: expected a JSON object, found {}",
                    self.path,
                    json_kind(&other)
                );
                Ok(SkillsConfig::new())
            }
            Err(e) => {
                warn!("Ignoring unparsable config {:?}: {}", self.path, e);
                Ok(SkillsConfig::new())
            }
        }
    }

    /// Write the configuration as 2-space indented JSON with a trailing newline
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Write`] if the file cannot be written.
    pub async fn save(&self, config: &SkillsConfig) -> Result<()> {
        let mut content = serde_json::to_string_pretty(config)?;
        content.push('\n');

        tokio::fs::write(&self.path, content)
            .await
            .map_err(|source| ConfigError::Write {
                path: self.path.clone(),
                source,
            })?;

        debug!("Saved {} config entries to {:?}", config.len(), self.path);
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
