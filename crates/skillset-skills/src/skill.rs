//! Skill definition parsing and validation
//!
//! Each skill is a folder containing SKILL.md with YAML frontmatter

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File every skill directory must contain
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// Maximum recommended name length
const MAX_NAME_LENGTH: usize = 64;
/// Maximum recommended description length
const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Skill metadata extracted from YAML frontmatter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillMetadata {
    /// Skill name (lowercase letters/numbers/hyphens, matches the directory)
    #[serde(default)]
    pub name: String,
    /// Skill description (describes WHAT and WHEN)
    #[serde(default)]
    pub description: String,
}

/// A parsed skill definition
#[derive(Debug, Clone)]
pub struct Skill {
    /// Skill metadata
    pub metadata: SkillMetadata,
    /// Full path to skill directory
    pub path: PathBuf,
}

impl Skill {
    /// Read and parse `SKILL.md` from a skill directory
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let skill_file = dir.join(SKILL_FILE_NAME);

        let content = fs::read_to_string(&skill_file)
            .with_context(|| format!("Failed to read {:?}", skill_file))?;

        let metadata = parse_frontmatter(&content)
            .with_context(|| format!("Failed to parse {:?}", skill_file))?;

        Ok(Self {
            metadata,
            path: dir.to_path_buf(),
        })
    }

    /// Name of the directory holding the skill
    pub fn dir_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// Check the metadata against the rules agent runtimes enforce
    pub fn validate(&self) -> Vec<Finding> {
        validate_metadata(&self.metadata, self.dir_name())
    }
}

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The skill would be rejected
    Error,
    /// The skill loads but may be truncated or misbehave
    Warning,
}

/// A single problem found in a skill definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Severity
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

impl Finding {
    /// Create an error finding
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Create a warning finding
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Whether this finding makes the skill invalid
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{label}: {}", self.message)
    }
}

/// Parse the YAML frontmatter at the top of a SKILL.md
pub fn parse_frontmatter(content: &str) -> Result<SkillMetadata> {
    let frontmatter_re = Regex::new(r"^---[ \t]*\r?\n([\s\S]*?)\r?\n---[ \t]*(?:\r?\n|$)")
        .map_err(|e| anyhow!("Failed to compile regex: {}", e))?;

    let captures = frontmatter_re
        .captures(content)
        .ok_or_else(|| anyhow!("No valid YAML frontmatter found"))?;

    let yaml_str = captures
        .get(1)
        .ok_or_else(|| anyhow!("Failed to extract frontmatter"))?
        .as_str();

    let metadata: SkillMetadata =
        serde_yaml::from_str(yaml_str).with_context(|| "Failed to parse YAML frontmatter")?;

    Ok(metadata)
}

/// Validate skill metadata, optionally against the directory it lives in
pub fn validate_metadata(metadata: &SkillMetadata, dir_name: Option<&str>) -> Vec<Finding> {
    let mut findings = Vec::new();

    if metadata.name.is_empty() {
        findings.push(Finding::error("name cannot be empty"));
    } else {
        if metadata.name.len() > MAX_NAME_LENGTH {
            findings.push(Finding::warning(format!(
                "name exceeds {} characters (was {})",
                MAX_NAME_LENGTH,
                metadata.name.len()
            )));
        }

        if !is_valid_name(&metadata.name) {
            findings.push(Finding::error(format!(
                "name '{}' must contain only lowercase letters, numbers, and hyphens",
                metadata.name
            )));
        }

        if let Some(dir) = dir_name {
            if dir != metadata.name {
                findings.push(Finding::error(format!(
                    "name '{}' does not match directory '{}'",
                    metadata.name, dir
                )));
            }
        }
    }

    if metadata.description.trim().is_empty() {
        findings.push(Finding::error("description cannot be empty"));
    } else if metadata.description.len() > MAX_DESCRIPTION_LENGTH {
        findings.push(Finding::warning(format!(
            "description exceeds {} characters (was {})",
            MAX_DESCRIPTION_LENGTH,
            metadata.description.len()
        )));
    }

    findings
}

fn is_valid_name(name: &str) -> bool {
    name.bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
