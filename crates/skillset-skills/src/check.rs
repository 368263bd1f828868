//! Corpus-wide checks over a directory of skills

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::skill::{Finding, Skill, Severity, SKILL_FILE_NAME};

/// Result of checking one skill directory
#[derive(Debug, Clone)]
pub struct SkillReport {
    /// Skill directory
    pub dir: PathBuf,
    /// Problems found, empty when the skill is clean
    pub findings: Vec<Finding>,
}

impl SkillReport {
    /// Whether the skill has no errors (warnings allowed)
    pub fn is_valid(&self) -> bool {
        !self.findings.iter().any(Finding::is_error)
    }

    fn label(&self) -> String {
        self.dir
            .file_name()
            .map_or_else(|| self.dir.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// Result of checking every skill under a corpus directory
#[derive(Debug, Clone, Default)]
pub struct CorpusReport {
    /// Per-skill results, sorted by directory
    pub skills: Vec<SkillReport>,
}

impl CorpusReport {
    /// Whether every skill is valid
    pub fn is_valid(&self) -> bool {
        self.skills.iter().all(SkillReport::is_valid)
    }

    /// Total number of error findings
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Total number of warning findings
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.skills
            .iter()
            .flat_map(|s| &s.findings)
            .filter(|f| f.severity == severity)
            .count()
    }

    /// Human-readable report, one line per finding plus a summary
    pub fn render(&self) -> String {
        let mut out = String::new();

        for skill in &self.skills {
            let label = skill.label();
            if skill.findings.is_empty() {
                let _ = writeln!(out, "ok {label}");
            }
            for finding in &skill.findings {
                let _ = writeln!(out, "{label}: {finding}");
            }
        }

        let _ = writeln!(
            out,
            "Checked {} skills: {} errors, {} warnings",
            self.skills.len(),
            self.error_count(),
            self.warning_count()
        );
        out
    }
}

/// Check a single skill directory
pub fn check_skill_dir(dir: &Path) -> SkillReport {
    let findings = match Skill::from_dir(dir) {
        Ok(skill) => skill.validate(),
        Err(e) => vec![Finding::error(format!("{e:#}"))],
    };

    SkillReport {
        dir: dir.to_path_buf(),
        findings,
    }
}

/// Check every immediate subdirectory of `root` that contains a SKILL.md
pub fn check_corpus(root: &Path) -> Result<CorpusReport> {
    let entries = std::fs::read_dir(root)
        .with_context(|| format!("Failed to read skills directory {:?}", root))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let path = entry?.path();

        if !path.is_dir() {
            continue;
        }

        if !path.join(SKILL_FILE_NAME).is_file() {
            debug!("Skipping {:?}: no {}", path, SKILL_FILE_NAME);
            continue;
        }

        dirs.push(path);
    }
    dirs.sort();

    let skills: Vec<SkillReport> = dirs.iter().map(|d| check_skill_dir(d)).collect();
    info!("Checked {} skills in {:?}", skills.len(), root);

    Ok(CorpusReport { skills })
}
