//! Skillset skill definitions
//!
//! Parses the YAML frontmatter of every `SKILL.md` in a skills corpus and
//! reports definitions an agent runtime would reject or truncate.
//!
//! ## Checks
//!
//! - Frontmatter present and valid YAML
//! - `name`: non-empty, lowercase letters/numbers/hyphens, equal to the directory name
//! - `description`: non-empty
//! - Length limits (64 / 1024 characters) are reported as warnings

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod check;
pub mod skill;

pub use check::{check_corpus, check_skill_dir, CorpusReport, SkillReport};
pub use skill::{Finding, Severity, Skill, SkillMetadata};
