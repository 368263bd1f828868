//! Skillset project configuration
//!
//! Skills that need per-project settings (the PR-description skill needs the
//! ticket tracker base URL) read them from `skills-configs.json` at the project
//! root. Missing settings are asked for once and persisted.
//!
//! ## Flow
//!
//! 1. [`ConfigStore`] loads the file; a missing or corrupt file reads as empty
//! 2. [`ConfigResolver`] prompts for each missing [`KnownKey`] through a [`Prompter`]
//! 3. New answers are written back in one pass
//!
//! ```no_run
//! # async fn run() -> skillset_config::Result<()> {
//! use skillset_config::{ConfigResolver, ConfigStore, TerminalPrompter};
//!
//! let mut resolver = ConfigResolver::new(ConfigStore::new("."), TerminalPrompter);
//! if let Some(url) = resolver.tasks_manager_base_url().await? {
//!     println!("tickets live at {url}");
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod config;
pub mod error;
pub mod prompt;
pub mod registry;
pub mod resolver;
pub mod store;
pub mod tickets;

pub use config::SkillsConfig;
pub use error::{ConfigError, Result};
pub use prompt::{Prompter, StreamPrompter, TerminalPrompter};
pub use registry::{KnownKey, KNOWN_KEYS, TASKS_MANAGER_BASE_URL};
pub use resolver::ConfigResolver;
pub use store::{ConfigStore, CONFIG_FILE_NAME};
