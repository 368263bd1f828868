use anyhow::{bail, Context, Result};
use skillset_config::tickets::{parse_ticket_ids, render_ticket_links, NO_TICKETS_PLACEHOLDER};
use skillset_config::{ConfigResolver, ConfigStore, TerminalPrompter};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::Command;
use crate::settings::Settings;
use crate::system;

/// Runs one subcommand against a project root
pub struct Commands {
    root: PathBuf,
    settings: Settings,
}

impl Commands {
    pub fn new(root: PathBuf, settings: Settings) -> Self {
        Self { root, settings }
    }

    fn resolver(&self) -> ConfigResolver<TerminalPrompter> {
        ConfigResolver::new(ConfigStore::new(&self.root), TerminalPrompter)
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        debug!("Project root: {:?}", self.root);

        match command {
            Command::Config => {
                let config = self
                    .resolver()
                    .resolve()
                    .await
                    .context("Failed to resolve configuration")?;
                println!("{}", config.to_compact_json());
            }

            Command::BaseUrl => {
                if let Some(url) = self.resolver().tasks_manager_base_url().await? {
                    println!("{url}");
                }
            }

            Command::Tickets { ids } => {
                let ids = parse_ticket_ids(&ids);
                if ids.is_empty() {
                    println!("{NO_TICKETS_PLACEHOLDER}");
                    return Ok(());
                }
                let base_url = self.resolver().tasks_manager_base_url().await?;
                println!("{}", render_ticket_links(base_url.as_deref(), &ids));
            }

            Command::System => {
                println!("{} {}", system::os_type(), system::arch());
            }

            Command::Whoami => {
                println!("{}", system::username()?);
            }

            Command::Check { dir } => {
                let dir = dir.unwrap_or_else(|| self.skills_dir());
                let report = skillset_skills::check_corpus(&dir)?;
                print!("{}", report.render());
                if !report.is_valid() {
                    bail!("{} error(s) in {}", report.error_count(), dir.display());
                }
            }
        }

        Ok(())
    }

    fn skills_dir(&self) -> PathBuf {
        let dir = Path::new(&self.settings.skills.dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.root.join(dir)
        }
    }
}
