//! Ensures every known key is present, asking the operator for missing ones

use tracing::{debug, info};

use crate::config::SkillsConfig;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::registry::{KnownKey, KNOWN_KEYS, TASKS_MANAGER_BASE_URL};
use crate::store::ConfigStore;

/// Resolves the project configuration against a registry of known keys
pub struct ConfigResolver<P> {
    store: ConfigStore,
    prompter: P,
    keys: &'static [KnownKey],
}

impl<P: Prompter> ConfigResolver<P> {
    /// Resolver over the built-in registry
    pub fn new(store: ConfigStore, prompter: P) -> Self {
        Self {
            store,
            prompter,
            keys: KNOWN_KEYS,
        }
    }

    /// Use a different set of known keys
    #[must_use]
    pub fn with_keys(mut self, keys: &'static [KnownKey]) -> Self {
        self.keys = keys;
        self
    }

    /// Load the configuration and prompt for every known key that is missing
    ///
    /// Prompts run one after another in registry order. The file is written
    /// once, after all prompts, and only if an answer was added.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or written, or if prompting fails.
    pub async fn resolve(&mut self) -> Result<SkillsConfig> {
        let mut config = self.store.load().await?;
        let mut changed = false;

        for known in self.keys {
            if config.has_value(known.key) {
                continue;
            }

            let answer = self.prompter.ask(known.prompt).await?;
            let answer = answer.trim();
            if answer.is_empty() {
                debug!("No value given for '{}'", known.key);
                continue;
            }

            config.set(known.key, answer);
            changed = true;
        }

        if changed {
            self.store.save(&config).await?;
            info!("Saved configuration to {:?}", self.store.path());
        }

        Ok(config)
    }

    /// Resolve and return the ticket tracker base URL, `None` if declined
    ///
    /// # Errors
    ///
    /// Same as [`ConfigResolver::resolve`].
    pub async fn tasks_manager_base_url(&mut self) -> Result<Option<String>> {
        let config = self.resolve().await?;
        Ok(config
            .get(TASKS_MANAGER_BASE_URL)
            .filter(|url| !url.is_empty())
            .map(str::to_string))
    }

    /// Give back the prompter
    pub fn into_prompter(self) -> P {
        self.prompter
    }
}
