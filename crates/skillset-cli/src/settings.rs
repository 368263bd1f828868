use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;

const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_SKILLS_DIR: &str = "skills";

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SkillsSettings {
    pub dir: String,
}

/// Settings of the `skillset` tool itself (not the project's skills-configs.json)
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub skills: SkillsSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingSettings {
                level: DEFAULT_LOG_LEVEL.to_string(),
            },
            skills: SkillsSettings {
                dir: DEFAULT_SKILLS_DIR.to_string(),
            },
        }
    }
}

impl Settings {
    /// Built-in defaults, lowest priority layer
    fn defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
        Ok(config::Config::builder()
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .set_default("skills.dir", DEFAULT_SKILLS_DIR)?)
    }

    /// Load settings with layered approach:
    /// 1. Built-in defaults
    /// 2. Local override: ./skillset.toml (optional)
    /// 3. Environment variables with SKILLSET__ prefix (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let settings = Self::defaults()?
            .add_source(config::File::with_name("skillset").required(false))
            .add_source(config::Environment::with_prefix("SKILLSET").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings: Settings = Settings::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.skills.dir, "skills");
    }

    #[test]
    fn test_default_matches_builder_defaults() {
        let built: Settings = Settings::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        let fallback = Settings::default();

        assert_eq!(built.logging.level, fallback.logging.level);
        assert_eq!(built.skills.dir, fallback.skills.dir);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml_str = r#"
            [logging]
            level = "debug"
        "#;

        let settings: Settings = Settings::defaults()
            .unwrap()
            .add_source(config::File::from_str(toml_str, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.skills.dir, "skills");
    }
}
