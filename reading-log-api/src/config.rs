use std::{path::PathBuf, str::FromStr};

use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

use crate::domain::PageLimits;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub storage: StorageSettings,
    pub validation: ValidationSettings,
}

#[serde_as]
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    /// Browser origin allowed to call the API cross-origin, if any.
    #[serde(default)]
    pub cors_origin: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StorageSettings {
    /// Location of the JSON log. A leading `~/` is expanded to the home directory.
    pub path: String,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ValidationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub min_page: u32,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub max_page: u32,
}

impl StorageSettings {
    pub fn resolved_path(&self) -> PathBuf {
        match (self.path.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.path),
        }
    }
}

impl ValidationSettings {
    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            min: self.min_page,
            max: self.max_page,
        }
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|err| config::ConfigError::Foreign(Box::new(err)))?;
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|_| config::ConfigError::Message("Failed to parse APP_ENVIRONMENT".into()))?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("READING_LOG")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_is_expanded_to_home() {
        let storage = StorageSettings {
            path: "~/reading-log/log.json".to_string(),
        };

        let resolved = storage.resolved_path();

        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolved, home.join("reading-log/log.json"));
        }
    }

    #[test]
    fn plain_paths_are_kept() {
        let storage = StorageSettings {
            path: "data/log.json".to_string(),
        };

        assert_eq!(storage.resolved_path(), PathBuf::from("data/log.json"));
    }

    #[test]
    fn environment_parses_case_insensitively() {
        assert!(matches!(
            Environment::from_str("Production"),
            Ok(Environment::Production)
        ));
        assert!(Environment::from_str("staging").is_err());
    }
}
