//! Configuration from environment variables.
//!
//! Variables (a `.env` file is read first if present):
//! - GLOSOR_DATA: directory or http(s) base URL holding the source lists
//! - GLOSOR_WORDS_FILE: word list name (default `words.json`)
//! - GLOSOR_VERBS_FILE: verb list name (default `irregular-verbs.json`)
//! - GLOSOR_MODE: `words` or `verbs` (default `words`)
//! - GLOSOR_SEED: fixed RNG seed for reproducible decks

use crate::source::DataSource;
use glosor_core::Mode;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_WORDS_FILE: &str = "words.json";
pub const DEFAULT_VERBS_FILE: &str = "irregular-verbs.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GLOSOR_MODE must be `words` or `verbs`, got `{0}`")]
    InvalidMode(String),

    #[error("GLOSOR_SEED must be an unsigned integer, got `{0}`")]
    InvalidSeed(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data: DataSource,
    pub words_file: String,
    pub verbs_file: String,
    pub mode: Mode,
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data = match lookup("GLOSOR_DATA") {
            Some(value) if value.trim().is_empty() => return Err(ConfigError::Empty("GLOSOR_DATA")),
            Some(value) => DataSource::parse(value.trim()),
            None => DataSource::Directory(default_data_dir()),
        };

        let words_file = file_name(&lookup, "GLOSOR_WORDS_FILE", DEFAULT_WORDS_FILE)?;
        let verbs_file = file_name(&lookup, "GLOSOR_VERBS_FILE", DEFAULT_VERBS_FILE)?;

        let mode = match lookup("GLOSOR_MODE") {
            Some(value) => {
                Mode::from_str(value.trim()).ok_or_else(|| ConfigError::InvalidMode(value))?
            }
            None => Mode::default(),
        };

        let seed = lookup("GLOSOR_SEED")
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(value))
            })
            .transpose()?;

        Ok(Self {
            data,
            words_file,
            verbs_file,
            mode,
            seed,
        })
    }

    /// Source list name for `mode`.
    pub fn file_for(&self, mode: Mode) -> &str {
        match mode {
            Mode::Words => &self.words_file,
            Mode::Verbs => &self.verbs_file,
        }
    }
}

fn file_name<F>(lookup: &F, key: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(key)),
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(default.to_string()),
    }
}

fn default_data_dir() -> PathBuf {
    // Prefer the user data directory once it has been populated
    dirs::data_local_dir()
        .map(|dir| dir.join("glosor"))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("GLOSOR_DATA", "/srv/glosor")]).unwrap();
        assert_eq!(
            config,
            Config {
                data: DataSource::Directory(PathBuf::from("/srv/glosor")),
                words_file: "words.json".to_string(),
                verbs_file: "irregular-verbs.json".to_string(),
                mode: Mode::Words,
                seed: None,
            }
        );
    }

    #[test]
    fn test_remote_source_and_overrides() {
        let config = config(&[
            ("GLOSOR_DATA", "https://example.org/glosor/"),
            ("GLOSOR_VERBS_FILE", "verbs.json"),
            ("GLOSOR_MODE", "verbs"),
            ("GLOSOR_SEED", " 42 "),
        ])
        .unwrap();
        assert_eq!(
            config.data,
            DataSource::Remote("https://example.org/glosor".to_string())
        );
        assert_eq!(config.file_for(Mode::Verbs), "verbs.json");
        assert_eq!(config.file_for(Mode::Words), "words.json");
        assert_eq!(config.mode, Mode::Verbs);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_invalid_mode() {
        let error = config(&[("GLOSOR_DATA", "data"), ("GLOSOR_MODE", "nouns")]).unwrap_err();
        assert_eq!(error, ConfigError::InvalidMode("nouns".to_string()));
    }

    #[test]
    fn test_invalid_seed() {
        let error = config(&[("GLOSOR_DATA", "data"), ("GLOSOR_SEED", "-1")]).unwrap_err();
        assert_eq!(error, ConfigError::InvalidSeed("-1".to_string()));
    }

    #[test]
    fn test_empty_values_rejected() {
        assert_eq!(
            config(&[("GLOSOR_DATA", " ")]).unwrap_err(),
            ConfigError::Empty("GLOSOR_DATA")
        );
        assert_eq!(
            config(&[("GLOSOR_DATA", "data"), ("GLOSOR_WORDS_FILE", "")]).unwrap_err(),
            ConfigError::Empty("GLOSOR_WORDS_FILE")
        );
    }
}
