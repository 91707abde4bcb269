//! Fetching source lists from a directory or an HTTP base URL.

use crate::config::Config;
use glosor_core::{load_pool, LoadError, Mode, Pool};
use reqwest::Client;
use std::path::PathBuf;
use thiserror::Error;

/// Fetch errors. All of them make the requested deck unavailable.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} fetching {url}")]
    Http { status: u16, url: String },

    #[error("Cannot read {path}: {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<SourceError> for LoadError {
    fn from(e: SourceError) -> Self {
        LoadError::SourceUnavailable(e.to_string())
    }
}

/// Where the source lists live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Directory(PathBuf),
    /// Base URL without a trailing slash.
    Remote(String),
}

impl DataSource {
    /// `http://` and `https://` values are remote, anything else is a path.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Remote(value.trim_end_matches('/').to_string())
        } else {
            Self::Directory(PathBuf::from(value))
        }
    }

    /// Human-readable location of `name`.
    pub fn location(&self, name: &str) -> String {
        match self {
            Self::Directory(dir) => dir.join(name).display().to_string(),
            Self::Remote(base_url) => format!("{}/{}", base_url, name),
        }
    }
}

/// Loads decks for both modes from one data source.
#[derive(Debug, Clone)]
pub struct DeckSource {
    data: DataSource,
    words_file: String,
    verbs_file: String,
    client: Client,
}

impl DeckSource {
    pub fn new(config: &Config) -> Self {
        Self {
            data: config.data.clone(),
            words_file: config.words_file.clone(),
            verbs_file: config.verbs_file.clone(),
            client: Client::new(),
        }
    }

    /// Fetch and parse the deck for `mode`.
    pub async fn load(&self, mode: Mode) -> Result<Pool, LoadError> {
        let name = match mode {
            Mode::Words => &self.words_file,
            Mode::Verbs => &self.verbs_file,
        };
        let location = self.data.location(name);
        tracing::info!("Loading {} deck from {}", mode, location);

        let result = match self.fetch(name).await {
            Ok(content) => load_pool(mode, &content),
            Err(e) => Err(e.into()),
        };

        match &result {
            Ok(pool) => tracing::info!("Loaded {} {} items", pool.len(), mode),
            Err(e) => tracing::error!("Error loading {} deck from {}: {}", mode, location, e),
        }
        result
    }

    async fn fetch(&self, name: &str) -> Result<String, SourceError> {
        match &self.data {
            DataSource::Directory(dir) => {
                let path = dir.join(name);
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| SourceError::FileSystem { path, source })
            }
            DataSource::Remote(base_url) => {
                let url = format!("{}/{}", base_url, name);
                let resp = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| SourceError::Network(e.to_string()))?;

                if !resp.status().is_success() {
                    let status = resp.status().as_u16();
                    return Err(SourceError::Http { status, url });
                }

                resp.text()
                    .await
                    .map_err(|e| SourceError::Network(e.to_string()))
            }
        }
    }
}
