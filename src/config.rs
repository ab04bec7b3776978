//! Process configuration, read once at startup.

use std::{net::SocketAddr, path::PathBuf};

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DATA_FILE: &str = ".data/notes.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Supabase env vars are missing")]
    MissingSupabaseCredentials,
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    InvalidBindAddr(String),
}

/// Which note backend the process serves from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Whole collection kept as one JSON array in a local file.
    File { path: PathBuf },
    /// Hosted `notes` table reached through the Supabase REST API.
    Remote { url: String, api_key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub storage: StorageConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr))?;

        let storage = if get("USE_MOCK_DATA").as_deref() == Some("true") {
            StorageConfig::File {
                path: get("NOTES_DATA_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            }
        } else {
            let url = get("SUPABASE_URL");
            let api_key = get("SUPABASE_SERVICE_ROLE_KEY").or_else(|| get("SUPABASE_ANON_KEY"));
            match (url, api_key) {
                (Some(url), Some(api_key)) => StorageConfig::Remote { url, api_key },
                _ => return Err(ConfigError::MissingSupabaseCredentials),
            }
        };

        Ok(Self { bind_addr, storage })
    }
}
