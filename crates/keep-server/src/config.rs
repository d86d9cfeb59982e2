//! Server configuration
//!
//! Read from shuttle secrets (Secrets.toml locally):
//! - `NOTES_STORAGE`: `postgres` (default) or `memory`
//! - `STORAGE_TIMEOUT_SECS`: deadline for each storage call (default 5)

use std::time::Duration;

const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 5;

/// Which NoteRepository backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub storage: StorageBackend,
    pub storage_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Postgres,
            storage_timeout: Duration::from_secs(DEFAULT_STORAGE_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Build config from a key lookup, falling back to defaults on bad values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let storage = match lookup("NOTES_STORAGE").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => StorageBackend::Postgres,
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                tracing::warn!("⚠️  Unknown NOTES_STORAGE '{}' - using postgres", other);
                defaults.storage
            }
        };

        let storage_timeout = match lookup("STORAGE_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "⚠️  Invalid STORAGE_TIMEOUT_SECS '{}' - using {}s",
                        raw,
                        DEFAULT_STORAGE_TIMEOUT_SECS
                    );
                    defaults.storage_timeout
                }
            },
            None => defaults.storage_timeout,
        };

        Self {
            storage,
            storage_timeout,
        }
    }
}
