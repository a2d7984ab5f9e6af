//! Process configuration read from the environment (after `.env` is loaded).

use crate::error::ConfigError;
use std::net::SocketAddr;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Schema holding the bookmarks table. Must be a valid PostgreSQL identifier.
    pub schema: String,
    pub api_token: String,
    /// Prefix for bookmark routes, e.g. `/api`. Empty mounts them at the root.
    pub api_prefix: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = lookup("API_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing("API_TOKEN"))?;
        Ok(Config {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "postgres://localhost/bookmarks".into()),
            schema: lookup("BOOKMARKS_SCHEMA").unwrap_or_else(|| "public".into()),
            api_token,
            api_prefix: normalize_prefix(&lookup("API_PREFIX").unwrap_or_else(|| "/api".into())),
            bind_addr: parse("BIND_ADDR", lookup("BIND_ADDR"), SocketAddr::from(([0, 0, 0, 0], 8000)))?,
            max_connections: parse("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), 5)?,
            body_limit_bytes: parse("BODY_LIMIT_BYTES", lookup("BODY_LIMIT_BYTES"), 64 * 1024)?,
        })
    }

    /// Path of a single bookmark, used for the `Location` header.
    pub fn bookmark_location(&self, id: &uuid::Uuid) -> String {
        format!("{}/bookmarks/{}", self.api_prefix, id)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}

/// `api/` and `/api/` both become `/api`; `/` becomes empty.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
