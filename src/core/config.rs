//! Environment-driven bot configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Token, application id, dev guild and log level from the environment

use anyhow::{anyhow, Context, Result};
use std::env;

/// Runtime configuration read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// Application identity the command catalog is registered under.
    pub client_id: u64,
    /// Register commands to this guild only (instant propagation, for development).
    pub discord_guild_id: Option<u64>,
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `DISCORD_TOKEN` and `CLIENT_ID` are required; everything else has defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = required(&lookup, "DISCORD_TOKEN")?;
        let client_id = required(&lookup, "CLIENT_ID")?
            .parse::<u64>()
            .context("CLIENT_ID must be a numeric application id")?;

        let discord_guild_id = lookup("DISCORD_GUILD_ID")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .context("DISCORD_GUILD_ID must be a numeric guild id")?;
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Config {
            discord_token,
            client_id,
            discord_guild_id,
            log_level,
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| anyhow!("{key} is not set in the environment"))
}
