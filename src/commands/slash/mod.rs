//! # Slash Commands (/)
//!
//! Command catalog definitions and publication to Discord.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Catalog built from per-group definitions, published with one bulk overwrite

mod moderation;
mod poll;
mod utility;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use log::info;
use serde_json::Value;
use serenity::http::Http;

use super::schema::CommandCatalog;

/// Builds the validated catalog of every slash command the bot publishes
pub fn standard_catalog() -> Result<CommandCatalog> {
    let mut commands = Vec::new();

    // Utility commands
    commands.extend(utility::create_commands());

    // Moderation commands
    commands.extend(moderation::create_commands());

    // Poll command
    commands.extend(poll::create_commands());

    CommandCatalog::new(commands)
}

/// Where the catalog is published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationScope {
    Global,
    /// Single guild, visible immediately (useful while developing)
    Guild(u64),
}

/// Bulk-overwrite endpoint for application commands
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Replace the full command set in `scope`; returns how many commands Discord accepted
    async fn overwrite_commands(&self, scope: RegistrationScope, body: &Value) -> Result<usize>;
}

#[async_trait]
impl CatalogApi for Http {
    async fn overwrite_commands(&self, scope: RegistrationScope, body: &Value) -> Result<usize> {
        let commands = match scope {
            RegistrationScope::Global => self.create_global_application_commands(body).await?,
            RegistrationScope::Guild(guild_id) => {
                self.create_guild_application_commands(guild_id, body)
                    .await?
            }
        };
        Ok(commands.len())
    }
}

/// Publishes the whole catalog in a single request, replacing whatever was registered before
pub async fn publish_commands(
    api: &dyn CatalogApi,
    catalog: &CommandCatalog,
    scope: RegistrationScope,
) -> Result<usize> {
    let body = catalog.to_json();
    let count = api
        .overwrite_commands(scope, &body)
        .await
        .with_context(|| format!("Failed to publish {} commands ({scope:?})", catalog.len()))?;

    match scope {
        RegistrationScope::Global => {
            info!("Global slash commands registered successfully ({count} commands)")
        }
        RegistrationScope::Guild(guild_id) => {
            info!("Guild slash commands registered for guild {guild_id} ({count} commands)")
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::schema::CommandName;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<(RegistrationScope, Value)>>,
        fail: bool,
    }

    #[async_trait]
    impl CatalogApi for RecordingApi {
        async fn overwrite_commands(
            &self,
            scope: RegistrationScope,
            body: &Value,
        ) -> Result<usize> {
            self.calls.lock().unwrap().push((scope, body.clone()));
            if self.fail {
                anyhow::bail!("401 Unauthorized");
            }
            Ok(body.as_array().map_or(0, |a| a.len()))
        }
    }

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = standard_catalog().unwrap();
        let names: Vec<&str> = catalog.names().map(|n| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["ping", "embed", "serverinfo", "avatar", "say", "kick", "ban", "clear", "poll"]
        );
        assert_eq!(catalog.len(), CommandName::ALL.len());
    }

    #[test]
    fn test_standard_catalog_parameters() {
        let catalog = standard_catalog().unwrap();

        let avatar = catalog.get(CommandName::Avatar).unwrap();
        assert!(!avatar.find_parameter("target").unwrap().required);

        let say = catalog.get(CommandName::Say).unwrap();
        let message = say.find_parameter("message").unwrap();
        assert!(message.required);
        assert_eq!(message.max_length, Some(2000));

        let poll = catalog.get(CommandName::Poll).unwrap();
        let question = poll.find_parameter("question").unwrap();
        assert!(question.required);
        assert_eq!(question.max_length, Some(4096));
        assert!(!poll.find_parameter("title").unwrap().required);

        let clear = catalog.get(CommandName::Clear).unwrap();
        let amount = clear.find_parameter("amount").unwrap();
        assert!(amount.required);
        assert_eq!(amount.min_value, Some(1));
    }

    #[test]
    fn test_moderation_commands_are_guild_only() {
        let catalog = standard_catalog().unwrap();
        for name in [
            CommandName::ServerInfo,
            CommandName::Kick,
            CommandName::Ban,
            CommandName::Clear,
        ] {
            assert!(catalog.get(name).unwrap().guild_only, "{name} should be guild only");
        }
        assert!(!catalog.get(CommandName::Ping).unwrap().guild_only);
    }

    #[tokio::test]
    async fn test_publish_sends_one_request() {
        let api = RecordingApi::default();
        let catalog = standard_catalog().unwrap();

        let count = publish_commands(&api, &catalog, RegistrationScope::Global)
            .await
            .unwrap();

        assert_eq!(count, 9);
        let calls = api.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, RegistrationScope::Global);
        assert_eq!(calls[0].1, catalog.to_json());
    }

    #[tokio::test]
    async fn test_publish_to_guild_scope() {
        let api = RecordingApi::default();
        let catalog = standard_catalog().unwrap();
        publish_commands(&api, &catalog, RegistrationScope::Guild(42))
            .await
            .unwrap();
        assert_eq!(api.calls.lock().unwrap()[0].0, RegistrationScope::Guild(42));
    }

    #[tokio::test]
    async fn test_publish_failure_is_reported() {
        let api = RecordingApi {
            fail: true,
            ..Default::default()
        };
        let catalog = standard_catalog().unwrap();
        let err = publish_commands(&api, &catalog, RegistrationScope::Global)
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("401 Unauthorized"));
        assert_eq!(api.calls.lock().unwrap().len(), 1);
    }
}
