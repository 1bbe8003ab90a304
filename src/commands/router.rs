//! # Slash Command Router
//!
//! Validates gateway invocations against the catalog and runs the matching
//! handler inside a failure boundary.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Enum-keyed dispatch with argument coercion and generic failure replies

use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use uuid::Uuid;

use super::context::{Invocation, RawInvocation};
use super::handlers::create_all_handlers;
use super::options::Arguments;
use super::registry::CommandRegistry;
use super::schema::{CommandCatalog, CommandName};
use super::slash::standard_catalog;
use crate::core::ReplyPayload;
use crate::platform::Platform;

/// Sent whenever a command cannot produce its own reply
pub const COMMAND_FAILURE_REPLY: &str = "> There Was An Error While Executing This Command!";

/// Outcome of routing one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Not addressed to the bot; nothing was sent
    Ignored,
    /// The handler's own reply was sent
    Replied,
    /// The generic failure reply was attempted instead
    Failed,
}

/// Routes slash command invocations to their handlers
#[derive(Clone)]
pub struct CommandRouter {
    catalog: CommandCatalog,
    registry: CommandRegistry,
}

impl CommandRouter {
    pub fn new(catalog: CommandCatalog, registry: CommandRegistry) -> Self {
        Self { catalog, registry }
    }

    /// The published catalog wired to every built-in handler
    pub fn standard() -> Result<Self> {
        let catalog = standard_catalog()?;
        let registry = CommandRegistry::for_catalog(&catalog, create_all_handlers())?;
        Ok(Self::new(catalog, registry))
    }

    pub fn catalog(&self) -> &CommandCatalog {
        &self.catalog
    }

    /// Handle one invocation, sending exactly one reply unless the command is unknown
    pub async fn dispatch(&self, platform: &dyn Platform, raw: RawInvocation) -> Dispatch {
        let Ok(command) = raw.command_name.parse::<CommandName>() else {
            debug!("Ignoring unknown command /{}", raw.command_name);
            return Dispatch::Ignored;
        };

        let request_id = Uuid::new_v4();
        info!(
            "[{request_id}] 📥 Slash command /{command} | User: {} | Channel: {} | Guild: {:?}",
            raw.invoker.id, raw.channel_id, raw.guild_id
        );

        match self.run(platform, command, raw, request_id).await {
            Ok(payload) => deliver(platform, &payload, request_id).await,
            Err(e) => {
                error!("[{request_id}] ❌ /{command} failed: {e:#}");
                send_failure_reply(platform, request_id).await;
                Dispatch::Failed
            }
        }
    }

    async fn run(
        &self,
        platform: &dyn Platform,
        command: CommandName,
        raw: RawInvocation,
        request_id: Uuid,
    ) -> Result<ReplyPayload> {
        let spec = self
            .catalog
            .get(command)
            .ok_or_else(|| anyhow!("/{command} is not in the catalog"))?;
        let handler = self
            .registry
            .get(command)
            .ok_or_else(|| anyhow!("no handler registered for /{command}"))?;

        let invocation = Invocation {
            request_id,
            command,
            arguments: Arguments::coerce(spec, raw.options)?,
            invoker: raw.invoker,
            guild_id: raw.guild_id,
            channel_id: raw.channel_id,
        };

        handler.handle(platform, &invocation).await
    }
}

/// Send a handler's payload, then attach its reactions.
///
/// A failed send falls back to one generic failure reply.
pub(crate) async fn deliver(
    platform: &dyn Platform,
    payload: &ReplyPayload,
    request_id: Uuid,
) -> Dispatch {
    match platform.reply(payload).await {
        Ok(sent) => {
            for emoji in &payload.reactions {
                if let Err(e) = platform.react(&sent, emoji).await {
                    warn!("[{request_id}] ⚠️ Failed to add reaction {emoji}: {e}");
                }
            }
            debug!("[{request_id}] ✅ Reply sent");
            Dispatch::Replied
        }
        Err(e) => {
            error!("[{request_id}] ❌ Failed to send reply: {e:#}");
            send_failure_reply(platform, request_id).await;
            Dispatch::Failed
        }
    }
}

pub(crate) async fn send_failure_reply(platform: &dyn Platform, request_id: Uuid) {
    if let Err(e) = platform
        .reply(&ReplyPayload::text(COMMAND_FAILURE_REPLY))
        .await
    {
        error!("[{request_id}] ❌ Failed to send failure reply: {e:#}");
    }
}
