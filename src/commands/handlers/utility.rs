//! Utility command handlers
//!
//! Handles: ping, embed, serverinfo, avatar, say
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::commands::context::Invocation;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::schema::CommandName;
use crate::core::embeds::info_embed;
use crate::core::ReplyPayload;
use crate::platform::Platform;

/// Handler for utility commands: ping, embed, serverinfo, avatar, say
pub struct UtilityHandler;

#[async_trait]
impl SlashCommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [CommandName] {
        &[
            CommandName::Ping,
            CommandName::Embed,
            CommandName::ServerInfo,
            CommandName::Avatar,
            CommandName::Say,
        ]
    }

    async fn handle(
        &self,
        platform: &dyn Platform,
        invocation: &Invocation,
    ) -> Result<ReplyPayload> {
        match invocation.command {
            CommandName::Ping => Ok(self.handle_ping(invocation)),
            CommandName::Embed => Ok(self.handle_embed()),
            CommandName::ServerInfo => self.handle_serverinfo(platform, invocation).await,
            CommandName::Avatar => Ok(self.handle_avatar(invocation)),
            CommandName::Say => self.handle_say(invocation),
            other => anyhow::bail!("UtilityHandler cannot handle /{other}"),
        }
    }
}

impl UtilityHandler {
    /// Handle /ping command
    fn handle_ping(&self, invocation: &Invocation) -> ReplyPayload {
        ReplyPayload::text(format!("> {} Pong 🎉", invocation.invoker.mention()))
    }

    /// Handle /embed command
    fn handle_embed(&self) -> ReplyPayload {
        ReplyPayload::embed(info_embed(
            "Sample Embed",
            "This Is An Embedded Sample Message!",
        ))
    }

    /// Handle /serverinfo command
    async fn handle_serverinfo(
        &self,
        platform: &dyn Platform,
        invocation: &Invocation,
    ) -> Result<ReplyPayload> {
        let guild_id = invocation.require_guild()?;
        let guild = platform.guild_summary(guild_id).await?;

        info!(
            "[{}] Server info for guild {guild_id}: {} members",
            invocation.request_id, guild.member_count
        );
        Ok(ReplyPayload::embed(info_embed(
            format!("{} Server Info", guild.name),
            format!("Total Members: {}", guild.member_count),
        )))
    }

    /// Handle /avatar command; defaults to the invoking user
    fn handle_avatar(&self, invocation: &Invocation) -> ReplyPayload {
        let user = invocation
            .arguments
            .user("target")
            .unwrap_or(&invocation.invoker);
        ReplyPayload::text(&user.avatar_url)
    }

    /// Handle /say command
    fn handle_say(&self, invocation: &Invocation) -> Result<ReplyPayload> {
        let message = invocation.arguments.require_string("message")?;
        Ok(ReplyPayload::text(message))
    }
}
