//! Moderation command handlers
//!
//! Handles: kick, ban, clear
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};

use crate::commands::context::Invocation;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::schema::CommandName;
use crate::core::ReplyPayload;
use crate::platform::Platform;

/// Largest amount /clear accepts (inclusive)
pub const MAX_CLEAR: i64 = 100;

pub const KICK_REFUSED: &str = "> I cannot kick this user.";
pub const BAN_REFUSED: &str = "> I cannot ban this user.";
pub const CLEAR_REFUSED: &str =
    "> You Can Delete Up To **100** Messages At One Time. <:Wrong:1248976848570945594>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearPlan {
    Delete(u8),
    Refuse,
}

/// Decide what /clear does for a requested amount.
///
/// Anything above 100 is refused; non-positive amounts delete nothing.
pub fn plan_clear(amount: i64) -> ClearPlan {
    if amount > MAX_CLEAR {
        ClearPlan::Refuse
    } else {
        ClearPlan::Delete(amount.clamp(0, MAX_CLEAR) as u8)
    }
}

#[derive(Clone, Copy)]
enum MemberAction {
    Kick,
    Ban,
}

/// Handler for moderation commands: kick, ban, clear
pub struct ModerationHandler;

#[async_trait]
impl SlashCommandHandler for ModerationHandler {
    fn command_names(&self) -> &'static [CommandName] {
        &[CommandName::Kick, CommandName::Ban, CommandName::Clear]
    }

    async fn handle(
        &self,
        platform: &dyn Platform,
        invocation: &Invocation,
    ) -> Result<ReplyPayload> {
        match invocation.command {
            CommandName::Kick => {
                self.handle_member_action(platform, invocation, MemberAction::Kick)
                    .await
            }
            CommandName::Ban => {
                self.handle_member_action(platform, invocation, MemberAction::Ban)
                    .await
            }
            CommandName::Clear => self.handle_clear(platform, invocation).await,
            other => anyhow::bail!("ModerationHandler cannot handle /{other}"),
        }
    }
}

impl ModerationHandler {
    /// Handle /kick and /ban: act only when the bot outranks the target
    async fn handle_member_action(
        &self,
        platform: &dyn Platform,
        invocation: &Invocation,
        action: MemberAction,
    ) -> Result<ReplyPayload> {
        let guild_id = invocation.require_guild()?;
        let target = invocation.arguments.require_user("target")?;
        let member = platform.member(guild_id, target.id).await?;

        let eligible = member.map_or(false, |m| match action {
            MemberAction::Kick => m.eligibility.kickable,
            MemberAction::Ban => m.eligibility.bannable,
        });

        let request_id = invocation.request_id;
        match (action, eligible) {
            (MemberAction::Kick, true) => {
                platform.kick(guild_id, target.id).await?;
                info!("[{request_id}] Kicked user {} from guild {guild_id}", target.id);
                Ok(ReplyPayload::text(format!("> Kicked {}", target.name)))
            }
            (MemberAction::Ban, true) => {
                platform.ban(guild_id, target.id).await?;
                info!("[{request_id}] Banned user {} from guild {guild_id}", target.id);
                Ok(ReplyPayload::text(format!("Banned {}", target.name)))
            }
            (MemberAction::Kick, false) => {
                warn!("[{request_id}] Refused to kick user {}", target.id);
                Ok(ReplyPayload::text(KICK_REFUSED))
            }
            (MemberAction::Ban, false) => {
                warn!("[{request_id}] Refused to ban user {}", target.id);
                Ok(ReplyPayload::text(BAN_REFUSED))
            }
        }
    }

    /// Handle /clear command
    async fn handle_clear(
        &self,
        platform: &dyn Platform,
        invocation: &Invocation,
    ) -> Result<ReplyPayload> {
        let amount = invocation.arguments.require_integer("amount")?;

        match plan_clear(amount) {
            ClearPlan::Refuse => Ok(ReplyPayload::text(CLEAR_REFUSED)),
            ClearPlan::Delete(count) => {
                let deleted = platform.bulk_delete(invocation.channel_id, count).await?;
                info!(
                    "[{}] Cleared {deleted}/{count} messages in channel {}",
                    invocation.request_id, invocation.channel_id
                );
                Ok(ReplyPayload::text(format!(
                    "> Successfully Cleared **{deleted}** Messages. <:Correct:1248976791629074564>"
                )))
            }
        }
    }
}
