//! # Platform Seam
//!
//! Outbound Discord calls used by command handlers, behind a trait so the
//! routers and handlers run against serenity in production and an in-memory
//! recorder in tests.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod discord;
pub mod hierarchy;
#[cfg(test)]
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::core::{ReactionEmoji, ReplyPayload};

pub use discord::{ReplyTarget, SerenityPlatform};
pub use hierarchy::{Eligibility, GuildFacts, MemberFacts};

/// Handle to a message the bot has sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentMessage {
    pub channel_id: u64,
    /// Unknown when the platform did not report the created message
    pub message_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSummary {
    pub name: String,
    pub member_count: u64,
}

/// Guild membership record of one user, as seen by the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    pub user_id: u64,
    /// Highest role, or the guild's @everyone role when the member has none
    pub top_role_id: u64,
    /// Unix seconds
    pub joined_at: Option<i64>,
    pub eligibility: Eligibility,
}

/// Outbound calls available to handlers for one event.
///
/// Each instance is bound to the event it serves, so `reply` always answers
/// the originating interaction or channel.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Send the reply for the current event
    async fn reply(&self, payload: &ReplyPayload) -> Result<SentMessage>;

    async fn react(&self, message: &SentMessage, emoji: &ReactionEmoji) -> Result<()>;

    async fn guild_summary(&self, guild_id: u64) -> Result<GuildSummary>;

    /// `Ok(None)` when the user is not a member of the guild
    async fn member(&self, guild_id: u64, user_id: u64) -> Result<Option<MemberInfo>>;

    async fn kick(&self, guild_id: u64, user_id: u64) -> Result<()>;

    async fn ban(&self, guild_id: u64, user_id: u64) -> Result<()>;

    /// Delete up to `amount` recent messages, skipping ones too old to bulk-delete.
    /// Returns how many were deleted.
    async fn bulk_delete(&self, channel_id: u64, amount: u8) -> Result<usize>;
}

/// Discord refuses to bulk-delete messages older than two weeks
pub const BULK_DELETE_MAX_AGE_DAYS: i64 = 14;

/// Ids of the `(message id, unix seconds)` pairs still young enough to bulk-delete.
pub fn bulk_deletable(messages: &[(u64, i64)], now: DateTime<Utc>) -> Vec<u64> {
    let cutoff = (now - Duration::days(BULK_DELETE_MAX_AGE_DAYS)).timestamp();
    messages
        .iter()
        .filter(|(_, sent_at)| *sent_at > cutoff)
        .map(|(id, _)| *id)
        .collect()
}
