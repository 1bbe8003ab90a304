//! Event types consumed by the routers and handlers
//!
//! These are plain, platform-neutral snapshots taken from serenity's models
//! at the gateway boundary so handlers can be exercised without a live client.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use uuid::Uuid;

use super::options::{Arguments, RawOption};
use super::schema::CommandName;

/// Identity of a Discord user as needed by replies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: u64,
    pub name: String,
    /// Legacy discriminator; 0 for migrated usernames
    pub discriminator: u16,
    /// Display avatar: the custom avatar if set, otherwise the default one
    pub avatar_url: String,
}

impl UserRef {
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    /// `name#1234`, or just `name` for users without a discriminator
    pub fn tag(&self) -> String {
        if self.discriminator == 0 {
            self.name.clone()
        } else {
            format!("{}#{:04}", self.name, self.discriminator)
        }
    }
}

/// A slash command invocation as delivered by the gateway, before validation
#[derive(Debug, Clone)]
pub struct RawInvocation {
    pub command_name: String,
    pub options: Vec<RawOption>,
    pub invoker: UserRef,
    pub guild_id: Option<u64>,
    pub channel_id: u64,
}

/// A validated slash command invocation
#[derive(Debug, Clone)]
pub struct Invocation {
    pub request_id: Uuid,
    pub command: CommandName,
    pub arguments: Arguments,
    pub invoker: UserRef,
    pub guild_id: Option<u64>,
    pub channel_id: u64,
}

impl Invocation {
    pub fn require_guild(&self) -> anyhow::Result<u64> {
        self.guild_id
            .ok_or_else(|| anyhow::anyhow!("/{} can only be used in a server", self.command))
    }
}

/// A plain text message seen in a channel
#[derive(Debug, Clone)]
pub struct TextMessage {
    pub content: String,
    pub author: UserRef,
    pub author_is_bot: bool,
    /// Mentioned users in the order the platform reports them
    pub mentions: Vec<UserRef>,
    pub guild_id: Option<u64>,
    pub channel_id: u64,
}
