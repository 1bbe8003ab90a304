//! In-memory platform for unit testing without a Discord connection.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{GuildSummary, MemberInfo, Platform, SentMessage};
use crate::core::{ReactionEmoji, ReplyPayload};

/// One outbound call, recorded in call order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Reply(ReplyPayload),
    React(ReactionEmoji),
    GuildSummary(u64),
    Member(u64, u64),
    Kick(u64, u64),
    Ban(u64, u64),
    BulkDelete(u64, u8),
}

/// Records every call and answers from canned state.
///
/// # Example
/// ```rust,ignore
/// let mock = MockPlatform::new().with_member(GUILD, member);
/// handler.handle(&mock, &invocation).await?;
/// assert_eq!(mock.calls()[0], Call::Member(GUILD, member.user_id));
/// ```
#[derive(Clone, Default)]
pub struct MockPlatform {
    calls: Arc<Mutex<Vec<Call>>>,
    guild: Option<GuildSummary>,
    members: HashMap<(u64, u64), MemberInfo>,
    /// Messages in the channel still young enough to bulk-delete
    deletable: usize,
    failing_replies: Arc<Mutex<usize>>,
    failing_reactions: Vec<ReactionEmoji>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guild(mut self, name: &str, member_count: u64) -> Self {
        self.guild = Some(GuildSummary {
            name: name.to_string(),
            member_count,
        });
        self
    }

    pub fn with_member(mut self, guild_id: u64, member: MemberInfo) -> Self {
        self.members.insert((guild_id, member.user_id), member);
        self
    }

    pub fn with_deletable_messages(mut self, count: usize) -> Self {
        self.deletable = count;
        self
    }

    /// Make the next `count` replies fail
    pub fn with_failing_replies(self, count: usize) -> Self {
        *self.failing_replies.lock().unwrap() = count;
        self
    }

    pub fn with_failing_reaction(mut self, emoji: ReactionEmoji) -> Self {
        self.failing_reactions.push(emoji);
        self
    }

    /// Snapshot of all calls in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<ReplyPayload> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Reply(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn reactions(&self) -> Vec<ReactionEmoji> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::React(e) => Some(e),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Platform for MockPlatform {
    async fn reply(&self, payload: &ReplyPayload) -> Result<SentMessage> {
        self.record(Call::Reply(payload.clone()));
        let mut failing = self.failing_replies.lock().unwrap();
        if *failing > 0 {
            *failing -= 1;
            return Err(anyhow!("mock reply failure"));
        }
        Ok(SentMessage {
            channel_id: 1,
            message_id: Some(1),
        })
    }

    async fn react(&self, _message: &SentMessage, emoji: &ReactionEmoji) -> Result<()> {
        self.record(Call::React(emoji.clone()));
        if self.failing_reactions.contains(emoji) {
            return Err(anyhow!("mock reaction failure"));
        }
        Ok(())
    }

    async fn guild_summary(&self, guild_id: u64) -> Result<GuildSummary> {
        self.record(Call::GuildSummary(guild_id));
        self.guild.clone().ok_or_else(|| anyhow!("unknown guild"))
    }

    async fn member(&self, guild_id: u64, user_id: u64) -> Result<Option<MemberInfo>> {
        self.record(Call::Member(guild_id, user_id));
        Ok(self.members.get(&(guild_id, user_id)).cloned())
    }

    async fn kick(&self, guild_id: u64, user_id: u64) -> Result<()> {
        self.record(Call::Kick(guild_id, user_id));
        Ok(())
    }

    async fn ban(&self, guild_id: u64, user_id: u64) -> Result<()> {
        self.record(Call::Ban(guild_id, user_id));
        Ok(())
    }

    async fn bulk_delete(&self, channel_id: u64, amount: u8) -> Result<usize> {
        self.record(Call::BulkDelete(channel_id, amount));
        Ok(self.deletable.min(amount as usize))
    }
}
