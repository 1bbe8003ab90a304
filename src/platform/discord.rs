//! Serenity-backed platform implementation and model conversions
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{anyhow, Context as _, Result};
use async_trait::async_trait;
use chrono::Utc;
use log::warn;
use serenity::builder::CreateEmbed;
use serenity::http::error::Error as HttpError;
use serenity::model::application::interaction::application_command::{
    ApplicationCommandInteraction, CommandDataOption, CommandDataOptionValue,
};
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::channel::{Message, ReactionType};
use serenity::model::guild::{Member, Role};
use serenity::model::id::{ChannelId, EmojiId, GuildId, MessageId, UserId};
use serenity::model::user::User;
use serenity::model::Timestamp;
use serenity::prelude::{Context, SerenityError};

use super::hierarchy::{GuildFacts, MemberFacts, RoleFacts};
use super::{bulk_deletable, GuildSummary, MemberInfo, Platform, SentMessage};
use crate::commands::context::{RawInvocation, TextMessage, UserRef};
use crate::commands::options::{RawOption, RawValue};
use crate::core::{EmbedSpec, ReactionEmoji, ReplyPayload};

/// Where the reply for the current event goes
#[derive(Clone, Copy)]
pub enum ReplyTarget<'a> {
    Interaction(&'a ApplicationCommandInteraction),
    Channel(ChannelId),
}

pub struct SerenityPlatform<'a> {
    ctx: &'a Context,
    target: ReplyTarget<'a>,
}

impl<'a> SerenityPlatform<'a> {
    pub fn for_interaction(ctx: &'a Context, command: &'a ApplicationCommandInteraction) -> Self {
        Self {
            ctx,
            target: ReplyTarget::Interaction(command),
        }
    }

    pub fn for_channel(ctx: &'a Context, channel_id: ChannelId) -> Self {
        Self {
            ctx,
            target: ReplyTarget::Channel(channel_id),
        }
    }

    async fn guild_facts(&self, guild_id: u64) -> Result<GuildFacts> {
        let cached = self
            .ctx
            .cache
            .guild_field(GuildId(guild_id), |g| (g.owner_id, g.roles.clone()));
        let (owner_id, roles) = match cached {
            Some(fields) => fields,
            None => {
                let guild = self
                    .ctx
                    .http
                    .get_guild(guild_id)
                    .await
                    .context("failed to fetch guild")?;
                (guild.owner_id, guild.roles)
            }
        };

        Ok(GuildFacts {
            guild_id,
            owner_id: owner_id.0,
            roles: roles
                .iter()
                .map(|(id, role)| (id.0, role_facts(role)))
                .collect(),
        })
    }
}

#[async_trait]
impl Platform for SerenityPlatform<'_> {
    async fn reply(&self, payload: &ReplyPayload) -> Result<SentMessage> {
        let embed = payload.embed.as_ref().map(create_embed);

        match self.target {
            ReplyTarget::Interaction(command) => {
                command
                    .create_interaction_response(&self.ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|message| {
                                if let Some(content) = &payload.content {
                                    message.content(content);
                                }
                                if let Some(embed) = &embed {
                                    message.add_embed(embed.clone());
                                }
                                message
                            })
                    })
                    .await
                    .context("failed to send interaction response")?;

                // The response id is only needed to react to it
                let message_id = if payload.reactions.is_empty() {
                    None
                } else {
                    match command.get_interaction_response(&self.ctx.http).await {
                        Ok(message) => Some(message.id.0),
                        Err(e) => {
                            warn!("Failed to fetch interaction response for reactions: {e}");
                            None
                        }
                    }
                };

                Ok(SentMessage {
                    channel_id: command.channel_id.0,
                    message_id,
                })
            }
            ReplyTarget::Channel(channel_id) => {
                let message = channel_id
                    .send_message(&self.ctx.http, |message| {
                        if let Some(content) = &payload.content {
                            message.content(content);
                        }
                        if let Some(embed) = &embed {
                            message.set_embed(embed.clone());
                        }
                        message
                    })
                    .await
                    .context("failed to send channel message")?;

                Ok(SentMessage {
                    channel_id: message.channel_id.0,
                    message_id: Some(message.id.0),
                })
            }
        }
    }

    async fn react(&self, message: &SentMessage, emoji: &ReactionEmoji) -> Result<()> {
        let message_id = message
            .message_id
            .ok_or_else(|| anyhow!("reply message id unavailable"))?;
        ChannelId(message.channel_id)
            .create_reaction(&self.ctx.http, MessageId(message_id), reaction_type(emoji))
            .await
            .with_context(|| format!("failed to add reaction {emoji}"))?;
        Ok(())
    }

    async fn guild_summary(&self, guild_id: u64) -> Result<GuildSummary> {
        let cached = self.ctx.cache.guild_field(GuildId(guild_id), |g| GuildSummary {
            name: g.name.clone(),
            member_count: g.member_count,
        });
        if let Some(summary) = cached {
            return Ok(summary);
        }

        let guild = self
            .ctx
            .http
            .get_guild_with_counts(guild_id)
            .await
            .context("failed to fetch guild")?;
        Ok(GuildSummary {
            name: guild.name,
            member_count: guild.approximate_member_count.unwrap_or(0),
        })
    }

    async fn member(&self, guild_id: u64, user_id: u64) -> Result<Option<MemberInfo>> {
        let guild = GuildId(guild_id);
        let member = match guild.member(self.ctx, UserId(user_id)).await {
            Ok(member) => member,
            Err(e) if is_not_found(&e) => return Ok(None),
            Err(e) => return Err(e).context("failed to fetch guild member"),
        };

        let bot_id = self.ctx.cache.current_user_id();
        let bot = guild
            .member(self.ctx, bot_id)
            .await
            .context("failed to fetch bot member")?;

        let facts = self.guild_facts(guild_id).await?;
        let target = member_facts(&member);
        let (top_role_id, _) = facts.highest_role(&target);

        Ok(Some(MemberInfo {
            user_id,
            top_role_id,
            joined_at: member.joined_at.map(|at| at.unix_timestamp()),
            eligibility: facts.eligibility(&member_facts(&bot), &target),
        }))
    }

    async fn kick(&self, guild_id: u64, user_id: u64) -> Result<()> {
        GuildId(guild_id)
            .kick(&self.ctx.http, UserId(user_id))
            .await
            .context("kick request failed")?;
        Ok(())
    }

    async fn ban(&self, guild_id: u64, user_id: u64) -> Result<()> {
        GuildId(guild_id)
            .ban(&self.ctx.http, UserId(user_id), 0)
            .await
            .context("ban request failed")?;
        Ok(())
    }

    async fn bulk_delete(&self, channel_id: u64, amount: u8) -> Result<usize> {
        if amount == 0 {
            return Ok(0);
        }
        let channel = ChannelId(channel_id);
        let messages = channel
            .messages(&self.ctx.http, |retriever| retriever.limit(u64::from(amount)))
            .await
            .context("failed to fetch recent messages")?;

        let recent: Vec<(u64, i64)> = messages
            .iter()
            .map(|m| (m.id.0, m.timestamp.unix_timestamp()))
            .collect();
        let ids = bulk_deletable(&recent, Utc::now());

        match ids.as_slice() {
            [] => {}
            [single] => channel
                .delete_message(&self.ctx.http, MessageId(*single))
                .await
                .context("delete request failed")?,
            many => channel
                .delete_messages(&self.ctx.http, many.iter().map(|id| MessageId(*id)))
                .await
                .context("bulk delete request failed")?,
        }
        Ok(ids.len())
    }
}

fn is_not_found(error: &SerenityError) -> bool {
    match error {
        SerenityError::Http(inner) => matches!(
            inner.as_ref(),
            HttpError::UnsuccessfulRequest(response) if response.status_code.as_u16() == 404
        ),
        _ => false,
    }
}

fn role_facts(role: &Role) -> RoleFacts {
    RoleFacts {
        position: role.position as i64,
        permissions: role.permissions,
    }
}

fn member_facts(member: &Member) -> MemberFacts {
    MemberFacts {
        user_id: member.user.id.0,
        role_ids: member.roles.iter().map(|r| r.0).collect(),
    }
}

fn reaction_type(emoji: &ReactionEmoji) -> ReactionType {
    match emoji {
        ReactionEmoji::Unicode(s) => ReactionType::Unicode(s.clone()),
        ReactionEmoji::Custom { name, id, animated } => ReactionType::Custom {
            animated: *animated,
            id: EmojiId(*id),
            name: Some(name.clone()),
        },
    }
}

/// Convert an embed spec into serenity's builder
pub fn create_embed(spec: &EmbedSpec) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    if let Some(author) = &spec.author {
        embed.author(|a| {
            a.name(&author.text);
            if let Some(url) = &author.icon_url {
                a.icon_url(url);
            }
            a
        });
    }
    if let Some(title) = &spec.title {
        embed.title(title);
    }
    if let Some(description) = &spec.description {
        embed.description(description);
    }
    if let Some(color) = spec.color {
        embed.color(color);
    }
    if let Some(url) = &spec.thumbnail {
        embed.thumbnail(url);
    }
    for field in &spec.fields {
        embed.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &spec.footer {
        embed.footer(|f| {
            f.text(&footer.text);
            if let Some(url) = &footer.icon_url {
                f.icon_url(url);
            }
            f
        });
    }
    if let Some(at) = spec.timestamp {
        if let Ok(timestamp) = Timestamp::from_unix_timestamp(at.timestamp()) {
            embed.timestamp(timestamp);
        }
    }
    embed
}

pub fn user_ref(user: &User) -> UserRef {
    UserRef {
        id: user.id.0,
        name: user.name.clone(),
        discriminator: user.discriminator,
        avatar_url: user.face(),
    }
}

fn raw_option(option: &CommandDataOption) -> RawOption {
    let value = match &option.resolved {
        Some(CommandDataOptionValue::String(s)) => RawValue::String(s.clone()),
        Some(CommandDataOptionValue::Integer(i)) => RawValue::Integer(*i),
        Some(CommandDataOptionValue::User(user, _)) => RawValue::User(user_ref(user)),
        Some(_) => RawValue::Unsupported(format!("{:?}", option.kind)),
        None => RawValue::Unsupported("unresolved".to_string()),
    };
    RawOption {
        name: option.name.clone(),
        value,
    }
}

/// Snapshot a slash command interaction for the command router
pub fn raw_invocation(command: &ApplicationCommandInteraction) -> RawInvocation {
    RawInvocation {
        command_name: command.data.name.clone(),
        options: command.data.options.iter().map(raw_option).collect(),
        invoker: user_ref(&command.user),
        guild_id: command.guild_id.map(|id| id.0),
        channel_id: command.channel_id.0,
    }
}

/// Snapshot a channel message for the text router
pub fn text_message(msg: &Message) -> TextMessage {
    TextMessage {
        content: msg.content.clone(),
        author: user_ref(&msg.author),
        author_is_bot: msg.author.bot,
        mentions: msg.mentions.iter().map(user_ref).collect(),
        guild_id: msg.guild_id.map(|id| id.0),
        channel_id: msg.channel_id.0,
    }
}
