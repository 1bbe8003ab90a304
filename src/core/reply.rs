//! Reply payloads handed from command handlers to the platform
//!
//! Handlers never talk to the Discord HTTP API for their reply; they build a
//! `ReplyPayload` and the router sends it. This keeps the one-reply-per-event
//! rule in a single place.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use chrono::{DateTime, Utc};
use std::fmt;

use crate::core::response::{truncate_for_embed, truncate_for_message};

/// A reaction to attach to a sent reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionEmoji {
    Unicode(String),
    Custom { name: String, id: u64, animated: bool },
}

impl ReactionEmoji {
    pub fn unicode(emoji: &str) -> Self {
        ReactionEmoji::Unicode(emoji.to_string())
    }

    pub fn custom(name: &str, id: u64, animated: bool) -> Self {
        ReactionEmoji::Custom {
            name: name.to_string(),
            id,
            animated,
        }
    }
}

impl fmt::Display for ReactionEmoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactionEmoji::Unicode(emoji) => write!(f, "{emoji}"),
            ReactionEmoji::Custom { name, id, animated } => {
                let prefix = if *animated { "a" } else { "" };
                write!(f, "<{prefix}:{name}:{id}>")
            }
        }
    }
}

/// Name + optional icon pair used by embed authors and footers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedBadge {
    pub text: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Rich-content block, converted to a platform embed at send time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedSpec {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<u32>,
    pub author: Option<EmbedBadge>,
    pub thumbnail: Option<String>,
    pub footer: Option<EmbedBadge>,
    pub timestamp: Option<DateTime<Utc>>,
    pub fields: Vec<EmbedField>,
}

impl EmbedSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Description is clipped to the embed limit.
    pub fn description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(truncate_for_embed(description.as_ref()));
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn author(mut self, name: impl Into<String>, icon_url: Option<&str>) -> Self {
        self.author = Some(EmbedBadge {
            text: name.into(),
            icon_url: icon_url.map(str::to_string),
        });
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn footer(mut self, text: impl Into<String>, icon_url: Option<&str>) -> Self {
        self.footer = Some(EmbedBadge {
            text: text.into(),
            icon_url: icon_url.map(str::to_string),
        });
        self
    }

    pub fn timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }
}

/// Everything a handler wants sent back for one event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyPayload {
    pub content: Option<String>,
    pub embed: Option<EmbedSpec>,
    /// Attached in order after the reply is sent, best-effort
    pub reactions: Vec<ReactionEmoji>,
}

impl ReplyPayload {
    pub fn text(content: impl AsRef<str>) -> Self {
        ReplyPayload {
            content: Some(truncate_for_message(content.as_ref())),
            ..Default::default()
        }
    }

    pub fn embed(embed: EmbedSpec) -> Self {
        ReplyPayload {
            embed: Some(embed),
            ..Default::default()
        }
    }

    pub fn with_reactions(mut self, reactions: Vec<ReactionEmoji>) -> Self {
        self.reactions = reactions;
        self
    }
}
