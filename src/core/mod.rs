//! # Core Module
//!
//! Configuration, reply payload types and shared embed branding.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod config;
pub mod embeds;
pub mod reply;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use reply::{EmbedField, EmbedSpec, ReactionEmoji, ReplyPayload};
pub use response::{truncate_for_embed, truncate_for_message, EMBED_LIMIT, MESSAGE_LIMIT};
