//! Slash command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;

use super::context::Invocation;
use super::schema::CommandName;
use crate::core::ReplyPayload;
use crate::platform::Platform;

/// Trait for slash command handlers
///
/// Each handler processes one or more commands. It may perform remote calls
/// through `platform` (kick, delete, lookups) but never sends its own reply:
/// the returned payload is sent by the router, which keeps replies at exactly
/// one per invocation.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl SlashCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [CommandName] {
///         &[CommandName::Ping]
///     }
///
///     async fn handle(&self, _platform: &dyn Platform, invocation: &Invocation) -> Result<ReplyPayload> {
///         Ok(ReplyPayload::text("Pong"))
///     }
/// }
/// ```
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Command(s) this handler processes
    fn command_names(&self) -> &'static [CommandName];

    /// Handle the slash command and produce its reply
    async fn handle(&self, platform: &dyn Platform, invocation: &Invocation)
        -> Result<ReplyPayload>;
}
