//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Utility, moderation and poll slash handlers; userinfo and greeting text handlers

pub mod greeting;
pub mod moderation;
pub mod poll;
pub mod userinfo;
pub mod utility;

use std::sync::Arc;

use super::handler::SlashCommandHandler;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn SlashCommandHandler>> {
    vec![
        Arc::new(utility::UtilityHandler),
        Arc::new(moderation::ModerationHandler),
        Arc::new(poll::PollHandler),
    ]
}
