// Core layer - shared types and configuration
pub mod core;

// Platform layer - outbound Discord calls behind a trait
pub mod platform;

// Application layer
pub mod commands;

// Features layer - background tasks
pub mod features;

// Re-export core config
pub use core::Config;

pub use commands::{CommandRouter, TextRouter};
pub use features::{PresenceRotator, PresenceSink};
