//! # Presence Rotation Feature
//!
//! Cycles the bot's activity through a fixed list on a timer.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod rotator;

pub use rotator::{
    ActivityKind, PresenceEntry, PresenceRotator, PresenceSink, DEFAULT_ENTRIES,
    PRESENCE_INTERVAL,
};
