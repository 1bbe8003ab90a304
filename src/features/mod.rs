//! # Features
//!
//! Background behaviour that runs alongside command handling.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

pub mod presence;

pub use presence::{PresenceRotator, PresenceSink};
