//! # Command System
//!
//! Slash command (/) and text prefix handling for Discord events.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Typed catalog, enum-keyed registry, command and text routers

pub mod context;
pub mod handler;
pub mod handlers;
pub mod options;
pub mod registry;
pub mod router;
pub mod schema;
pub mod slash;
pub mod text;

// Re-export handler infrastructure
pub use context::{Invocation, RawInvocation, TextMessage, UserRef};
pub use handler::SlashCommandHandler;
pub use options::{Arguments, RawOption, RawValue};
pub use registry::CommandRegistry;
pub use router::{CommandRouter, Dispatch, COMMAND_FAILURE_REPLY};
pub use schema::{CommandCatalog, CommandName, CommandSpec, ParameterKind, ParameterSpec};
pub use text::{TextCommand, TextRouter};

// Re-export commonly used items from submodules
pub use slash::{publish_commands, standard_catalog, CatalogApi, RegistrationScope};
