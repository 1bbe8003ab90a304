//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{bail, Result};
use std::collections::HashMap;
use std::sync::Arc;

use super::handler::SlashCommandHandler;
use super::schema::{CommandCatalog, CommandName};

/// Registry mapping command names to handlers
///
/// A handler may serve several commands; each command has exactly one handler.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    handlers: HashMap<CommandName, Arc<dyn SlashCommandHandler>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for its declared command names
    ///
    /// Fails if any of those commands already has a handler.
    pub fn register(&mut self, handler: Arc<dyn SlashCommandHandler>) -> Result<()> {
        for name in handler.command_names() {
            if self.handlers.contains_key(name) {
                bail!("command '{name}' already has a handler");
            }
            self.handlers.insert(*name, Arc::clone(&handler));
        }
        Ok(())
    }

    /// Build a registry from handlers and check it covers every catalog command
    pub fn for_catalog(
        catalog: &CommandCatalog,
        handlers: Vec<Arc<dyn SlashCommandHandler>>,
    ) -> Result<Self> {
        let mut registry = Self::new();
        for handler in handlers {
            registry.register(handler)?;
        }
        if let Some(missing) = catalog.names().find(|name| !registry.contains(*name)) {
            bail!("command '{missing}' is published but has no handler");
        }
        Ok(registry)
    }

    /// Get handler for a command name
    pub fn get(&self, name: CommandName) -> Option<Arc<dyn SlashCommandHandler>> {
        self.handlers.get(&name).cloned()
    }

    /// Check if a command is registered
    pub fn contains(&self, name: CommandName) -> bool {
        self.handlers.contains_key(&name)
    }

    /// Number of registered command names
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
