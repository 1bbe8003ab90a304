//! Poll slash command definition

use crate::commands::schema::{CommandName, CommandSpec, ParameterSpec};
use crate::core::EMBED_LIMIT;

pub fn create_commands() -> Vec<CommandSpec> {
    vec![CommandSpec::new(CommandName::Poll, "Creates A Poll.")
        .parameter(
            ParameterSpec::string("question", "The Poll Question", true)
                .max_length(EMBED_LIMIT as u16),
        )
        .parameter(ParameterSpec::string(
            "title",
            "Custom Title For The Poll",
            false,
        ))]
}
