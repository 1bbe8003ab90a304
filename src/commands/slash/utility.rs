//! Utility slash command definitions

use crate::commands::schema::{CommandName, CommandSpec, ParameterSpec};
use crate::core::MESSAGE_LIMIT;

/// Creates utility commands
pub fn create_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(CommandName::Ping, "Replies With Pong!"),
        CommandSpec::new(CommandName::Embed, "Replies With An Embedded Message."),
        CommandSpec::new(CommandName::ServerInfo, "Displays Information About The Server.")
            .guild_only(),
        create_avatar_command(),
        create_say_command(),
    ]
}

fn create_avatar_command() -> CommandSpec {
    CommandSpec::new(CommandName::Avatar, "Displays The Avatar Of A User.").parameter(
        ParameterSpec::user("target", "The User To Get The Avatar Of", false),
    )
}

fn create_say_command() -> CommandSpec {
    CommandSpec::new(CommandName::Say, "Repeats Your Message.")
        .parameter(
            ParameterSpec::string("message", "The Message To Repeat", true)
                .max_length(MESSAGE_LIMIT as u16),
        )
}
