//! Moderation slash command definitions
//!
//! All three are hidden in DMs and default to members holding the matching permission.

use serenity::model::permissions::Permissions;

use crate::commands::schema::{CommandName, CommandSpec, ParameterSpec};

/// Creates moderation commands
pub fn create_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(CommandName::Kick, "Kick A User.")
            .parameter(ParameterSpec::user("target", "The User To Kick", true))
            .guild_only()
            .default_member_permissions(Permissions::KICK_MEMBERS),
        CommandSpec::new(CommandName::Ban, "Ban A User.")
            .parameter(ParameterSpec::user("target", "The User To Ban", true))
            .guild_only()
            .default_member_permissions(Permissions::BAN_MEMBERS),
        create_clear_command(),
    ]
}

/// Creates the clear command
fn create_clear_command() -> CommandSpec {
    CommandSpec::new(CommandName::Clear, "Clears A Specified Number Of Messages.")
        .parameter(
            ParameterSpec::integer("amount", "Number Of Messages To Delete", true).min_value(1),
        )
        .guild_only()
        .default_member_permissions(Permissions::MANAGE_MESSAGES)
}
