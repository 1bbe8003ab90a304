//! Declarative command schema and the validated command catalog
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Typed command/parameter specs with Discord JSON serialization

use anyhow::{bail, Result};
use serde::Serialize;
use serenity::model::permissions::Permissions;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Every slash command the bot understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Ping,
    Embed,
    ServerInfo,
    Avatar,
    Say,
    Kick,
    Ban,
    Poll,
    Clear,
}

impl CommandName {
    pub const ALL: [CommandName; 9] = [
        CommandName::Ping,
        CommandName::Embed,
        CommandName::ServerInfo,
        CommandName::Avatar,
        CommandName::Say,
        CommandName::Kick,
        CommandName::Ban,
        CommandName::Poll,
        CommandName::Clear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::Ping => "ping",
            CommandName::Embed => "embed",
            CommandName::ServerInfo => "serverinfo",
            CommandName::Avatar => "avatar",
            CommandName::Say => "say",
            CommandName::Kick => "kick",
            CommandName::Ban => "ban",
            CommandName::Poll => "poll",
            CommandName::Clear => "clear",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        CommandName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown command '{s}'"))
    }
}

/// Option types the catalog uses, with their Discord option type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    String,
    Integer,
    User,
}

impl ParameterKind {
    pub fn option_type(&self) -> u8 {
        match self {
            ParameterKind::String => 3,
            ParameterKind::Integer => 4,
            ParameterKind::User => 6,
        }
    }
}

impl Serialize for ParameterKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.option_type())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    /// Longest string Discord accepts for this option, in characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
}

impl ParameterSpec {
    fn new(name: &str, description: &str, kind: ParameterKind, required: bool) -> Self {
        ParameterSpec {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            required,
            min_value: None,
            max_length: None,
        }
    }

    pub fn string(name: &str, description: &str, required: bool) -> Self {
        Self::new(name, description, ParameterKind::String, required)
    }

    pub fn integer(name: &str, description: &str, required: bool) -> Self {
        Self::new(name, description, ParameterKind::Integer, required)
    }

    pub fn user(name: &str, description: &str, required: bool) -> Self {
        Self::new(name, description, ParameterKind::User, required)
    }

    pub fn min_value(mut self, min: i64) -> Self {
        self.min_value = Some(min);
        self
    }

    pub fn max_length(mut self, max: u16) -> Self {
        self.max_length = Some(max);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: CommandName,
    pub description: String,
    pub parameters: Vec<ParameterSpec>,
    /// Hide the command in DMs
    pub guild_only: bool,
    pub default_member_permissions: Option<Permissions>,
}

impl CommandSpec {
    pub fn new(name: CommandName, description: &str) -> Self {
        CommandSpec {
            name,
            description: description.to_string(),
            parameters: Vec::new(),
            guild_only: false,
            default_member_permissions: None,
        }
    }

    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn guild_only(mut self) -> Self {
        self.guild_only = true;
        self
    }

    pub fn default_member_permissions(mut self, permissions: Permissions) -> Self {
        self.default_member_permissions = Some(permissions);
        self
    }

    pub fn find_parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Body of one entry in the bulk-overwrite request
    pub fn to_json(&self) -> serde_json::Value {
        #[derive(Serialize)]
        struct Body<'a> {
            name: &'static str,
            description: &'a str,
            #[serde(rename = "type")]
            kind: u8,
            options: &'a [ParameterSpec],
            dm_permission: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            default_member_permissions: Option<String>,
        }

        let body = Body {
            name: self.name.as_str(),
            description: &self.description,
            kind: 1,
            options: &self.parameters,
            dm_permission: !self.guild_only,
            default_member_permissions: self
                .default_member_permissions
                .map(|p| p.bits().to_string()),
        };
        // Serializing plain strings, integers and bools into a Value cannot fail
        serde_json::to_value(body).unwrap_or(serde_json::Value::Null)
    }
}

/// The validated, immutable set of commands published at startup
#[derive(Debug, Clone)]
pub struct CommandCatalog {
    commands: Vec<CommandSpec>,
}

impl CommandCatalog {
    /// Validate and freeze a list of command specs.
    ///
    /// Fails on a duplicate command name, a duplicate parameter name within a
    /// command, or a required parameter declared after an optional one.
    pub fn new(commands: Vec<CommandSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for command in &commands {
            if !seen.insert(command.name) {
                bail!("duplicate command name '{}'", command.name);
            }

            let mut params = HashSet::new();
            let mut optional_seen = false;
            for parameter in &command.parameters {
                if !params.insert(parameter.name.as_str()) {
                    bail!(
                        "duplicate parameter '{}' in command '{}'",
                        parameter.name,
                        command.name
                    );
                }
                if parameter.required && optional_seen {
                    bail!(
                        "required parameter '{}' follows an optional one in command '{}'",
                        parameter.name,
                        command.name
                    );
                }
                optional_seen |= !parameter.required;
            }
        }
        Ok(Self { commands })
    }

    pub fn get(&self, name: CommandName) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = CommandName> + '_ {
        self.commands.iter().map(|c| c.name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// JSON array body for a bulk "replace all commands" call
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.commands.iter().map(CommandSpec::to_json).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_name_round_trip() {
        for name in CommandName::ALL {
            assert_eq!(name.as_str().parse::<CommandName>().unwrap(), name);
        }
        assert!("hello".parse::<CommandName>().is_err());
        assert!("Ping".parse::<CommandName>().is_err());
    }

    #[test]
    fn test_catalog_rejects_duplicate_command() {
        let result = CommandCatalog::new(vec![
            CommandSpec::new(CommandName::Ping, "one"),
            CommandSpec::new(CommandName::Ping, "two"),
        ]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate command name 'ping'"));
    }

    #[test]
    fn test_catalog_rejects_duplicate_parameter() {
        let result = CommandCatalog::new(vec![CommandSpec::new(CommandName::Say, "say")
            .parameter(ParameterSpec::string("message", "a", true))
            .parameter(ParameterSpec::string("message", "b", false))]);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_rejects_required_after_optional() {
        let result = CommandCatalog::new(vec![CommandSpec::new(CommandName::Poll, "poll")
            .parameter(ParameterSpec::string("title", "t", false))
            .parameter(ParameterSpec::string("question", "q", true))]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_json_shape() {
        let spec = CommandSpec::new(CommandName::Clear, "Clears messages.")
            .guild_only()
            .default_member_permissions(Permissions::MANAGE_MESSAGES)
            .parameter(ParameterSpec::integer("amount", "How many", true).min_value(1));
        let json = spec.to_json();

        assert_eq!(json["name"], "clear");
        assert_eq!(json["type"], 1);
        assert_eq!(json["dm_permission"], false);
        assert_eq!(
            json["default_member_permissions"],
            Permissions::MANAGE_MESSAGES.bits().to_string()
        );
        assert_eq!(json["options"][0]["name"], "amount");
        assert_eq!(json["options"][0]["type"], 4);
        assert_eq!(json["options"][0]["required"], true);
        assert_eq!(json["options"][0]["min_value"], 1);
        assert!(json["options"][0].get("max_length").is_none());
    }

    #[test]
    fn test_string_option_max_length() {
        let json = CommandSpec::new(CommandName::Say, "Repeats Your Message.")
            .parameter(ParameterSpec::string("message", "The Message", true).max_length(2000))
            .to_json();
        assert_eq!(json["options"][0]["type"], 3);
        assert_eq!(json["options"][0]["max_length"], 2000);
        assert!(json["options"][0].get("min_value").is_none());
    }

    #[test]
    fn test_command_json_omits_unset_fields() {
        let json = CommandSpec::new(CommandName::Ping, "Replies With Pong!").to_json();
        assert_eq!(json["dm_permission"], true);
        assert!(json.get("default_member_permissions").is_none());
        assert_eq!(json["options"].as_array().unwrap().len(), 0);
    }
}
