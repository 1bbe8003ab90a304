//! Validation and coercion of slash command options
//!
//! The gateway hands options over loosely typed; they are checked against the
//! command's `CommandSpec` here so handlers only ever see typed values.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{anyhow, bail, Result};
use std::collections::HashMap;

use super::context::UserRef;
use super::schema::{CommandSpec, ParameterKind};

/// An option value as received, not yet checked against the schema
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    String(String),
    Integer(i64),
    User(UserRef),
    /// Anything the catalog never declares (numbers, channels, roles, ...)
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawOption {
    pub name: String,
    pub value: RawValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    String(String),
    Integer(i64),
    User(UserRef),
}

impl ArgumentValue {
    fn kind(&self) -> ParameterKind {
        match self {
            ArgumentValue::String(_) => ParameterKind::String,
            ArgumentValue::Integer(_) => ParameterKind::Integer,
            ArgumentValue::User(_) => ParameterKind::User,
        }
    }
}

/// Typed arguments of one invocation, keyed by parameter name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: HashMap<String, ArgumentValue>,
}

impl Arguments {
    /// Check raw options against `spec`: every option must be declared, of the
    /// declared kind, and every required parameter must be present.
    pub fn coerce(spec: &CommandSpec, raw: Vec<RawOption>) -> Result<Self> {
        let mut values = HashMap::new();

        for option in raw {
            let parameter = spec.find_parameter(&option.name).ok_or_else(|| {
                anyhow!("/{} has no option named '{}'", spec.name, option.name)
            })?;

            let value = match option.value {
                RawValue::String(s) => ArgumentValue::String(s),
                RawValue::Integer(i) => ArgumentValue::Integer(i),
                RawValue::User(u) => ArgumentValue::User(u),
                RawValue::Unsupported(kind) => bail!(
                    "/{} option '{}' has unsupported type {kind}",
                    spec.name,
                    option.name
                ),
            };

            if value.kind() != parameter.kind {
                bail!(
                    "/{} option '{}' expected {:?}, got {:?}",
                    spec.name,
                    option.name,
                    parameter.kind,
                    value.kind()
                );
            }

            values.insert(option.name, value);
        }

        if let Some(missing) = spec
            .parameters
            .iter()
            .find(|p| p.required && !values.contains_key(&p.name))
        {
            bail!("/{} is missing required option '{}'", spec.name, missing.name);
        }

        Ok(Self { values })
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ArgumentValue::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(ArgumentValue::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn user(&self, name: &str) -> Option<&UserRef> {
        match self.values.get(name) {
            Some(ArgumentValue::User(u)) => Some(u),
            _ => None,
        }
    }

    pub fn require_string(&self, name: &str) -> Result<&str> {
        self.string(name)
            .ok_or_else(|| anyhow!("missing string option '{name}'"))
    }

    pub fn require_integer(&self, name: &str) -> Result<i64> {
        self.integer(name)
            .ok_or_else(|| anyhow!("missing integer option '{name}'"))
    }

    pub fn require_user(&self, name: &str) -> Result<&UserRef> {
        self.user(name).ok_or_else(|| anyhow!("missing user option '{name}'"))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::schema::{CommandName, ParameterSpec};

    fn poll_spec() -> CommandSpec {
        CommandSpec::new(CommandName::Poll, "Creates A Poll.")
            .parameter(ParameterSpec::string("question", "The Poll Question", true))
            .parameter(ParameterSpec::string("title", "Custom Title", false))
    }

    fn raw(name: &str, value: RawValue) -> RawOption {
        RawOption {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_coerce_required_and_optional() {
        let args = Arguments::coerce(
            &poll_spec(),
            vec![raw("question", RawValue::String("Will it rain?".into()))],
        )
        .unwrap();
        assert_eq!(args.string("question"), Some("Will it rain?"));
        assert_eq!(args.string("title"), None);
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn test_coerce_missing_required() {
        let err = Arguments::coerce(
            &poll_spec(),
            vec![raw("title", RawValue::String("Title".into()))],
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing required option 'question'"));
    }

    #[test]
    fn test_coerce_kind_mismatch() {
        let err = Arguments::coerce(&poll_spec(), vec![raw("question", RawValue::Integer(3))])
            .unwrap_err();
        assert!(err.to_string().contains("expected String"));
    }

    #[test]
    fn test_coerce_unknown_option() {
        let result = Arguments::coerce(
            &poll_spec(),
            vec![
                raw("question", RawValue::String("q".into())),
                raw("colour", RawValue::String("red".into())),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_coerce_unsupported_value() {
        let result = Arguments::coerce(
            &poll_spec(),
            vec![raw("question", RawValue::Unsupported("Channel".into()))],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_typed_getters_do_not_cross_kinds() {
        let spec = CommandSpec::new(CommandName::Clear, "Clear")
            .parameter(ParameterSpec::integer("amount", "n", true));
        let args = Arguments::coerce(&spec, vec![raw("amount", RawValue::Integer(5))]).unwrap();
        assert_eq!(args.integer("amount"), Some(5));
        assert!(args.string("amount").is_none());
        assert!(args.require_user("amount").is_err());
    }
}
