//! Poll command handler
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;

use crate::commands::context::Invocation;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::schema::CommandName;
use crate::core::embeds::branded_embed;
use crate::core::{ReactionEmoji, ReplyPayload};
use crate::platform::Platform;

pub const DEFAULT_POLL_TITLE: &str = "D4 Community Latest Poll";

/// Voting reactions, attached in this order
pub fn poll_reactions() -> Vec<ReactionEmoji> {
    vec![
        ReactionEmoji::unicode("👍"),
        ReactionEmoji::unicode("👎"),
        ReactionEmoji::custom("DR4GYBOY", 1248997833617707020, false),
        ReactionEmoji::custom("Verification", 1248969180481585344, true),
    ]
}

/// Handler for /poll
pub struct PollHandler;

#[async_trait]
impl SlashCommandHandler for PollHandler {
    fn command_names(&self) -> &'static [CommandName] {
        &[CommandName::Poll]
    }

    async fn handle(
        &self,
        _platform: &dyn Platform,
        invocation: &Invocation,
    ) -> Result<ReplyPayload> {
        let question = invocation.arguments.require_string("question")?;
        let title = invocation
            .arguments
            .string("title")
            .unwrap_or(DEFAULT_POLL_TITLE);

        let embed = branded_embed()
            .title(title)
            .description(question)
            .thumbnail(&invocation.invoker.avatar_url);

        Ok(ReplyPayload::embed(embed).with_reactions(poll_reactions()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handlers::test_support::{invocation, user};
    use crate::commands::options::RawValue;
    use crate::core::embeds::{BRAND_COLOR, BRAND_NAME};
    use crate::platform::mock::MockPlatform;

    #[tokio::test]
    async fn test_poll_default_title() {
        let mock = MockPlatform::new();
        let reply = PollHandler
            .handle(
                &mock,
                &invocation(
                    CommandName::Poll,
                    vec![("question", RawValue::String("Will it rain?".into()))],
                ),
            )
            .await
            .unwrap();

        let embed = reply.embed.unwrap();
        assert_eq!(embed.title.as_deref(), Some(DEFAULT_POLL_TITLE));
        assert_eq!(embed.description.as_deref(), Some("Will it rain?"));
        assert_eq!(embed.author.unwrap().text, BRAND_NAME);
        assert_eq!(embed.color, Some(BRAND_COLOR));
        assert_eq!(embed.thumbnail, Some(user(100).avatar_url));
        assert!(embed.timestamp.is_some());
        assert_eq!(reply.reactions, poll_reactions());
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_poll_custom_title() {
        let reply = PollHandler
            .handle(
                &MockPlatform::new(),
                &invocation(
                    CommandName::Poll,
                    vec![
                        ("question", RawValue::String("Pizza?".into())),
                        ("title", RawValue::String("Friday Vote".into())),
                    ],
                ),
            )
            .await
            .unwrap();
        assert_eq!(reply.embed.unwrap().title.as_deref(), Some("Friday Vote"));
    }

    #[test]
    fn test_poll_reaction_order() {
        let rendered: Vec<String> = poll_reactions().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "👍",
                "👎",
                "<:DR4GYBOY:1248997833617707020>",
                "<a:Verification:1248969180481585344>"
            ]
        );
    }
}
