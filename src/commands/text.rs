//! # Text Commands
//!
//! Prefix-triggered replies to ordinary channel messages.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: `!userinfo` and `/Hello` prefixes

use anyhow::Result;
use log::{debug, error, info};
use uuid::Uuid;

use super::context::TextMessage;
use super::handlers::{greeting, userinfo};
use super::router::{deliver, send_failure_reply, Dispatch};
use crate::core::ReplyPayload;
use crate::platform::Platform;

/// A prefix the bot answers in ordinary messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCommand {
    UserInfo,
    Hello,
}

impl TextCommand {
    /// Evaluation order; every matching prefix runs
    pub const ALL: [TextCommand; 2] = [TextCommand::UserInfo, TextCommand::Hello];

    pub fn prefix(&self) -> &'static str {
        match self {
            TextCommand::UserInfo => "!userinfo",
            TextCommand::Hello => "/Hello",
        }
    }

    /// Case-sensitive prefix match
    pub fn matches(&self, content: &str) -> bool {
        content.starts_with(self.prefix())
    }
}

/// Routes channel messages to the text command handlers
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRouter;

impl TextRouter {
    pub fn new() -> Self {
        Self
    }

    /// Run every text command whose prefix matches, one reply each
    pub async fn dispatch(&self, platform: &dyn Platform, msg: &TextMessage) -> Vec<Dispatch> {
        if msg.author_is_bot {
            return Vec::new();
        }

        let mut outcomes = Vec::new();
        for command in TextCommand::ALL {
            if !command.matches(&msg.content) {
                continue;
            }

            let request_id = Uuid::new_v4();
            info!(
                "[{request_id}] 🎯 Processing text command: {} | User: {} | Channel: {}",
                command.prefix(),
                msg.author.id,
                msg.channel_id
            );

            let outcome = match run(platform, command, msg).await {
                Ok(payload) => deliver(platform, &payload, request_id).await,
                Err(e) => {
                    error!("[{request_id}] ❌ {} failed: {e:#}", command.prefix());
                    send_failure_reply(platform, request_id).await;
                    Dispatch::Failed
                }
            };
            outcomes.push(outcome);
        }

        if outcomes.is_empty() {
            debug!(
                "No text command in message from {} (channel {})",
                msg.author.id, msg.channel_id
            );
        }
        outcomes
    }
}

async fn run(platform: &dyn Platform, command: TextCommand, msg: &TextMessage) -> Result<ReplyPayload> {
    match command {
        TextCommand::UserInfo => userinfo::handle_userinfo(platform, msg).await,
        TextCommand::Hello => Ok(greeting::handle_hello(msg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handlers::test_support::{member, text_message, user, GUILD};
    use crate::commands::handlers::userinfo::USER_NOT_FOUND;
    use crate::commands::router::COMMAND_FAILURE_REPLY;
    use crate::platform::mock::{Call, MockPlatform};
    use crate::platform::Eligibility;

    #[test]
    fn test_prefix_matching() {
        assert!(TextCommand::UserInfo.matches("!userinfo"));
        assert!(TextCommand::UserInfo.matches("!userinfo <@1>"));
        assert!(!TextCommand::UserInfo.matches(" !userinfo"));
        assert!(TextCommand::Hello.matches("/Hello world"));
        assert!(!TextCommand::Hello.matches("/hello"));
    }

    #[tokio::test]
    async fn test_hello_replies() {
        let mock = MockPlatform::new();
        let outcomes = TextRouter::new()
            .dispatch(&mock, &text_message("/Hello", vec![]))
            .await;

        assert_eq!(outcomes, vec![Dispatch::Replied]);
        assert_eq!(
            mock.replies(),
            vec![ReplyPayload::text("> <@100> Hello Homie!")]
        );
    }

    #[tokio::test]
    async fn test_plain_message_is_ignored() {
        let mock = MockPlatform::new();
        let outcomes = TextRouter::new()
            .dispatch(&mock, &text_message("hello everyone", vec![]))
            .await;
        assert!(outcomes.is_empty());
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_bot_messages_are_ignored() {
        let mock = MockPlatform::new();
        let mut msg = text_message("/Hello", vec![]);
        msg.author_is_bot = true;
        assert!(TextRouter::new().dispatch(&mock, &msg).await.is_empty());
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_userinfo_mentioned_non_member() {
        let mock = MockPlatform::new().with_member(GUILD, member(100, Eligibility::default()));
        TextRouter::new()
            .dispatch(&mock, &text_message("!userinfo <@300>", vec![user(300)]))
            .await;

        assert_eq!(
            mock.calls(),
            vec![
                Call::Member(GUILD, 300),
                Call::Reply(ReplyPayload::text(USER_NOT_FOUND))
            ]
        );
    }

    #[tokio::test]
    async fn test_send_failure_sends_generic_text() {
        let mock = MockPlatform::new().with_failing_replies(1);
        let outcomes = TextRouter::new()
            .dispatch(&mock, &text_message("/Hello", vec![]))
            .await;

        assert_eq!(outcomes, vec![Dispatch::Failed]);
        assert_eq!(
            mock.replies().last(),
            Some(&ReplyPayload::text(COMMAND_FAILURE_REPLY))
        );
    }
}
