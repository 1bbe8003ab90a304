//! `!userinfo` text command
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;

use crate::commands::context::TextMessage;
use crate::core::embeds::branded_embed;
use crate::core::ReplyPayload;
use crate::platform::Platform;

pub const USER_NOT_FOUND: &str = "User not found in the guild.";

/// Describe the first mentioned user, or the author when nobody is mentioned.
///
/// Outside a guild there is no membership record, so the not-found reply applies.
pub async fn handle_userinfo(platform: &dyn Platform, msg: &TextMessage) -> Result<ReplyPayload> {
    let user = msg.mentions.first().unwrap_or(&msg.author);

    let member = match msg.guild_id {
        Some(guild_id) => platform.member(guild_id, user.id).await?,
        None => None,
    };
    let Some(member) = member else {
        return Ok(ReplyPayload::text(USER_NOT_FOUND));
    };

    let joined = member
        .joined_at
        .map(|at| format!("<t:{at}:F>"))
        .unwrap_or_else(|| "Unknown".to_string());

    let embed = branded_embed()
        .title("User Information <a:Discord:1250318533649371187>")
        .field("User:", user.mention(), true)
        .field("Member Id:", format!("`{}`", user.id), true)
        .field("Discord Tag:", format!("`{}`", user.tag()), true)
        .field("Top Role:", format!("<@&{}>", member.top_role_id), true)
        .field("Joined Server On:", joined, true)
        .thumbnail(&user.avatar_url);

    Ok(ReplyPayload::embed(embed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handlers::test_support::{member, text_message, user, GUILD};
    use crate::platform::mock::{Call, MockPlatform};
    use crate::platform::{Eligibility, MemberInfo};

    #[tokio::test]
    async fn test_userinfo_defaults_to_author() {
        let mut record = member(100, Eligibility::default());
        record.top_role_id = 55;
        record.joined_at = Some(1_700_000_000);
        let mock = MockPlatform::new().with_member(GUILD, record);

        let reply = handle_userinfo(&mock, &text_message("!userinfo", vec![]))
            .await
            .unwrap();

        assert_eq!(mock.calls(), vec![Call::Member(GUILD, 100)]);
        let embed = reply.embed.unwrap();
        let values: Vec<(&str, &str)> = embed
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect();
        assert_eq!(
            values,
            vec![
                ("User:", "<@100>"),
                ("Member Id:", "`100`"),
                ("Discord Tag:", "`user100`"),
                ("Top Role:", "<@&55>"),
                ("Joined Server On:", "<t:1700000000:F>"),
            ]
        );
        assert!(embed.fields.iter().all(|f| f.inline));
        assert_eq!(embed.thumbnail, Some(user(100).avatar_url));
    }

    #[tokio::test]
    async fn test_userinfo_uses_first_mention() {
        let mock = MockPlatform::new().with_member(
            GUILD,
            MemberInfo {
                joined_at: None,
                ..member(200, Eligibility::default())
            },
        );
        let reply = handle_userinfo(
            &mock,
            &text_message("!userinfo <@200> <@300>", vec![user(200), user(300)]),
        )
        .await
        .unwrap();

        assert_eq!(mock.calls(), vec![Call::Member(GUILD, 200)]);
        let embed = reply.embed.unwrap();
        assert_eq!(embed.fields[4].value, "Unknown");
    }

    #[tokio::test]
    async fn test_userinfo_non_member_gets_text_reply() {
        let mock = MockPlatform::new();
        let reply = handle_userinfo(&mock, &text_message("!userinfo <@200>", vec![user(200)]))
            .await
            .unwrap();
        assert_eq!(reply.content.as_deref(), Some(USER_NOT_FOUND));
        assert!(reply.embed.is_none());
    }

    #[tokio::test]
    async fn test_userinfo_in_dm_is_not_found() {
        let mock = MockPlatform::new();
        let mut msg = text_message("!userinfo", vec![]);
        msg.guild_id = None;
        let reply = handle_userinfo(&mock, &msg).await.unwrap();
        assert_eq!(reply.content.as_deref(), Some(USER_NOT_FOUND));
        assert!(mock.calls().is_empty());
    }
}
