//! Community-branded embed builders
//!
//! Shared author/footer branding for the poll and userinfo embeds.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use chrono::Utc;

use crate::core::reply::EmbedSpec;

pub const BRAND_NAME: &str = "DR4GY BOY";
pub const BRAND_LOGO_URL: &str = "https://media.discordapp.net/attachments/1254025245950611587/1254027232075055235/Image_142.jpeg?ex=66d1a55e&is=66d053de&hm=d4457cc35462cf615bfc73ec2873d8ed80d37ad3025cb5678334e065a7fe516e&=&format=webp&width=473&height=473";
pub const BRAND_FOOTER: &str = "DR4GY BOY Community | © Copyright All Right Reserved 2024";
/// Gold accent used by branded embeds
pub const BRAND_COLOR: u32 = 0xFFCC00;
/// Teal accent used by the plain info embeds
pub const INFO_COLOR: u32 = 0x00AE86;

/// Build a branded embed: logo author, gold accent, footer, current timestamp.
///
/// Callers chain title, description, thumbnail and fields onto the result.
pub fn branded_embed() -> EmbedSpec {
    EmbedSpec::new()
        .author(BRAND_NAME, Some(BRAND_LOGO_URL))
        .color(BRAND_COLOR)
        .footer(BRAND_FOOTER, Some(BRAND_LOGO_URL))
        .timestamp(Utc::now())
}

/// Build a plain info embed with title and description.
pub fn info_embed(title: impl Into<String>, description: impl AsRef<str>) -> EmbedSpec {
    EmbedSpec::new()
        .title(title)
        .description(description)
        .color(INFO_COLOR)
}
