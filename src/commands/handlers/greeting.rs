//! `/Hello` text greeting

use crate::commands::context::TextMessage;
use crate::core::ReplyPayload;

pub fn handle_hello(msg: &TextMessage) -> ReplyPayload {
    ReplyPayload::text(format!("> {} Hello Homie!", msg.author.mention()))
}
