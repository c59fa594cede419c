//! # onramp-chat
//!
//! The "chat" behind the site's chat widget. There is no model behind it:
//! an incoming message is first checked against an investment-advice
//! blocklist, and only if it passes is it scored against the content search
//! index. The reply is one of three shapes — `blocked`, `results`, or
//! `fallback` — each with content links the widget renders as buttons.

pub mod blocklist;
pub mod responder;

pub use blocklist::is_blocked;
pub use responder::{ChatLink, ChatReply, ChatReplyKind, ChatResponder};
