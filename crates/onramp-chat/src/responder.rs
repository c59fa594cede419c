//! Chat Responder
//!
//! Assembles the reply for a chat message: safety text for blocked
//! messages, scored search hits otherwise, a course recommendation when
//! nothing matches.

use onramp_content::{ContentKind, SearchIndex};
use onramp_core::Locale;
use serde::{Deserialize, Serialize};

use crate::blocklist::is_blocked;

/// Reply shape, also the wire `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatReplyKind {
    Blocked,
    Results,
    Fallback,
}

/// A content link the widget renders under the reply text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLink {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub slug: String,
    pub title: String,
}

/// A complete chat reply, serialization-ready.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(rename = "type")]
    pub kind: ChatReplyKind,
    pub message: String,
    pub links: Vec<ChatLink>,
}

/// Keyword-matching responder over the content search index.
#[derive(Clone, Debug)]
pub struct ChatResponder {
    index: SearchIndex,
}

impl Default for ChatResponder {
    fn default() -> Self {
        Self::new(SearchIndex::builtin())
    }
}

impl ChatResponder {
    pub fn new(index: SearchIndex) -> Self {
        Self { index }
    }

    /// Build the reply for a message. The blocklist is checked first and
    /// always wins; search results never override a safety interception.
    pub fn respond(&self, message: &str, locale: Locale) -> ChatReply {
        if is_blocked(message) {
            return ChatReply {
                kind: ChatReplyKind::Blocked,
                message: if locale.is_zh() {
                    "我无法提供投资建议。请查阅 /security 了解风险。".into()
                } else {
                    "I cannot provide investment advice. Please visit /security to learn about risks.".into()
                },
                links: vec![intro_link(locale)],
            };
        }

        let results = self.index.search(message, locale);
        if !results.is_empty() {
            return ChatReply {
                kind: ChatReplyKind::Results,
                message: if locale.is_zh() {
                    "我找到了以下相关内容，希望对你有帮助：".into()
                } else {
                    "I found some relevant content that might help:".into()
                },
                links: results
                    .into_iter()
                    .map(|entry| ChatLink {
                        kind: entry.kind,
                        slug: entry.slug.clone(),
                        title: entry.title(locale).to_string(),
                    })
                    .collect(),
            };
        }

        ChatReply {
            kind: ChatReplyKind::Fallback,
            message: if locale.is_zh() {
                "暂未找到相关内容。你可以尝试浏览我们的课程或术语表，或者在提问广场提交你的问题。".into()
            } else {
                "I couldn't find specific content for that. Try browsing our Course or Glossary, or submit your question in the Ask page.".into()
            },
            links: vec![intro_link(locale)],
        }
    }
}

/// The first lesson, recommended on blocked and fallback replies.
fn intro_link(locale: Locale) -> ChatLink {
    ChatLink {
        kind: ContentKind::Course,
        slug: "lesson-1".into(),
        title: if locale.is_zh() {
            "什么是 Solana？".into()
        } else {
            "What Is Solana?".into()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_wins_over_search_results() {
        let responder = ChatResponder::default();
        // "solana" alone would score search hits, but the blocklist phrase
        // must still intercept the message.
        let reply = responder.respond("should I buy solana now?", Locale::En);
        assert_eq!(reply.kind, ChatReplyKind::Blocked);
        assert_eq!(reply.links.len(), 1);
        assert_eq!(reply.links[0].slug, "lesson-1");
    }

    #[test]
    fn test_results_reply_links_matches() {
        let responder = ChatResponder::default();
        let reply = responder.respond("what is solana", Locale::En);
        assert_eq!(reply.kind, ChatReplyKind::Results);
        assert!(!reply.links.is_empty());
        assert!(reply.links.len() <= 3);
    }

    #[test]
    fn test_fallback_recommends_the_course() {
        let responder = ChatResponder::default();
        let reply = responder.respond("weather tomorrow", Locale::En);
        assert_eq!(reply.kind, ChatReplyKind::Fallback);
        assert_eq!(reply.links[0].kind, ContentKind::Course);
        assert_eq!(reply.links[0].slug, "lesson-1");
    }

    #[test]
    fn test_locale_selects_reply_language() {
        let responder = ChatResponder::default();
        let reply = responder.respond("现在抄底行吗", Locale::ZhCn);
        assert_eq!(reply.kind, ChatReplyKind::Blocked);
        assert!(reply.message.contains("投资建议"));
        assert_eq!(reply.links[0].title, "什么是 Solana？");
    }

    #[test]
    fn test_wire_shape_uses_type_field() {
        let responder = ChatResponder::default();
        let reply = responder.respond("staking", Locale::En);
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["type"], "results");
        assert_eq!(json["links"][0]["type"], "glossary");
    }
}
