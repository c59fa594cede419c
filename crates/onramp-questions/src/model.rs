//! Question Models

use chrono::{DateTime, Utc};
use onramp_core::Locale;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored community question. Created once via the ask form, read by the
/// community page, never updated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub wallet_type: String,
    pub goal: String,
    pub stuck_point: String,
    pub locale: Locale,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new question. Fields arrive pre-sanitized from the
/// ask endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewQuestion {
    pub wallet_type: String,
    pub goal: String,
    pub stuck_point: String,
    pub locale: Locale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_round_trips() {
        let json = r#"{
            "id": "7f4df2a9-5f0e-4d63-a1fb-0f2a6f0f3a10",
            "wallet_type": "phantom",
            "goal": "buy my first SOL",
            "stuck_point": "bridging from an exchange",
            "locale": "zh-CN",
            "created_at": "2026-01-15T09:30:00Z"
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.wallet_type, "phantom");
        assert_eq!(q.locale, Locale::ZhCn);

        let back = serde_json::to_string(&q).unwrap();
        assert!(back.contains("\"zh-CN\""));
    }

    #[test]
    fn test_new_question_wire_shape() {
        let new = NewQuestion {
            wallet_type: "solflare".into(),
            goal: "stake SOL".into(),
            stuck_point: "choosing a validator".into(),
            locale: Locale::En,
        };
        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(json["wallet_type"], "solflare");
        assert_eq!(json["locale"], "en");
        assert!(json.get("id").is_none());
    }
}
