//! Supported Locales
//!
//! The site ships in English and Simplified Chinese. English is the fallback
//! for everything: routing, content lookup, and chat replies.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A UI locale supported by the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    ZhCn,
}

/// All locales, in routing order.
pub const ALL_LOCALES: [Locale; 2] = [Locale::En, Locale::ZhCn];

impl Locale {
    /// Wire/path form of the locale (`en`, `zh-CN`).
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-CN",
        }
    }

    /// Parse a locale tag. Unknown tags fall back to English rather than
    /// erroring; a bad `locale` field should never fail a request.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "zh-CN" => Locale::ZhCn,
            _ => Locale::En,
        }
    }

    /// Whether this locale renders the Chinese strings.
    pub fn is_zh(self) -> bool {
        matches!(self, Locale::ZhCn)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Locale::from_tag(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCn);
        assert_eq!(Locale::ZhCn.as_str(), "zh-CN");
    }

    #[test]
    fn test_unknown_tag_falls_back_to_english() {
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
        assert_eq!(Locale::from_tag("zh"), Locale::En);
    }

    #[test]
    fn test_serde_wire_form() {
        let json = serde_json::to_string(&Locale::ZhCn).unwrap();
        assert_eq!(json, "\"zh-CN\"");

        let parsed: Locale = serde_json::from_str("\"nope\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
