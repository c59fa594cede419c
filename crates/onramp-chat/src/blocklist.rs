//! Investment-Advice Blocklist
//!
//! Trading and price-prediction phrasing, English and Chinese, matched
//! case-insensitively. A hit here always wins over content search.

use std::sync::OnceLock;

use regex::Regex;

const BLOCKED_PATTERN: &str = r"(?i)买入|卖出|抄底|投资建议|should\s*i\s*buy|when\s*to\s*buy|buy\s*now|sell\s*now|price\s*predict|should\s*i\s*invest|预测|点位|涨到|跌到|all\s*in|逃顶|合约|杠杆|leverage|pump|dump";

static BLOCKED: OnceLock<Regex> = OnceLock::new();

fn blocked() -> &'static Regex {
    BLOCKED.get_or_init(|| Regex::new(BLOCKED_PATTERN).expect("blocklist pattern is valid"))
}

/// Whether a message asks for investment advice.
pub fn is_blocked(message: &str) -> bool {
    blocked().is_match(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_phrases() {
        assert!(is_blocked("should I buy SOL today?"));
        assert!(is_blocked("Should   i   BUY now"));
        assert!(is_blocked("is this a pump or a dump"));
        assert!(is_blocked("how much leverage can I use"));
        assert!(is_blocked("price prediction for 2027"));
    }

    #[test]
    fn test_chinese_phrases() {
        assert!(is_blocked("现在可以抄底吗"));
        assert!(is_blocked("给点投资建议"));
        assert!(is_blocked("SOL 会涨到多少"));
        assert!(is_blocked("开合约怎么玩"));
    }

    #[test]
    fn test_ordinary_questions_pass() {
        assert!(!is_blocked("what is a wallet?"));
        assert!(!is_blocked("how do I stake SOL safely"));
        assert!(!is_blocked("什么是区块链"));
    }
}
