//! Keyword Content Search
//!
//! A small in-memory index the chat endpoint scores against. Entries carry
//! bilingual titles/descriptions plus a keyword bag; scoring is a linear
//! scan with per-term weights. The built-in index mirrors the published
//! content set.

use onramp_core::Locale;
use serde::{Deserialize, Serialize};

use crate::model::ContentKind;

/// Weight for a hit in the locale's own title.
const TITLE_WEIGHT: u32 = 10;
/// Weight for a hit in the keyword bag.
const KEYWORD_WEIGHT: u32 = 5;
/// Weight for a hit anywhere in the entry.
const ANY_FIELD_WEIGHT: u32 = 2;

/// How many results the chat endpoint links at most.
pub const MAX_RESULTS: usize = 3;

/// One searchable document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchEntry {
    pub kind: ContentKind,
    pub slug: String,
    pub title_en: String,
    pub title_zh: String,
    pub desc_en: String,
    pub desc_zh: String,
    /// Space-separated lowercase keywords, English and Chinese mixed.
    pub keywords: String,
}

impl SearchEntry {
    /// Title in the given locale.
    pub fn title(&self, locale: Locale) -> &str {
        if locale.is_zh() { &self.title_zh } else { &self.title_en }
    }

    fn searchable(&self) -> String {
        [
            self.title_en.as_str(),
            self.title_zh.as_str(),
            self.desc_en.as_str(),
            self.desc_zh.as_str(),
            self.keywords.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// The fixed in-memory search index.
#[derive(Clone, Debug, Default)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    /// Build an index over the given entries. Tests and future build scripts
    /// inject their own; the server uses [`SearchIndex::builtin`].
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    /// Index matching the published content set.
    pub fn builtin() -> Self {
        Self::new(vec![
            SearchEntry {
                kind: ContentKind::Course,
                slug: "lesson-1".into(),
                title_en: "What Is Solana?".into(),
                title_zh: "什么是 Solana？".into(),
                desc_en: "Your first step into the Solana ecosystem. Learn what makes Solana unique.".into(),
                desc_zh: "踏入 Solana 生态的第一步。了解 Solana 的独特之处。".into(),
                keywords: "solana blockchain speed cost energy fast cheap transaction nft dapp wallet 区块链 速度 成本 交易".into(),
            },
            SearchEntry {
                kind: ContentKind::Glossary,
                slug: "solana".into(),
                title_en: "Solana".into(),
                title_zh: "Solana".into(),
                desc_en: "A high-performance blockchain platform for fast, low-cost transactions.".into(),
                desc_zh: "一个高性能区块链平台，专为快速低成本交易而设计。".into(),
                keywords: "solana sol token proof of history poh smart contract validator staking 验证者 质押 智能合约".into(),
            },
        ])
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Score every entry against a whitespace-split query and return the top
    /// matches, best first. Zero-score entries are dropped; ties keep index
    /// order.
    pub fn search(&self, query: &str, locale: Locale) -> Vec<&SearchEntry> {
        let query = query.to_lowercase();
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(u32, &SearchEntry)> = self
            .entries
            .iter()
            .map(|entry| {
                let searchable = entry.searchable();
                let title = entry.title(locale).to_lowercase();
                let mut score = 0;
                for term in &terms {
                    if title.contains(term) {
                        score += TITLE_WEIGHT;
                    }
                    if entry.keywords.contains(term) {
                        score += KEYWORD_WEIGHT;
                    }
                    if searchable.contains(term) {
                        score += ANY_FIELD_WEIGHT;
                    }
                }
                (score, entry)
            })
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().take(MAX_RESULTS).map(|(_, e)| e).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_match_outranks_keyword_match() {
        let index = SearchIndex::builtin();
        // "solana" hits both entries; the glossary entry's title is the
        // exact term, but both titles contain it, so both surface.
        let results = index.search("solana", Locale::En);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_keyword_only_match() {
        let index = SearchIndex::builtin();
        let results = index.search("staking", Locale::En);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slug, "solana");
    }

    #[test]
    fn test_chinese_keywords() {
        let index = SearchIndex::builtin();
        let results = index.search("质押", Locale::ZhCn);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slug, "solana");
    }

    #[test]
    fn test_no_match_is_empty() {
        let index = SearchIndex::builtin();
        assert!(index.search("polkadot parachain", Locale::En).is_empty());
    }

    #[test]
    fn test_blank_query_is_empty() {
        let index = SearchIndex::builtin();
        assert!(index.search("   ", Locale::En).is_empty());
        assert!(index.search("", Locale::En).is_empty());
    }

    #[test]
    fn test_caps_at_three_results() {
        let entry = |slug: &str, kw: &str| SearchEntry {
            kind: ContentKind::Glossary,
            slug: slug.into(),
            title_en: slug.into(),
            title_zh: slug.into(),
            desc_en: String::new(),
            desc_zh: String::new(),
            keywords: kw.into(),
        };
        let index = SearchIndex::new(vec![
            entry("a", "wallet"),
            entry("b", "wallet"),
            entry("c", "wallet"),
            entry("d", "wallet"),
        ]);
        let results = index.search("wallet", Locale::En);
        assert_eq!(results.len(), MAX_RESULTS);
        // Stable ordering keeps the earlier entries on ties.
        assert_eq!(results[0].slug, "a");
    }
}
