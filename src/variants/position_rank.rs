//! PositionRank variant
//!
//! PositionRank biases PageRank towards words that appear earlier in the document.
//! The intuition is that important keywords often appear early (title, introduction).
//!
//! Bias formula: weight = sum of 1 / (i + 1) over every position `i` of the
//! word in the kept token stream.

use super::Variant;
use crate::textrank::TextRank;
use crate::types::{Document, Phrase, PositionKey, TextRankConfig};

/// PositionRank implementation
#[derive(Debug, Clone)]
pub struct PositionRank {
    ranker: TextRank,
}

impl Default for PositionRank {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionRank {
    /// Create a new PositionRank extractor with default config
    pub fn new() -> Self {
        Self::with_config(TextRankConfig::default())
    }

    /// Create with custom config; the personalization setting is overridden
    pub fn with_config(config: TextRankConfig) -> Self {
        let config = config.with_personalization(Variant::PositionRank.personalization());
        Self {
            ranker: TextRank::with_config(config),
        }
    }

    /// Group position weights by `(lemma, pos)` instead of lemma text
    pub fn with_position_key(self, key: PositionKey) -> Self {
        Self::with_config(self.ranker.config().clone().with_position_key(key))
    }

    /// The underlying ranker
    pub fn ranker(&self) -> &TextRank {
        &self.ranker
    }

    /// Extract keyphrases using PositionRank
    pub fn extract(&self, doc: &Document) -> Vec<Phrase> {
        self.ranker.rank(doc).phrases().to_vec()
    }
}

/// Convenience function to extract keyphrases using PositionRank
pub fn extract_keyphrases_position(doc: &Document, config: &TextRankConfig) -> Vec<Phrase> {
    PositionRank::with_config(config.clone()).extract(doc)
}
