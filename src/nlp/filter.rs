//! Content-word selection
//!
//! A token is kept when its POS tag is in the configured kept set and its
//! lemma is not a stopword. Kept tokens feed both the graph window and
//! phrase runs.

use super::stopwords::StopwordFilter;
use crate::types::{Document, PosTag, TextRankConfig, Token};
use rustc_hash::FxHashSet;

/// Decides which tokens are content words
#[derive(Debug, Clone)]
pub struct TokenFilter {
    pos_kept: FxHashSet<PosTag>,
    stopwords: StopwordFilter,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::from_config(&TextRankConfig::default())
    }
}

impl TokenFilter {
    /// Create a filter from kept tags, with no stopwords
    pub fn new(pos_kept: impl IntoIterator<Item = PosTag>) -> Self {
        Self {
            pos_kept: pos_kept.into_iter().collect(),
            stopwords: StopwordFilter::empty(),
        }
    }

    /// Create a filter from a configuration
    pub fn from_config(config: &TextRankConfig) -> Self {
        Self {
            pos_kept: config.pos_kept.iter().copied().collect(),
            stopwords: StopwordFilter::from_config(config.language.as_deref(), &config.stopwords),
        }
    }

    /// Replace the stopword list
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Check whether a token is a content word
    pub fn keeps(&self, token: &Token) -> bool {
        self.pos_kept.contains(&token.pos) && !self.stopwords.is_stopword(&token.lemma)
    }

    /// The filtered token stream, in document order
    pub fn filter<'a>(&self, doc: &'a Document) -> Vec<&'a Token> {
        doc.tokens().iter().filter(|t| self.keeps(t)).collect()
    }
}
