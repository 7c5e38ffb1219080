//! Distance-based sentence selection for summarization
//!
//! Picks the sentences closest to the top-ranked phrases. Sentences that
//! contain none of the top phrases are never selected.

use super::distance::SentenceDistance;

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
    /// Return selected sentences in document order instead of by distance
    pub preserve_order: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            num_sentences: 2,
            preserve_order: false,
        }
    }
}

/// Distance-based sentence selector
#[derive(Debug, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Set whether the selection is returned in document order
    pub fn with_preserve_order(mut self, preserve: bool) -> Self {
        self.config.preserve_order = preserve;
        self
    }

    /// Select the closest non-empty sentences
    ///
    /// Ties in distance go to the earlier sentence.
    pub fn select(
        &self,
        distances: impl IntoIterator<Item = SentenceDistance>,
    ) -> Vec<SentenceDistance> {
        let mut candidates: Vec<_> = distances.into_iter().filter(|d| !d.empty()).collect();

        candidates.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.sent_id.cmp(&b.sent_id))
        });
        candidates.truncate(self.config.num_sentences);

        if self.config.preserve_order {
            candidates.sort_by_key(|d| d.sent_id);
        }

        candidates
    }
}
