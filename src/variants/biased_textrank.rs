//! BiasedTextRank variant
//!
//! Restarts the random walk preferentially at focus terms, pulling the
//! ranking towards a topic of interest.

use super::{Variant, DEFAULT_FOCUS_BIAS};
use crate::textrank::TextRank;
use crate::types::{Document, PersonalizationKind, Phrase, TextRankConfig};

/// BiasedTextRank implementation
#[derive(Debug, Clone)]
pub struct BiasedTextRank {
    ranker: TextRank,
}

impl Default for BiasedTextRank {
    fn default() -> Self {
        Self::new()
    }
}

impl BiasedTextRank {
    /// Create with no focus terms
    pub fn new() -> Self {
        Self::with_config(TextRankConfig::default())
    }

    /// Create with custom config
    ///
    /// A config that already carries focus terms keeps them; any other
    /// personalization setting is replaced.
    pub fn with_config(config: TextRankConfig) -> Self {
        let config = match config.personalization {
            PersonalizationKind::FocusTerms { .. } => config,
            _ => config.with_personalization(Variant::BiasedTextRank.personalization()),
        };
        Self {
            ranker: TextRank::with_config(config),
        }
    }

    /// Set the focus terms (lemmas, case-insensitive)
    pub fn with_focus<S: AsRef<str>>(self, terms: &[S]) -> Self {
        let bias = self.bias();
        self.rebuild(terms.iter().map(|t| t.as_ref().to_string()).collect(), bias)
    }

    /// Set the restart weight for focus terms
    pub fn with_bias(self, bias: f64) -> Self {
        let terms = self.terms().to_vec();
        self.rebuild(terms, bias)
    }

    /// Current focus terms
    pub fn terms(&self) -> &[String] {
        match &self.ranker.config().personalization {
            PersonalizationKind::FocusTerms { terms, .. } => terms.as_slice(),
            _ => &[],
        }
    }

    /// Current focus bias
    pub fn bias(&self) -> f64 {
        match &self.ranker.config().personalization {
            PersonalizationKind::FocusTerms { bias, .. } => *bias,
            _ => DEFAULT_FOCUS_BIAS,
        }
    }

    /// The underlying ranker
    pub fn ranker(&self) -> &TextRank {
        &self.ranker
    }

    /// Extract keyphrases using BiasedTextRank
    pub fn extract(&self, doc: &Document) -> Vec<Phrase> {
        self.ranker.rank(doc).phrases().to_vec()
    }

    fn rebuild(self, terms: Vec<String>, bias: f64) -> Self {
        let config = self
            .ranker
            .config()
            .clone()
            .with_personalization(PersonalizationKind::FocusTerms { terms, bias });
        Self {
            ranker: TextRank::with_config(config),
        }
    }
}
