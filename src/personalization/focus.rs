//! Focus-term personalization (BiasedTextRank)
//!
//! Vertices whose lemma matches a focus term restart with weight `bias`,
//! every other vertex with weight 1.0, normalized over the vertices present.

use super::PersonalizationStrategy;
use crate::types::{Lemma, Token};
use rustc_hash::{FxHashMap, FxHashSet};

/// Focus-term biased restart distribution
#[derive(Debug, Clone)]
pub struct FocusTerms {
    /// Focus lemmas (lowercase)
    terms: FxHashSet<String>,
    /// Restart weight for focus vertices
    bias: f64,
}

impl FocusTerms {
    pub fn new<'a>(terms: impl IntoIterator<Item = &'a str>, bias: f64) -> Self {
        Self {
            terms: terms.into_iter().map(str::to_lowercase).collect(),
            bias,
        }
    }

    fn is_focus(&self, token: &Token) -> bool {
        self.terms.contains(&token.lemma.to_lowercase())
    }
}

impl PersonalizationStrategy for FocusTerms {
    fn name(&self) -> &str {
        "focus_terms"
    }

    fn compute(&self, filtered: &[&Token]) -> Option<FxHashMap<Lemma, f64>> {
        let mut weights: FxHashMap<Lemma, f64> = FxHashMap::default();
        for token in filtered {
            let w = if self.is_focus(token) { self.bias } else { 1.0 };
            weights.insert(token.lemma_key(), w);
        }

        let total: f64 = weights.values().sum();
        if total > 0.0 {
            for w in weights.values_mut() {
                *w /= total;
            }
        }

        Some(weights)
    }
}
