//! Position-biased personalization (PositionRank)
//!
//! Each kept token at filtered-stream position `i` (0-based) contributes
//! `1 / (i + 1)`; repeated words sum their contributions. A word found at
//! the 2nd, 5th and 10th positions weighs `1/2 + 1/5 + 1/10 = 0.8` before
//! normalization.

use super::{accumulate, normalize_weights, PersonalizationStrategy};
use crate::types::{Lemma, PositionKey, Token};
use rustc_hash::FxHashMap;

/// Position-biased restart distribution
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionBiased {
    key: PositionKey,
}

impl PositionBiased {
    pub fn new(key: PositionKey) -> Self {
        Self { key }
    }

    /// Normalized weights per lemma text, ascending by weight
    pub fn lemma_weights(filtered: &[&Token]) -> Vec<(String, f64)> {
        normalize_weights(accumulate_position_weights(filtered))
    }
}

/// Inverse-position weight of each token in the filtered stream
fn positional<'a>(filtered: &'a [&'a Token]) -> impl Iterator<Item = (&'a Token, f64)> + 'a {
    filtered
        .iter()
        .enumerate()
        .map(|(i, &token)| (token, 1.0 / (i as f64 + 1.0)))
}

/// Sort groups by ascending weight; the stable sort keeps first-seen order
/// among equal weights
fn sort_ascending<K>(groups: &mut [(K, f64)]) {
    groups.sort_by(|a, b| a.1.total_cmp(&b.1));
}

/// Summed inverse-position weights per lemma text, before normalization,
/// sorted by ascending weight
pub fn accumulate_position_weights(filtered: &[&Token]) -> Vec<(String, f64)> {
    let mut groups = accumulate(positional(filtered).map(|(t, w)| (t.lemma.clone(), w)));
    sort_ascending(&mut groups);
    groups
}

impl PersonalizationStrategy for PositionBiased {
    fn name(&self) -> &str {
        "position_biased"
    }

    fn compute(&self, filtered: &[&Token]) -> Option<FxHashMap<Lemma, f64>> {
        let mut weighted_nodes = FxHashMap::default();

        match self.key {
            PositionKey::LemmaText => {
                let by_text: FxHashMap<String, f64> =
                    Self::lemma_weights(filtered).into_iter().collect();
                if by_text.is_empty() {
                    return Some(weighted_nodes);
                }

                // Every vertex sharing a lemma text receives that text's weight
                for token in filtered {
                    if let Some(&w) = by_text.get(&token.lemma) {
                        weighted_nodes.insert(token.lemma_key(), w);
                    }
                }
            }
            PositionKey::LemmaPos => {
                let mut groups =
                    accumulate(positional(filtered).map(|(t, w)| (t.lemma_key(), w)));
                sort_ascending(&mut groups);
                weighted_nodes.extend(normalize_weights(groups));
            }
        }

        Some(weighted_nodes)
    }
}
