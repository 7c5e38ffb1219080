//! Restart-distribution strategies for personalized PageRank
//!
//! A [`PersonalizationStrategy`] turns the filtered token stream into an
//! optional restart weight per graph vertex. `None` means uniform restart
//! (plain PageRank). Strategies are passed to the ranker as trait objects,
//! so callers can plug in their own.

pub mod focus;
pub mod position;

pub use focus::FocusTerms;
pub use position::{accumulate_position_weights, PositionBiased};

use crate::graph::csr::CsrGraph;
use crate::types::{Lemma, PersonalizationKind, PositionKey, Token};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Computes restart weights over lemma graph vertices.
///
/// # Contract
///
/// - **Input**: the kept tokens in document order (the same stream the
///   graph is built from).
/// - **Output**: `None` for uniform restart, or a mapping from vertex key to
///   a non-negative weight. Returned weights should sum to 1 over their
///   support; an empty mapping is allowed and degrades to uniform.
pub trait PersonalizationStrategy: Send + Sync {
    /// Short, stable identifier (e.g. `"position_biased"`)
    fn name(&self) -> &str;

    /// Compute restart weights for the filtered token stream
    fn compute(&self, filtered: &[&Token]) -> Option<FxHashMap<Lemma, f64>>;
}

/// Unbiased strategy: uniform restart over all vertices
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl PersonalizationStrategy for Uniform {
    fn name(&self) -> &str {
        "uniform"
    }

    #[inline]
    fn compute(&self, _filtered: &[&Token]) -> Option<FxHashMap<Lemma, f64>> {
        None
    }
}

impl PersonalizationKind {
    /// Instantiate the configured strategy
    pub fn strategy(&self, position_key: PositionKey) -> Box<dyn PersonalizationStrategy> {
        match self {
            PersonalizationKind::Uniform => Box::new(Uniform),
            PersonalizationKind::PositionBiased => Box::new(PositionBiased::new(position_key)),
            PersonalizationKind::FocusTerms { terms, bias } => {
                Box::new(FocusTerms::new(terms.iter().map(String::as_str), *bias))
            }
        }
    }
}

/// Lay a vertex-keyed weight mapping out as a dense per-node vector
pub fn personalization_vector(graph: &CsrGraph, weights: &FxHashMap<Lemma, f64>) -> Vec<f64> {
    graph
        .lemmas
        .iter()
        .map(|lemma| weights.get(lemma).copied().unwrap_or(0.0))
        .collect()
}

/// Accumulate weights per group key in a single pass, keeping groups in
/// first-seen order
pub(crate) fn accumulate<K, I>(items: I) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut index: FxHashMap<K, usize> = FxHashMap::default();
    let mut groups: Vec<(K, f64)> = Vec::new();

    for (key, weight) in items {
        match index.get(&key) {
            Some(&i) => groups[i].1 += weight,
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, weight));
            }
        }
    }

    groups
}

/// Divide every weight by the total; an empty or zero-sum input yields an
/// empty vector
pub fn normalize_weights<K>(weights: Vec<(K, f64)>) -> Vec<(K, f64)> {
    let total: f64 = weights.iter().map(|(_, w)| w).sum();
    if !(total > 0.0) {
        return Vec::new();
    }
    weights.into_iter().map(|(k, w)| (k, w / total)).collect()
}
