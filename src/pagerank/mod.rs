//! PageRank algorithms
//!
//! This module provides the (personalized) PageRank power iteration used
//! to score lemma graph vertices.

pub mod personalized;

/// Result of a PageRank computation
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Result for a graph with no vertices
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 0.0, true)
    }

    /// Get top N nodes by score, ties broken by node ID
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }
}
