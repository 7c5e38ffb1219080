//! Personalized PageRank (PPR) algorithm
//!
//! PPR uses a custom restart distribution instead of uniform teleportation.
//! Without a personalization vector it is plain PageRank.
//!
//! Isolated vertices (no edges) are held at score 0: both the initial mass
//! and the restart distribution are spread over connected vertices only, so
//! connected scores always sum to 1.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;

/// Personalized PageRank implementation
#[derive(Debug, Clone)]
pub struct PersonalizedPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 delta between iterations
    pub threshold: f64,
    /// Personalization vector (restart weights, one per node)
    personalization: Option<Vec<f64>>,
}

impl Default for PersonalizedPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
            personalization: None,
        }
    }
}

impl PersonalizedPageRank {
    /// Create a new PersonalizedPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the personalization vector (restart distribution)
    ///
    /// The vector should have one entry per node; it is normalized
    /// internally. Missing entries count as 0.
    pub fn with_personalization(mut self, personalization: Vec<f64>) -> Self {
        self.personalization = Some(personalization);
        self
    }

    /// Run Personalized PageRank on a graph
    ///
    /// Hitting `max_iterations` is not an error: the last scores are
    /// returned with `converged = false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::empty();
        }

        let active: Vec<bool> = (0..n as u32).map(|v| !graph.is_isolated(v)).collect();
        let num_active = active.iter().filter(|&&a| a).count();
        if num_active == 0 {
            return PageRankResult::new(vec![0.0; n], 0, 0.0, true);
        }

        let restart = self.prepare_personalization(&active, num_active);

        // Initialize scores uniformly over connected vertices
        let initial_score = 1.0 / num_active as f64;
        let mut scores: Vec<f64> = active
            .iter()
            .map(|&a| if a { initial_score } else { 0.0 })
            .collect();
        let mut new_scores = vec![0.0; n];

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            for (new, &r) in new_scores.iter_mut().zip(restart.iter()) {
                *new = (1.0 - self.damping) * r;
            }

            // Propagate scores through edges
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        let contribution = self.damping * node_score * weight / total_weight;
                        new_scores[neighbor as usize] += contribution;
                    }
                }
            }

            // Calculate convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Normalize scores (they should already sum to ~1, but ensure numerical stability)
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, delta <= self.threshold)
    }

    /// Restrict the personalization to connected vertices and normalize it,
    /// falling back to uniform when nothing usable remains
    fn prepare_personalization(&self, active: &[bool], num_active: usize) -> Vec<f64> {
        let uniform = || {
            active
                .iter()
                .map(|&a| if a { 1.0 / num_active as f64 } else { 0.0 })
                .collect::<Vec<f64>>()
        };

        let Some(p) = &self.personalization else {
            return uniform();
        };

        let mut result: Vec<f64> = active
            .iter()
            .enumerate()
            .map(|(i, &a)| match p.get(i) {
                Some(&w) if a && w.is_finite() && w > 0.0 => w,
                _ => 0.0,
            })
            .collect();

        let sum: f64 = result.iter().sum();
        if sum > 0.0 {
            for v in &mut result {
                *v /= sum;
            }
            result
        } else {
            uniform()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;
    use crate::types::{Lemma, PosTag};

    fn build(nodes: &[&str], edges: &[(usize, usize, f64)]) -> CsrGraph {
        let mut builder = GraphBuilder::new();
        let ids: Vec<u32> = nodes
            .iter()
            .map(|l| builder.get_or_create_node(&Lemma::new(*l, PosTag::Noun)))
            .collect();
        for &(a, b, w) in edges {
            builder.increment_edge(ids[a], ids[b], w);
        }
        CsrGraph::from_builder(&builder)
    }

    fn build_triangle_graph() -> CsrGraph {
        build(&["a", "b", "c"], &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)])
    }

    fn build_star_graph() -> CsrGraph {
        // Hub connected to 3 spokes
        build(
            &["hub", "s1", "s2", "s3"],
            &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)],
        )
    }

    fn build_line_graph() -> CsrGraph {
        // A -- B -- C
        build(&["a", "b", "c"], &[(0, 1, 1.0), (1, 2, 1.0)])
    }

    #[test]
    fn test_triangle_graph_equal_scores() {
        let result = PersonalizedPageRank::new().run(&build_triangle_graph());

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let result = PersonalizedPageRank::new().run(&build_star_graph());

        assert!(result.converged);
        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        let graph = build_line_graph();
        let result = PersonalizedPageRank::new()
            .with_personalization(vec![5.0, 1.0, 3.0])
            .run(&graph);

        assert!((result.total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_graph() {
        let result = PersonalizedPageRank::new().run(&CsrGraph::default());

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_isolated_vertex_scores_zero() {
        let graph = build(&["a", "b", "lonely"], &[(0, 1, 1.0)]);
        let result = PersonalizedPageRank::new().run(&graph);

        assert_eq!(result.scores[2], 0.0);
        assert!((result.scores[0] + result.scores[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_edgeless_graph_all_zero() {
        let graph = build(&["a"], &[]);
        let result = PersonalizedPageRank::new().run(&graph);

        assert_eq!(result.scores, vec![0.0]);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let result = PersonalizedPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0) // Never converge
            .run(&build_star_graph());

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
        assert!((result.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_damping_factor() {
        let graph = build_star_graph();

        let result_low = PersonalizedPageRank::new().with_damping(0.5).run(&graph);
        let result_high = PersonalizedPageRank::new().with_damping(0.95).run(&graph);

        // With higher damping, hub advantage should be more pronounced
        let hub_advantage_low = result_low.scores[0] - result_low.scores[1];
        let hub_advantage_high = result_high.scores[0] - result_high.scores[1];

        assert!(hub_advantage_high > hub_advantage_low);
    }

    #[test]
    fn test_biased_personalization() {
        let graph = build_line_graph();

        let uniform = PersonalizedPageRank::new().run(&graph);
        let biased = PersonalizedPageRank::new()
            .with_personalization(vec![10.0, 1.0, 1.0])
            .run(&graph);

        // Symmetric ends tie without bias; the biased end wins with it
        assert!((uniform.scores[0] - uniform.scores[2]).abs() < 1e-9);
        assert!(biased.scores[0] > biased.scores[2]);
    }

    #[test]
    fn test_zero_personalization_falls_back_to_uniform() {
        let graph = build_line_graph();

        let uniform = PersonalizedPageRank::new().run(&graph);
        let zeroed = PersonalizedPageRank::new()
            .with_personalization(vec![0.0, 0.0, 0.0])
            .run(&graph);

        assert_eq!(uniform.scores, zeroed.scores);
    }

    #[test]
    fn test_deterministic() {
        let graph = build_star_graph();
        let pr = PersonalizedPageRank::new().with_personalization(vec![1.0, 2.0, 3.0, 4.0]);

        assert_eq!(pr.run(&graph), pr.run(&graph));
    }
}
