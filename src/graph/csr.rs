//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR is optimized for iteration over neighbors, which is exactly what
//! PageRank needs during power iteration.

use super::builder::GraphBuilder;
use crate::types::Lemma;
use rustc_hash::FxHashMap;

/// A graph in Compressed Sparse Row format
///
/// CSR stores edges contiguously, making iteration over neighbors very fast.
/// Node ids match the [`GraphBuilder`] ids (first-seen order), and each
/// node's edges are sorted by target id, so iteration order is deterministic.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Total outgoing weight for each node
    pub total_weight: Vec<f64>,
    /// Vertex key for each node
    pub lemmas: Vec<Lemma>,
    lemma_to_id: FxHashMap<Lemma, u32>,
}

impl CsrGraph {
    /// Convert a GraphBuilder into CSR format
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);
        let mut lemmas = Vec::with_capacity(num_nodes);
        let mut lemma_to_id =
            FxHashMap::with_capacity_and_hasher(num_nodes, Default::default());

        row_ptr.push(0);

        for (id, node) in builder.nodes() {
            lemmas.push(node.lemma.clone());
            lemma_to_id.insert(node.lemma.clone(), id);

            // Collect and sort edges for deterministic iteration
            let mut edges: Vec<_> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_by_key(|(k, _)| *k);

            total_weight.push(edges.iter().map(|(_, w)| w).sum());

            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
            lemmas,
            lemma_to_id,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the degree of a node
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    /// Get the total outgoing weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Whether a node has no edges
    pub fn is_isolated(&self, node: u32) -> bool {
        self.degree(node) == 0
    }

    /// Get the vertex key for a node
    pub fn lemma(&self, node: u32) -> &Lemma {
        &self.lemmas[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of edges (counting each undirected edge twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Get node ID by vertex key
    pub fn get_node_by_lemma(&self, lemma: &Lemma) -> Option<u32> {
        self.lemma_to_id.get(lemma).copied()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
            lemmas: Vec::new(),
            lemma_to_id: FxHashMap::default(),
        }
    }
}
