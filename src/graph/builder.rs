//! Graph builder with efficient edge handling
//!
//! This module provides a mutable graph builder that uses FxHashMap
//! for O(1) vertex and edge lookups during construction. Vertices are
//! `(lemma, pos)` pairs stored in an arena and addressed by `u32` ids.

use crate::types::{Lemma, Token};
use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The vertex key for this node
    pub lemma: Lemma,
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

impl BuilderNode {
    /// Create a new node
    pub fn new(lemma: Lemma) -> Self {
        Self {
            lemma,
            edges: FxHashMap::default(),
        }
    }
}

/// A mutable graph builder optimized for incremental construction
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Maps vertex key -> node ID
    lemma_to_id: FxHashMap<Lemma, u32>,
    /// Node storage, in first-seen order
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            lemma_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given vertex key, returning its ID
    pub fn get_or_create_node(&mut self, lemma: &Lemma) -> u32 {
        if let Some(&id) = self.lemma_to_id.get(lemma) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.lemma_to_id.insert(lemma.clone(), id);
        self.nodes.push(BuilderNode::new(lemma.clone()));
        id
    }

    /// Increment the edge weight between two nodes
    ///
    /// If the edge doesn't exist, it's created with the given weight.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to {
            return; // No self-loops
        }

        // Add edge in both directions (undirected graph)
        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0.0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0.0) += weight;
        }
    }

    /// Build a graph from the filtered token stream using a sliding window
    ///
    /// `tokens` must already exclude non-content tokens: the window runs over
    /// filtered positions, so content words separated by function words are
    /// still linked when they fall within `window_size` after filtering.
    /// Every token gets a vertex, even one that ends up without edges.
    pub fn from_tokens(tokens: &[&Token], window_size: usize) -> Self {
        let mut builder = Self::with_capacity(tokens.len() / 2);

        for j in 0..tokens.len() {
            let node_j = builder.get_or_create_node(&tokens[j].lemma_key());

            // Window extends forward
            for k in (j + 1)..std::cmp::min(j + window_size, tokens.len()) {
                let node_k = builder.get_or_create_node(&tokens[k].lemma_key());
                builder.increment_edge(node_j, node_k, 1.0);
            }
        }

        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by vertex key
    pub fn get_node_id(&self, lemma: &Lemma) -> Option<u32> {
        self.lemma_to_id.get(lemma).copied()
    }

    /// Weight of the edge between two nodes (0.0 if absent)
    pub fn edge_weight(&self, a: u32, b: u32) -> f64 {
        self.get_node(a)
            .and_then(|n| n.edges.get(&b))
            .copied()
            .unwrap_or(0.0)
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
