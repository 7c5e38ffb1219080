//! Phrase extraction and ranking
//!
//! Candidate spans are grouped by their lemma sequence, scored from the
//! PageRank scores of their vertices, and sorted by descending rank.

use super::chunker::{chunk_key, chunk_lemma, chunk_text};
use crate::graph::csr::CsrGraph;
use crate::pagerank::PageRankResult;
use crate::types::{ChunkSpan, Document, Lemma, Phrase, ScoreAggregation};
use rustc_hash::FxHashMap;

/// Builds ranked phrases from candidate spans
#[derive(Debug, Clone, Default)]
pub struct PhraseExtractor {
    aggregation: ScoreAggregation,
}

impl PhraseExtractor {
    /// Create an extractor with the default (sum) aggregation
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score aggregation across a phrase's tokens
    pub fn with_aggregation(mut self, aggregation: ScoreAggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Extract ranked phrases
    ///
    /// - Spans with identical lemma sequences collapse into one phrase; the
    ///   rank and surface text come from the first occurrence.
    /// - Phrases are sorted by descending rank; equal ranks keep document
    ///   order of first occurrence.
    /// - Phrases whose normalized surface texts coincide are merged into the
    ///   higher-ranked one, so returned texts are pairwise distinct.
    pub fn extract(
        &self,
        doc: &Document,
        chunks: &[ChunkSpan],
        graph: &CsrGraph,
        pagerank: &PageRankResult,
    ) -> Vec<Phrase> {
        let tokens = doc.tokens();
        let mut index: FxHashMap<Vec<Lemma>, usize> = FxHashMap::default();
        let mut phrases: Vec<Phrase> = Vec::new();

        for chunk in chunks {
            let key = chunk_key(tokens, chunk);

            if let Some(&i) = index.get(&key) {
                phrases[i].count += 1;
                phrases[i].chunks.push(*chunk);
                continue;
            }

            let scores: Vec<f64> = key
                .iter()
                .map(|lemma| {
                    graph
                        .get_node_by_lemma(lemma)
                        .map_or(0.0, |id| pagerank.score(id))
                })
                .collect();

            index.insert(key.clone(), phrases.len());
            phrases.push(Phrase {
                text: chunk_text(tokens, chunk),
                lemma: chunk_lemma(tokens, chunk),
                rank: self.aggregation.aggregate(&scores),
                count: 1,
                chunks: vec![*chunk],
                key,
            });
        }

        // Stable: ties stay in first-occurrence order
        phrases.sort_by(|a, b| b.rank.total_cmp(&a.rank));

        merge_surface_duplicates(phrases)
    }
}

/// Lowercased, whitespace-collapsed surface text
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn merge_surface_duplicates(sorted: Vec<Phrase>) -> Vec<Phrase> {
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();
    let mut merged: Vec<Phrase> = Vec::with_capacity(sorted.len());

    for phrase in sorted {
        let norm = normalize_text(&phrase.text);
        match seen.get(&norm) {
            Some(&i) => {
                let target = &mut merged[i];
                target.count += phrase.count;
                target.chunks.extend(phrase.chunks);
                target.chunks.sort_by_key(|c| c.start_token);
            }
            None => {
                seen.insert(norm, merged.len());
                merged.push(phrase);
            }
        }
    }

    merged
}
