//! # lemma_textrank
//!
//! Graph-based keyphrase ranking and extractive summarization over
//! documents that are already tokenized, lemmatized, POS-tagged and split
//! into sentences.
//!
//! Content words become vertices keyed by `(lemma, pos)`, co-occurrence
//! within a sliding window becomes weighted edges, and (personalized)
//! PageRank scores the vertices. Maximal runs of content words are ranked
//! as phrases, and sentences are scored by their distance to the top
//! phrases.
//!
//! ```no_run
//! use lemma_textrank::{Document, PosTag, TextRank, Token};
//!
//! let doc = Document::new(vec![vec![
//!     Token::new("Graph", "graph", PosTag::Noun, 0, 0),
//!     Token::new("ranking", "ranking", PosTag::Noun, 0, 1),
//! ]]);
//! let ranked = TextRank::new().rank(&doc);
//! for phrase in ranked.phrases() {
//!     println!("{} {:.4}", phrase.text, phrase.rank);
//! }
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod personalization;
pub mod phrase;
pub mod summarizer;
pub mod textrank;
pub mod types;
pub mod variants;

#[cfg(test)]
pub(crate) mod test_fixtures;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{
    ChunkSpan, Document, Lemma, PersonalizationKind, Phrase, PosTag, PositionKey,
    ScoreAggregation, Sentence, TextRankConfig, Token,
};

// Re-export main functionality
pub use graph::{builder::GraphBuilder, csr::CsrGraph};
pub use nlp::{filter::TokenFilter, stopwords::StopwordFilter};
pub use pagerank::{personalized::PersonalizedPageRank, PageRankResult};
pub use personalization::{FocusTerms, PersonalizationStrategy, PositionBiased, Uniform};
pub use phrase::extraction::PhraseExtractor;
pub use summarizer::{
    distance::{SentenceDistance, SentenceDistances},
    selector::SentenceSelector,
    unit_vector::{DistanceMetric, InverseCount, UnitVectorDistance},
};
pub use textrank::{RankedDocument, TextRank};
pub use variants::{BiasedTextRank, PositionRank, Variant};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
