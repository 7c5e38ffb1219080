//! Keyphrase ranking entry point
//!
//! [`TextRank::rank`] runs the stages in order:
//!
//! 1. Select candidates (POS + stopword filter)
//! 2. Build the co-occurrence graph over the kept lemma stream
//! 3. Compute the restart distribution
//! 4. Rank vertices with personalized PageRank
//! 5. Build phrases from content runs
//!
//! The returned [`RankedDocument`] borrows the input document and exposes
//! the graph, the vertex ranks and the phrase list, plus the sentence
//! distance and summary operations that build on them.

use crate::errors::Result;
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::nlp::filter::TokenFilter;
use crate::pagerank::personalized::PersonalizedPageRank;
use crate::pagerank::PageRankResult;
use crate::personalization::{personalization_vector, PersonalizationStrategy};
use crate::phrase::chunker::ContentChunker;
use crate::phrase::extraction::PhraseExtractor;
use crate::summarizer::distance::SentenceDistances;
use crate::summarizer::selector::SentenceSelector;
use crate::summarizer::unit_vector::{DistanceMetric, UnitVectorDistance};
use crate::types::{Document, Lemma, Phrase, Sentence, TextRankConfig, Token};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

pub const STAGE_CANDIDATES: &str = "candidates";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_TELEPORT: &str = "teleport";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_PHRASES: &str = "phrases";
pub const STAGE_SUMMARIZE: &str = "summarize";

/// Enter a tracing span for a stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("textrank_stage", stage = $name).entered();
    };
}

/// Keyphrase ranker over annotated documents
#[derive(Debug, Clone)]
pub struct TextRank {
    config: TextRankConfig,
    chunker: ContentChunker,
}

impl Default for TextRank {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRank {
    /// Create a ranker with the default configuration
    pub fn new() -> Self {
        Self::with_config(TextRankConfig::default())
    }

    /// Create a ranker with a custom configuration
    ///
    /// The configuration is used as given; see [`TextRank::try_with_config`]
    /// for a validating constructor.
    pub fn with_config(config: TextRankConfig) -> Self {
        let filter = TokenFilter::from_config(&config);
        Self {
            config,
            chunker: ContentChunker::new(filter),
        }
    }

    /// Validate the configuration, then create a ranker
    pub fn try_with_config(config: TextRankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// The active configuration
    pub fn config(&self) -> &TextRankConfig {
        &self.config
    }

    /// Kept tokens of `doc` in document order
    pub fn filtered_tokens<'a>(&self, doc: &'a Document) -> Vec<&'a Token> {
        self.chunker.filter().filter(doc)
    }

    /// Rank `doc` with the configured restart distribution
    pub fn rank<'a>(&self, doc: &'a Document) -> RankedDocument<'a> {
        let strategy = self
            .config
            .personalization
            .strategy(self.config.position_key);
        self.rank_with(doc, strategy.as_ref())
    }

    /// Rank `doc` with an explicit restart strategy
    pub fn rank_with<'a>(
        &self,
        doc: &'a Document,
        strategy: &dyn PersonalizationStrategy,
    ) -> RankedDocument<'a> {
        let filtered = {
            trace_stage!(STAGE_CANDIDATES);
            self.filtered_tokens(doc)
        };

        let graph = {
            trace_stage!(STAGE_GRAPH);
            let builder = GraphBuilder::from_tokens(&filtered, self.config.window_size);
            CsrGraph::from_builder(&builder)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            tokens = doc.len(),
            kept = filtered.len(),
            nodes = graph.num_nodes,
            edges = graph.num_edges(),
            "built lemma graph"
        );

        let personalization = {
            trace_stage!(STAGE_TELEPORT);
            strategy
                .compute(&filtered)
                .map(|weights| personalization_vector(&graph, &weights))
        };

        let pagerank = {
            trace_stage!(STAGE_RANK);
            let mut ranker = PersonalizedPageRank::new()
                .with_damping(self.config.damping)
                .with_max_iterations(self.config.max_iterations)
                .with_threshold(self.config.convergence_threshold);
            if let Some(personalization) = personalization {
                ranker = ranker.with_personalization(personalization);
            }
            ranker.run(&graph)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            iterations = pagerank.iterations,
            converged = pagerank.converged,
            "ranked vertices"
        );

        #[cfg(feature = "tracing")]
        if !pagerank.converged {
            tracing::warn!(
                strategy = strategy.name(),
                iterations = pagerank.iterations,
                delta = pagerank.delta,
                "pagerank did not converge"
            );
        }

        let phrases = {
            trace_stage!(STAGE_PHRASES);
            let chunks = self.chunker.extract_chunks(doc);
            PhraseExtractor::new()
                .with_aggregation(self.config.score_aggregation)
                .extract(doc, &chunks, &graph, &pagerank)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(phrases = phrases.len(), "extracted phrases");

        RankedDocument {
            doc,
            graph,
            pagerank,
            phrases,
        }
    }

    /// Rank several documents in parallel
    ///
    /// Output order matches input order.
    pub fn rank_batch<'a>(&self, docs: &'a [Document]) -> Vec<RankedDocument<'a>> {
        docs.par_iter().map(|doc| self.rank(doc)).collect()
    }
}

/// Ranking results for one document
#[derive(Debug, Clone)]
pub struct RankedDocument<'a> {
    doc: &'a Document,
    graph: CsrGraph,
    pagerank: PageRankResult,
    phrases: Vec<Phrase>,
}

impl<'a> RankedDocument<'a> {
    /// The ranked document
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// The lemma graph
    pub fn graph(&self) -> &CsrGraph {
        &self.graph
    }

    /// Raw PageRank output, indexed by node id
    pub fn pagerank(&self) -> &PageRankResult {
        &self.pagerank
    }

    /// Phrases in descending rank order
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Rank of every vertex, keyed by lemma
    pub fn ranks(&self) -> FxHashMap<Lemma, f64> {
        self.graph
            .lemmas
            .iter()
            .cloned()
            .zip(self.pagerank.scores.iter().copied())
            .collect()
    }

    /// Rank of a single vertex; 0 when the lemma is not in the graph
    pub fn rank_of(&self, lemma: &Lemma) -> f64 {
        self.graph
            .get_node_by_lemma(lemma)
            .map_or(0.0, |id| self.pagerank.score(id))
    }

    /// Sentence distances to the top `limit_phrases` phrases
    pub fn calc_sent_dist(&self, limit_phrases: usize) -> SentenceDistances<'static> {
        self.calc_sent_dist_with(limit_phrases, &UnitVectorDistance)
    }

    /// Sentence distances with an explicit metric
    pub fn calc_sent_dist_with<'m>(
        &self,
        limit_phrases: usize,
        metric: &'m dyn DistanceMetric,
    ) -> SentenceDistances<'m> {
        trace_stage!(STAGE_SUMMARIZE);
        SentenceDistances::new(
            self.doc.num_sentences(),
            &self.phrases,
            limit_phrases,
            metric,
        )
    }

    /// The `limit_sentences` sentences closest to the top `limit_phrases`
    /// phrases, closest first unless `preserve_order` is set
    pub fn summary(
        &self,
        limit_phrases: usize,
        limit_sentences: usize,
        preserve_order: bool,
    ) -> Vec<&'a Sentence> {
        let selected = SentenceSelector::new()
            .with_num_sentences(limit_sentences)
            .with_preserve_order(preserve_order)
            .select(self.calc_sent_dist(limit_phrases));

        let sentences = self.doc.sentences();
        selected
            .iter()
            .filter_map(|d| sentences.get(d.sent_id))
            .collect()
    }
}
