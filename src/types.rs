//! Core types for lemma_textrank
//!
//! This module defines the annotated-document input contract (tokens,
//! sentences, documents), the graph vertex key, extracted phrases, and the
//! extraction configuration.

use crate::errors::{Result, TextRankError};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Part of speech
// ============================================================================

/// Part-of-speech tags (Universal Dependencies coarse tagset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PosTag {
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "ADJ")]
    Adjective,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "PRON")]
    Pronoun,
    #[serde(rename = "DET")]
    Determiner,
    #[serde(rename = "ADP")]
    Preposition,
    #[serde(rename = "CCONJ")]
    Conjunction,
    #[serde(rename = "INTJ")]
    Interjection,
    #[serde(rename = "NUM")]
    Numeral,
    #[serde(rename = "PART")]
    Particle,
    #[serde(rename = "PUNCT")]
    Punctuation,
    #[serde(rename = "SYM")]
    Symbol,
    #[serde(rename = "PROPN")]
    ProperNoun,
    #[serde(rename = "X")]
    Other,
}

impl PosTag {
    /// Check if this tag represents a noun (common or proper)
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Parse from spaCy-style POS tag
    pub fn from_spacy(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "VERB" | "AUX" => PosTag::Verb,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "PRON" => PosTag::Pronoun,
            "DET" => PosTag::Determiner,
            "ADP" => PosTag::Preposition,
            "CCONJ" | "SCONJ" => PosTag::Conjunction,
            "INTJ" => PosTag::Interjection,
            "NUM" => PosTag::Numeral,
            "PART" => PosTag::Particle,
            "PUNCT" => PosTag::Punctuation,
            "SYM" => PosTag::Symbol,
            "PROPN" => PosTag::ProperNoun,
            _ => PosTag::Other,
        }
    }

    /// Get the spaCy-style POS tag string for this enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Interjection => "INTJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::ProperNoun => "PROPN",
            PosTag::Other => "X",
        }
    }
}

// ============================================================================
// Token & Lemma
// ============================================================================

/// A token produced by the external annotation pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form (original text)
    pub text: String,
    /// The lemmatized form (normalized)
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Sentence index this token belongs to
    pub sentence_idx: usize,
    /// 0-based position within the document
    pub position: usize,
}

impl Token {
    /// Create a new token
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PosTag,
        sentence_idx: usize,
        position: usize,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            sentence_idx,
            position,
        }
    }

    /// The graph vertex key for this token
    pub fn lemma_key(&self) -> Lemma {
        Lemma::new(self.lemma.as_str(), self.pos)
    }
}

/// Graph vertex key: a `(lemma, part-of-speech)` pair.
///
/// The same lemma text under two different tags is two different vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Lemma {
    pub lemma: String,
    pub pos: PosTag,
}

impl Lemma {
    pub fn new(lemma: impl Into<String>, pos: PosTag) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
        }
    }
}

impl fmt::Display for Lemma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.lemma, self.pos.as_str())
    }
}

// ============================================================================
// Sentence & Document
// ============================================================================

/// A sentence boundary within a [`Document`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence index within the document
    pub index: usize,
    /// Start token index (inclusive)
    pub start_token: usize,
    /// End token index (exclusive)
    pub end_token: usize,
}

impl Sentence {
    /// Number of tokens in the sentence
    pub fn len(&self) -> usize {
        self.end_token - self.start_token
    }

    pub fn is_empty(&self) -> bool {
        self.start_token == self.end_token
    }
}

/// An annotated document: tokens in document order, grouped into sentences.
///
/// Token indices used throughout the crate (e.g. [`ChunkSpan`]) index into
/// [`Document::tokens`].
///
/// Deserialization checks that sentences tile the token list in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "DocumentParts")]
pub struct Document {
    tokens: Vec<Token>,
    sentences: Vec<Sentence>,
}

/// Unchecked serialized form of a [`Document`]
#[derive(Deserialize)]
struct DocumentParts {
    tokens: Vec<Token>,
    sentences: Vec<Sentence>,
}

impl TryFrom<DocumentParts> for Document {
    type Error = String;

    fn try_from(parts: DocumentParts) -> std::result::Result<Self, Self::Error> {
        let mut next = 0;
        for (i, sent) in parts.sentences.iter().enumerate() {
            if sent.index != i
                || sent.start_token != next
                || sent.end_token < sent.start_token
                || sent.end_token > parts.tokens.len()
            {
                return Err(format!(
                    "sentence {i} has invalid bounds {}..{} (index {}, {} tokens)",
                    sent.start_token,
                    sent.end_token,
                    sent.index,
                    parts.tokens.len()
                ));
            }
            next = sent.end_token;
        }

        if next != parts.tokens.len() {
            return Err(format!(
                "sentences cover {next} of {} tokens",
                parts.tokens.len()
            ));
        }

        Ok(Self {
            tokens: parts.tokens,
            sentences: parts.sentences,
        })
    }
}

impl Document {
    /// Build a document from pre-segmented sentences
    pub fn new(sentences: Vec<Vec<Token>>) -> Self {
        let total = sentences.iter().map(Vec::len).sum();
        let mut tokens = Vec::with_capacity(total);
        let mut spans = Vec::with_capacity(sentences.len());

        for (index, sent) in sentences.into_iter().enumerate() {
            let start_token = tokens.len();
            tokens.extend(sent);
            spans.push(Sentence {
                index,
                start_token,
                end_token: tokens.len(),
            });
        }

        Self {
            tokens,
            sentences: spans,
        }
    }

    /// Build a document from a flat token stream, splitting sentences
    /// wherever `sentence_idx` changes
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let mut sentences: Vec<Vec<Token>> = Vec::new();
        let mut current_sent = Vec::new();
        let mut current_idx = None;

        for token in tokens {
            if current_idx != Some(token.sentence_idx) {
                if !current_sent.is_empty() {
                    sentences.push(std::mem::take(&mut current_sent));
                }
                current_idx = Some(token.sentence_idx);
            }
            current_sent.push(token);
        }
        if !current_sent.is_empty() {
            sentences.push(current_sent);
        }

        Self::new(sentences)
    }

    /// All tokens in document order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Sentence boundaries in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Tokens of the sentence at `index`, or an empty slice if out of range
    pub fn sentence_tokens(&self, index: usize) -> &[Token] {
        self.sentences
            .get(index)
            .map(|s| &self.tokens[s.start_token..s.end_token])
            .unwrap_or(&[])
    }

    /// Surface text of a sentence, tokens joined by single spaces
    pub fn sentence_text(&self, index: usize) -> String {
        self.sentence_tokens(index)
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn num_sentences(&self) -> usize {
        self.sentences.len()
    }
}

// ============================================================================
// Phrase & Chunk
// ============================================================================

/// A contiguous span of kept tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSpan {
    /// Start token index (inclusive)
    pub start_token: usize,
    /// End token index (exclusive)
    pub end_token: usize,
    /// The sentence this chunk belongs to
    pub sentence_idx: usize,
}

impl ChunkSpan {
    /// Get the token length of this chunk
    pub fn token_len(&self) -> usize {
        self.end_token - self.start_token
    }
}

/// An extracted phrase with its aggregate rank and occurrences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    /// Surface form of the first occurrence
    pub text: String,
    /// Space-joined lemmas of the first occurrence
    pub lemma: String,
    /// Aggregate centrality of the constituent vertices
    pub rank: f64,
    /// Number of occurrences in the document
    pub count: usize,
    /// Every span realizing this phrase, in document order
    pub chunks: Vec<ChunkSpan>,
    /// Lemma-sequence key of the first occurrence
    pub key: Vec<Lemma>,
}

impl Phrase {
    /// Token index of the first occurrence
    pub fn first_position(&self) -> usize {
        self.chunks.first().map_or(usize::MAX, |c| c.start_token)
    }
}

// ============================================================================
// Policies
// ============================================================================

/// Methods for aggregating vertex scores across the tokens of a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreAggregation {
    /// Sum of all token scores
    #[default]
    Sum,
    /// Arithmetic mean of token scores
    Mean,
    /// Maximum token score
    Max,
    /// Root mean square of token scores
    RootMeanSquare,
}

impl ScoreAggregation {
    /// Aggregate a slice of scores
    pub fn aggregate(&self, scores: &[f64]) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }

        match self {
            ScoreAggregation::Sum => scores.iter().sum(),
            ScoreAggregation::Mean => scores.iter().sum::<f64>() / scores.len() as f64,
            ScoreAggregation::Max => scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            ScoreAggregation::RootMeanSquare => {
                let sum_sq: f64 = scores.iter().map(|x| x * x).sum();
                (sum_sq / scores.len() as f64).sqrt()
            }
        }
    }
}

/// Grouping key for position-biased weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionKey {
    /// Group by lemma text; every `(lemma, pos)` vertex sharing the text
    /// receives the same weight
    #[default]
    LemmaText,
    /// Group by the full `(lemma, pos)` vertex key
    LemmaPos,
}

/// Which restart distribution the ranker uses
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PersonalizationKind {
    /// Uniform restart (plain PageRank)
    #[default]
    Uniform,
    /// Restart weight proportional to summed inverse positions
    PositionBiased,
    /// Restart weight `bias` on focus lemmas and 1.0 elsewhere
    FocusTerms { terms: Vec<String>, bias: f64 },
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for keyphrase extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRankConfig {
    /// POS tags that count as content words
    pub pos_kept: Vec<PosTag>,
    /// Window size for the co-occurrence graph
    pub window_size: usize,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Convergence threshold (stop when L1 delta <= threshold)
    pub convergence_threshold: f64,
    /// Restart distribution
    pub personalization: PersonalizationKind,
    /// Grouping key for position-biased weights
    pub position_key: PositionKey,
    /// Score aggregation across phrase tokens
    pub score_aggregation: ScoreAggregation,
    /// Additional lemma stopwords
    pub stopwords: Vec<String>,
    /// Language code for a built-in stopword list (e.g. "en"); `None` disables it
    pub language: Option<String>,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            pos_kept: vec![PosTag::Noun, PosTag::ProperNoun, PosTag::Adjective],
            window_size: 4,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            personalization: PersonalizationKind::Uniform,
            position_key: PositionKey::LemmaText,
            score_aggregation: ScoreAggregation::Sum,
            stopwords: Vec::new(),
            language: None,
        }
    }
}

impl TextRankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(TextRankError::invalid_config(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_threshold > 0.0) {
            return Err(TextRankError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if self.window_size < 2 {
            return Err(TextRankError::invalid_config("window_size must be >= 2"));
        }

        if self.pos_kept.is_empty() {
            return Err(TextRankError::invalid_config("pos_kept must not be empty"));
        }

        if let PersonalizationKind::FocusTerms { bias, .. } = &self.personalization {
            if !(bias.is_finite() && *bias > 0.0) {
                return Err(TextRankError::invalid_config(format!(
                    "focus term bias must be finite and > 0, got {bias}"
                )));
            }
        }

        Ok(())
    }

    /// Check whether a POS tag counts as a content word
    pub fn keeps(&self, pos: PosTag) -> bool {
        self.pos_kept.contains(&pos)
    }

    /// Builder method: set kept POS tags
    pub fn with_pos_kept(mut self, pos_kept: Vec<PosTag>) -> Self {
        self.pos_kept = pos_kept;
        self
    }

    /// Builder method: set window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set personalization strategy
    pub fn with_personalization(mut self, personalization: PersonalizationKind) -> Self {
        self.personalization = personalization;
        self
    }

    /// Builder method: set position-weight grouping key
    pub fn with_position_key(mut self, key: PositionKey) -> Self {
        self.position_key = key;
        self
    }

    /// Builder method: set score aggregation
    pub fn with_score_aggregation(mut self, aggregation: ScoreAggregation) -> Self {
        self.score_aggregation = aggregation;
        self
    }

    /// Builder method: set custom stopwords
    pub fn with_stopwords(mut self, stopwords: Vec<String>) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Builder method: enable a built-in stopword list
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(text: &str, lemma: &str, pos: PosTag, sent_idx: usize, pos_idx: usize) -> Token {
        Token::new(text, lemma, pos, sent_idx, pos_idx)
    }

    #[test]
    fn test_lemma_key_includes_pos() {
        let noun = make_token("run", "run", PosTag::Noun, 0, 0);
        let verb = make_token("run", "run", PosTag::Verb, 0, 1);

        assert_ne!(noun.lemma_key(), verb.lemma_key());
        assert_eq!(noun.lemma_key(), Lemma::new("run", PosTag::Noun));
        assert_eq!(noun.lemma_key().to_string(), "run/NOUN");
    }

    #[test]
    fn test_document_from_sentences() {
        let doc = Document::new(vec![
            vec![
                make_token("Graphs", "graph", PosTag::Noun, 0, 0),
                make_token("rank", "rank", PosTag::Verb, 0, 1),
            ],
            vec![],
            vec![make_token("words", "word", PosTag::Noun, 2, 2)],
        ]);

        assert_eq!(doc.len(), 3);
        assert_eq!(doc.num_sentences(), 3);
        assert!(doc.sentences()[1].is_empty());
        assert_eq!(doc.sentence_tokens(2)[0].lemma, "word");
        assert_eq!(doc.sentence_text(0), "Graphs rank");
        assert!(doc.sentence_tokens(7).is_empty());
    }

    #[test]
    fn test_document_from_tokens_groups_sentences() {
        let doc = Document::from_tokens(vec![
            make_token("a", "a", PosTag::Noun, 0, 0),
            make_token("b", "b", PosTag::Noun, 0, 1),
            make_token("c", "c", PosTag::Noun, 1, 2),
        ]);

        assert_eq!(doc.num_sentences(), 2);
        assert_eq!(doc.sentences()[1].start_token, 2);
        assert_eq!(doc.sentences()[1].len(), 1);
    }

    #[test]
    fn test_document_serde_round_trip() {
        let doc = Document::new(vec![
            vec![make_token("Graphs", "graph", PosTag::Noun, 0, 0)],
            vec![make_token("words", "word", PosTag::Noun, 1, 1)],
        ]);
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();

        assert_eq!(back.tokens(), doc.tokens());
        assert_eq!(back.sentences(), doc.sentences());
    }

    #[test]
    fn test_document_deserialize_rejects_bad_bounds() {
        let token = r#"{"text":"data","lemma":"data","pos":"NOUN","sentence_idx":0,"position":0}"#;
        let past_end = format!(
            r#"{{"tokens":[{token}],"sentences":[{{"index":0,"start_token":0,"end_token":5}}]}}"#
        );
        assert!(serde_json::from_str::<Document>(&past_end).is_err());

        let uncovered = format!(r#"{{"tokens":[{token}],"sentences":[]}}"#);
        assert!(serde_json::from_str::<Document>(&uncovered).is_err());

        let gap = format!(
            r#"{{"tokens":[{token},{token}],"sentences":[{{"index":0,"start_token":1,"end_token":2}}]}}"#
        );
        assert!(serde_json::from_str::<Document>(&gap).is_err());

        let ok = format!(
            r#"{{"tokens":[{token}],"sentences":[{{"index":0,"start_token":0,"end_token":1}}]}}"#
        );
        let doc: Document = serde_json::from_str(&ok).unwrap();
        assert_eq!(doc.sentence_tokens(0).len(), 1);
    }

    #[test]
    fn test_score_aggregation() {
        let scores = [0.2, 0.4];
        assert!((ScoreAggregation::Sum.aggregate(&scores) - 0.6).abs() < 1e-12);
        assert!((ScoreAggregation::Mean.aggregate(&scores) - 0.3).abs() < 1e-12);
        assert!((ScoreAggregation::Max.aggregate(&scores) - 0.4).abs() < 1e-12);
        assert_eq!(ScoreAggregation::Sum.aggregate(&[]), 0.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = TextRankConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window_size, 4);
        assert!(config.keeps(PosTag::ProperNoun));
        assert!(!config.keeps(PosTag::Verb));
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(TextRankConfig::new().with_damping(1.0).validate().is_err());
        assert!(TextRankConfig::new().with_window_size(1).validate().is_err());
        assert!(TextRankConfig::new().with_max_iterations(0).validate().is_err());
        assert!(TextRankConfig::new()
            .with_convergence_threshold(0.0)
            .validate()
            .is_err());
        assert!(TextRankConfig::new().with_pos_kept(vec![]).validate().is_err());
        assert!(TextRankConfig::new()
            .with_personalization(PersonalizationKind::FocusTerms {
                terms: vec!["graph".into()],
                bias: -1.0,
            })
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "pos_kept": ["NOUN", "PROPN"],
            "window_size": 3,
            "personalization": { "type": "position_biased" }
        }"#;
        let config = TextRankConfig::from_json(json).unwrap();

        assert_eq!(config.pos_kept, vec![PosTag::Noun, PosTag::ProperNoun]);
        assert_eq!(config.window_size, 3);
        assert_eq!(config.personalization, PersonalizationKind::PositionBiased);
        assert!((config.damping - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_config_from_json_validates() {
        let err = TextRankConfig::from_json(r#"{ "damping": 2.0 }"#).unwrap_err();
        assert!(matches!(err, TextRankError::InvalidConfig(_)));

        let err = TextRankConfig::from_json("{").unwrap_err();
        assert!(matches!(err, TextRankError::Json(_)));
    }

    #[test]
    fn test_focus_terms_serde() {
        let config = TextRankConfig::new().with_personalization(PersonalizationKind::FocusTerms {
            terms: vec!["graph".to_string()],
            bias: 5.0,
        });
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["personalization"]["type"], "focus_terms");

        let back: TextRankConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back, config);
    }
}
