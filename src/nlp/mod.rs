//! Lexical filtering components
//!
//! Tokens arrive already lemmatized and tagged; this module only decides
//! which tokens count as content words for ranking.

pub mod filter;
pub mod stopwords;
