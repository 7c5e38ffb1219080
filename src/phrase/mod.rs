//! Phrase extraction components
//!
//! This module finds candidate spans (maximal runs of content words) and
//! turns them into deduplicated, ranked phrases.

pub mod chunker;
pub mod extraction;
