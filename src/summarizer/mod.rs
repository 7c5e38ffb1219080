//! Summarization components
//!
//! Sentences are measured by their distance to the top-ranked phrases;
//! the closest non-empty sentences form an extractive summary.

pub mod distance;
pub mod selector;
pub mod unit_vector;
