//! Graph construction and representation
//!
//! This module provides the lemma co-occurrence graph: a mutable builder
//! used while scanning the document and a frozen CSR form for ranking.

pub mod builder;
pub mod csr;
