//! Content-word chunk detection
//!
//! A candidate span is a maximal run of consecutive kept tokens inside one
//! sentence. Any token that is not kept, and any sentence boundary, ends
//! the run.

use crate::nlp::filter::TokenFilter;
use crate::types::{ChunkSpan, Document, Lemma, Token};

/// Content-run chunk detector
#[derive(Debug, Clone, Default)]
pub struct ContentChunker {
    filter: TokenFilter,
}

impl ContentChunker {
    /// Create a chunker with the given content-word filter
    pub fn new(filter: TokenFilter) -> Self {
        Self { filter }
    }

    /// The content-word filter runs are built from
    pub fn filter(&self) -> &TokenFilter {
        &self.filter
    }

    /// Extract candidate spans in document order
    pub fn extract_chunks(&self, doc: &Document) -> Vec<ChunkSpan> {
        let mut chunks = Vec::new();

        for sentence in doc.sentences() {
            let mut run_start = None;

            for idx in sentence.start_token..sentence.end_token {
                let kept = self.filter.keeps(&doc.tokens()[idx]);
                match (kept, run_start) {
                    (true, None) => run_start = Some(idx),
                    (false, Some(start)) => {
                        chunks.push(ChunkSpan {
                            start_token: start,
                            end_token: idx,
                            sentence_idx: sentence.index,
                        });
                        run_start = None;
                    }
                    _ => {}
                }
            }

            if let Some(start) = run_start {
                chunks.push(ChunkSpan {
                    start_token: start,
                    end_token: sentence.end_token,
                    sentence_idx: sentence.index,
                });
            }
        }

        chunks
    }
}

fn chunk_tokens<'a>(tokens: &'a [Token], chunk: &ChunkSpan) -> &'a [Token] {
    &tokens[chunk.start_token..chunk.end_token]
}

/// Extract the text for a chunk span from the original tokens
pub fn chunk_text(tokens: &[Token], chunk: &ChunkSpan) -> String {
    chunk_tokens(tokens, chunk)
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract the lemmatized text for a chunk span
pub fn chunk_lemma(tokens: &[Token], chunk: &ChunkSpan) -> String {
    chunk_tokens(tokens, chunk)
        .iter()
        .map(|t| t.lemma.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The order-preserving `(lemma, pos)` sequence identifying a chunk
pub fn chunk_key(tokens: &[Token], chunk: &ChunkSpan) -> Vec<Lemma> {
    chunk_tokens(tokens, chunk)
        .iter()
        .map(Token::lemma_key)
        .collect()
}
