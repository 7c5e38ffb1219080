//! Per-sentence distance records

use super::unit_vector::{unit_vector, DistanceMetric};
use crate::types::Phrase;
use serde::{Deserialize, Serialize};

/// Distance from one sentence to the top-ranked phrases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceDistance {
    /// 0-based sentence index
    pub sent_id: usize,
    /// Indices into the top-phrase list, in order of appearance
    pub phrases: Vec<usize>,
    /// Scalar distance (smaller is closer)
    pub distance: f64,
}

impl SentenceDistance {
    /// True when the sentence contains none of the top phrases
    pub fn empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// A phrase occurrence: (sentence, start token, phrase index)
type Occurrence = (usize, usize, usize);

/// Lazy sequence of [`SentenceDistance`], one per sentence in order.
///
/// Cloning the iterator restarts from the clone's position, so a fresh
/// clone replays the whole sequence.
#[derive(Clone)]
pub struct SentenceDistances<'a> {
    num_sentences: usize,
    next_sentence: usize,
    cursor: usize,
    occurrences: Vec<Occurrence>,
    unit_vector: Vec<f64>,
    metric: &'a dyn DistanceMetric,
}

impl<'a> SentenceDistances<'a> {
    /// Prepare distances against the first `limit_phrases` of `phrases`
    pub fn new(
        num_sentences: usize,
        phrases: &[Phrase],
        limit_phrases: usize,
        metric: &'a dyn DistanceMetric,
    ) -> Self {
        let limited = &phrases[..limit_phrases.min(phrases.len())];
        let unit_vector = unit_vector(limited);

        // phrases with no rank mass match nothing
        let mut occurrences: Vec<Occurrence> = if unit_vector.is_empty() {
            Vec::new()
        } else {
            limited
                .iter()
                .enumerate()
                .flat_map(|(id, p)| p.chunks.iter().map(move |c| (c.sentence_idx, c.start_token, id)))
                .collect()
        };
        occurrences.sort_unstable();

        Self {
            num_sentences,
            next_sentence: 0,
            cursor: 0,
            occurrences,
            unit_vector,
            metric,
        }
    }

    /// The unit vector distances are measured against
    pub fn unit_vector(&self) -> &[f64] {
        &self.unit_vector
    }
}

impl Iterator for SentenceDistances<'_> {
    type Item = SentenceDistance;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_sentence >= self.num_sentences {
            return None;
        }
        let sent_id = self.next_sentence;
        self.next_sentence += 1;

        let mut phrases = Vec::new();
        while let Some(&(sent, _, id)) = self.occurrences.get(self.cursor) {
            if sent > sent_id {
                break;
            }
            if sent == sent_id {
                phrases.push(id);
            }
            self.cursor += 1;
        }

        let distance = self.metric.distance(&phrases, &self.unit_vector);
        Some(SentenceDistance {
            sent_id,
            phrases,
            distance,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_sentences - self.next_sentence;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SentenceDistances<'_> {}
