//! Unit vector over the top-ranked phrases and sentence distance metrics

use crate::types::Phrase;

/// Phrase ranks scaled to sum to 1
///
/// No phrases, or a zero rank total, gives an empty vector.
pub fn unit_vector(phrases: &[Phrase]) -> Vec<f64> {
    let sum: f64 = phrases.iter().map(|p| p.rank).sum();
    if sum > 0.0 {
        phrases.iter().map(|p| p.rank / sum).collect()
    } else {
        Vec::new()
    }
}

/// Scalar distance from a sentence to the top phrases.
///
/// `phrase_ids` index into `unit_vector`; they may repeat. Sentences
/// containing more, or higher-ranked, phrases must not get a larger
/// distance.
pub trait DistanceMetric: Send + Sync {
    fn name(&self) -> &str;

    fn distance(&self, phrase_ids: &[usize], unit_vector: &[f64]) -> f64;
}

/// Euclidean distance between the unit vector and the sentence's phrase
/// projection: the norm over the components the sentence lacks
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitVectorDistance;

impl DistanceMetric for UnitVectorDistance {
    fn name(&self) -> &str {
        "unit_vector"
    }

    fn distance(&self, phrase_ids: &[usize], unit_vector: &[f64]) -> f64 {
        unit_vector
            .iter()
            .enumerate()
            .filter(|(id, _)| !phrase_ids.contains(id))
            .fold(0.0, |acc, (_, w)| acc + w * w)
            .sqrt()
    }
}

/// `1 / (1 + matches)`, counting repeated phrases
#[derive(Debug, Clone, Copy, Default)]
pub struct InverseCount;

impl DistanceMetric for InverseCount {
    fn name(&self) -> &str {
        "inverse_count"
    }

    fn distance(&self, phrase_ids: &[usize], _unit_vector: &[f64]) -> f64 {
        1.0 / (1.0 + phrase_ids.len() as f64)
    }
}
