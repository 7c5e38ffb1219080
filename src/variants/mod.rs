//! TextRank variants
//!
//! Each variant is plain TextRank with a different restart distribution:
//! - PositionRank: biases towards words appearing earlier in the document
//! - BiasedTextRank: biases towards a set of focus terms

pub mod biased_textrank;
pub mod position_rank;

use crate::types::PersonalizationKind;

pub use biased_textrank::BiasedTextRank;
pub use position_rank::{extract_keyphrases_position, PositionRank};

/// Default restart weight for focus terms
pub const DEFAULT_FOCUS_BIAS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    TextRank,
    PositionRank,
    BiasedTextRank,
}

impl Variant {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "position_rank" | "positionrank" | "position" => Variant::PositionRank,
            "biased_textrank" | "biased" | "biasedtextrank" => Variant::BiasedTextRank,
            _ => Variant::TextRank,
        }
    }

    /// Restart distribution for this variant
    ///
    /// BiasedTextRank starts with no focus terms, which ranks like plain
    /// TextRank until terms are supplied.
    pub fn personalization(self) -> PersonalizationKind {
        match self {
            Variant::TextRank => PersonalizationKind::Uniform,
            Variant::PositionRank => PersonalizationKind::PositionBiased,
            Variant::BiasedTextRank => PersonalizationKind::FocusTerms {
                terms: Vec::new(),
                bias: DEFAULT_FOCUS_BIAS,
            },
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Variant::parse(value))
    }
}
