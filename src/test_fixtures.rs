//! Hand-annotated documents shared by unit tests

use crate::types::{Document, PosTag, Token};

/// Build a document from `(text, lemma, tag)` triples per sentence,
/// numbering positions across the whole document
pub(crate) fn annotate(sentences: &[&[(&str, &str, &str)]]) -> Document {
    let mut position = 0;
    let sentences = sentences
        .iter()
        .enumerate()
        .map(|(sent_idx, words)| {
            words
                .iter()
                .map(|&(text, lemma, tag)| {
                    let token = Token::new(text, lemma, PosTag::from_spacy(tag), sent_idx, position);
                    position += 1;
                    token
                })
                .collect()
        })
        .collect();
    Document::new(sentences)
}

/// "Compatibility of systems of linear constraints over the set of natural
/// numbers. Criteria of compatibility of a system of linear Diophantine
/// equations, strict inequations, and nonstrict inequations are considered.
/// Upper bounds for components of a minimal set of solutions and algorithms
/// of construction of minimal generating sets of solutions for all types of
/// systems are given. These criteria and the corresponding algorithms for
/// constructing a minimal supporting set of solutions can be used in solving
/// all the considered types of systems and systems of mixed types."
pub(crate) fn sample_document() -> Document {
    annotate(&[
        &[
            ("Compatibility", "compatibility", "NOUN"),
            ("of", "of", "ADP"),
            ("systems", "system", "NOUN"),
            ("of", "of", "ADP"),
            ("linear", "linear", "ADJ"),
            ("constraints", "constraint", "NOUN"),
            ("over", "over", "ADP"),
            ("the", "the", "DET"),
            ("set", "set", "NOUN"),
            ("of", "of", "ADP"),
            ("natural", "natural", "ADJ"),
            ("numbers", "number", "NOUN"),
            (".", ".", "PUNCT"),
        ],
        &[
            ("Criteria", "criterion", "NOUN"),
            ("of", "of", "ADP"),
            ("compatibility", "compatibility", "NOUN"),
            ("of", "of", "ADP"),
            ("a", "a", "DET"),
            ("system", "system", "NOUN"),
            ("of", "of", "ADP"),
            ("linear", "linear", "ADJ"),
            ("Diophantine", "diophantine", "PROPN"),
            ("equations", "equation", "NOUN"),
            (",", ",", "PUNCT"),
            ("strict", "strict", "ADJ"),
            ("inequations", "inequation", "NOUN"),
            (",", ",", "PUNCT"),
            ("and", "and", "CCONJ"),
            ("nonstrict", "nonstrict", "ADJ"),
            ("inequations", "inequation", "NOUN"),
            ("are", "be", "AUX"),
            ("considered", "consider", "VERB"),
            (".", ".", "PUNCT"),
        ],
        &[
            ("Upper", "upper", "ADJ"),
            ("bounds", "bound", "NOUN"),
            ("for", "for", "ADP"),
            ("components", "component", "NOUN"),
            ("of", "of", "ADP"),
            ("a", "a", "DET"),
            ("minimal", "minimal", "ADJ"),
            ("set", "set", "NOUN"),
            ("of", "of", "ADP"),
            ("solutions", "solution", "NOUN"),
            ("and", "and", "CCONJ"),
            ("algorithms", "algorithm", "NOUN"),
            ("of", "of", "ADP"),
            ("construction", "construction", "NOUN"),
            ("of", "of", "ADP"),
            ("minimal", "minimal", "ADJ"),
            ("generating", "generate", "VERB"),
            ("sets", "set", "NOUN"),
            ("of", "of", "ADP"),
            ("solutions", "solution", "NOUN"),
            ("for", "for", "ADP"),
            ("all", "all", "DET"),
            ("types", "type", "NOUN"),
            ("of", "of", "ADP"),
            ("systems", "system", "NOUN"),
            ("are", "be", "AUX"),
            ("given", "give", "VERB"),
            (".", ".", "PUNCT"),
        ],
        &[
            ("These", "these", "DET"),
            ("criteria", "criterion", "NOUN"),
            ("and", "and", "CCONJ"),
            ("the", "the", "DET"),
            ("corresponding", "corresponding", "ADJ"),
            ("algorithms", "algorithm", "NOUN"),
            ("for", "for", "ADP"),
            ("constructing", "construct", "VERB"),
            ("a", "a", "DET"),
            ("minimal", "minimal", "ADJ"),
            ("supporting", "supporting", "NOUN"),
            ("set", "set", "NOUN"),
            ("of", "of", "ADP"),
            ("solutions", "solution", "NOUN"),
            ("can", "can", "AUX"),
            ("be", "be", "AUX"),
            ("used", "use", "VERB"),
            ("in", "in", "ADP"),
            ("solving", "solve", "VERB"),
            ("all", "all", "DET"),
            ("the", "the", "DET"),
            ("considered", "consider", "VERB"),
            ("types", "type", "NOUN"),
            ("of", "of", "ADP"),
            ("systems", "system", "NOUN"),
            ("and", "and", "CCONJ"),
            ("systems", "system", "NOUN"),
            ("of", "of", "ADP"),
            ("mixed", "mixed", "ADJ"),
            ("types", "type", "NOUN"),
            (".", ".", "PUNCT"),
        ],
    ])
}

/// A document with no content words
pub(crate) fn function_words_document() -> Document {
    annotate(&[&[("of", "of", "ADP"), ("the", "the", "DET"), (".", ".", "PUNCT")]])
}
