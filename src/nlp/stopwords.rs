//! Stopword filtering
//!
//! Lemma-level stopword filtering using the `stop-words` crate, with
//! support for custom stopword lists. A stopword is treated like a
//! non-content token: it is dropped before windowing and breaks phrase runs.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopword lemmas
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a stopword filter from a built-in language list
    ///
    /// Unknown language codes fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    /// Combine an optional built-in list with custom words
    pub fn from_config<S: AsRef<str>>(language: Option<&str>, extra: &[S]) -> Self {
        let mut filter = match language {
            Some(lang) => Self::new(lang),
            None => Self::empty(),
        };
        filter.add_stopwords(extra);
        filter
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a lemma is a stopword (case-insensitive)
    pub fn is_stopword(&self, lemma: &str) -> bool {
        !self.stopwords.is_empty() && self.stopwords.contains(&lemma.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}
