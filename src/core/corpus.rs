//! Reference corpus: stopword and dictionary sets
//!
//! Loaded once from newline-delimited word lists. A missing or unreadable
//! file is never an error: the built-in set for that list is used instead.

use std::collections::HashSet;
use std::path::Path;
use crate::{STOPWORDS_FILE, DICTIONARY_FILE};

/// Built-in stopwords used when no list is available
const FALLBACK_STOPWORDS: &[&str] = &[
    "the", "and", "to", "of", "a", "in", "that", "is", "was",
    "he", "for", "it", "with", "as", "his", "on", "be", "at",
    "by", "i", "this", "had", "not", "are", "but", "from",
    "or", "have", "an", "they", "which", "one", "you", "were",
    "her", "all", "she", "there", "would", "their", "we", "him",
];

/// Built-in dictionary used when no list is available
const FALLBACK_DICTIONARY: &[&str] = &[
    "hello", "world", "test", "message", "text", "analysis",
    "cipher", "encryption", "decryption", "key", "secret",
    "the", "and", "that", "have", "for", "not", "with", "this",
    "but", "from", "they", "say", "her", "she", "will", "would",
    "make", "like", "time", "there", "their", "what", "so", "see",
    "him", "them", "when", "which", "now", "then", "its", "also",
];

/// Where a word set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusSource {
    File,
    BuiltIn,
}

/// Immutable stopword + dictionary sets
#[derive(Debug, Clone)]
pub struct ReferenceCorpus {
    stopwords: HashSet<String>,
    dictionary: HashSet<String>,
    stopwords_source: CorpusSource,
    dictionary_source: CorpusSource,
}

impl Default for ReferenceCorpus {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceCorpus {
    /// Built-in sets only
    pub fn builtin() -> Self {
        Self {
            stopwords: to_set(FALLBACK_STOPWORDS),
            dictionary: to_set(FALLBACK_DICTIONARY),
            stopwords_source: CorpusSource::BuiltIn,
            dictionary_source: CorpusSource::BuiltIn,
        }
    }

    /// Load both lists from `data_dir`, each falling back independently
    pub fn load(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        let (stopwords, stopwords_source) = load_list(&dir.join(STOPWORDS_FILE), FALLBACK_STOPWORDS);
        let (dictionary, dictionary_source) = load_list(&dir.join(DICTIONARY_FILE), FALLBACK_DICTIONARY);

        tracing::debug!(
            "Reference corpus: {} stopwords ({:?}), {} dictionary words ({:?})",
            stopwords.len(),
            stopwords_source,
            dictionary.len(),
            dictionary_source
        );

        Self {
            stopwords,
            dictionary,
            stopwords_source,
            dictionary_source,
        }
    }

    /// Build from explicit word collections (lowercased on the way in)
    pub fn from_words<S, D>(stopwords: S, dictionary: D) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        Self {
            stopwords: stopwords.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
            dictionary: dictionary.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
            stopwords_source: CorpusSource::File,
            dictionary_source: CorpusSource::File,
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn is_dictionary_word(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn dictionary_count(&self) -> usize {
        self.dictionary.len()
    }

    pub fn stopwords_source(&self) -> CorpusSource {
        self.stopwords_source
    }

    pub fn dictionary_source(&self) -> CorpusSource {
        self.dictionary_source
    }
}

/// Parse a word list: one word per line, trimmed, lowercased, blanks skipped
pub fn parse_word_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn load_list(path: &Path, fallback: &[&str]) -> (HashSet<String>, CorpusSource) {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let words = parse_word_list(&content);
            if words.is_empty() {
                tracing::warn!("Word list {} is empty, using built-in set", path.display());
                (to_set(fallback), CorpusSource::BuiltIn)
            } else {
                (words, CorpusSource::File)
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Word list {} not found, using built-in set", path.display());
            (to_set(fallback), CorpusSource::BuiltIn)
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}, using built-in set", path.display(), e);
            (to_set(fallback), CorpusSource::BuiltIn)
        }
    }
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// =============================================================================
// TESTS
// =============================================================================
