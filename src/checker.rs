use std::collections::HashSet;

use crate::{suggest, CorrectnessCache, Dictionary, Tokenizer};

/// A word the checker did not recognize, and the character offset of
/// its first character in the checked text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingError {
    word: String,
    offset: usize,
}

impl SpellingError {
    pub fn new(word: String, offset: usize) -> Self {
        Self { word, offset }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Spell checking context: owns the dictionary, the correctness cache
/// and the ignore set, so independent instances (per document, per
/// test) never share hidden state.
///
/// `check` and `suggest` are pure functions of the context and their
/// arguments; a concurrent host puts the whole context behind its own
/// single-writer/multi-reader lock.
pub struct SpellChecker {
    dictionary: Dictionary,
    cache: CorrectnessCache,
    ignored: HashSet<String>,
}

impl SpellChecker {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            cache: CorrectnessCache::new(),
            ignored: HashSet::new(),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// All misspelled occurrences in `text`, in document order.
    pub fn check(&mut self, text: &str) -> Vec<SpellingError> {
        let mut errors = Vec::new();
        for token in Tokenizer::new(text) {
            if self.ignored.contains(token.word) {
                continue;
            }
            if self.cache.is_correct(token.word, &self.dictionary) {
                continue;
            }
            errors.push(SpellingError::new(token.word.to_string(), token.offset));
        }
        errors
    }

    pub fn suggest(&self, word: &str) -> Vec<String> {
        suggest::suggest(word, &self.dictionary)
    }

    /// Add a word to the dictionary. The whole cache is cleared:
    /// mutations are rare, and a full clear is cheaper than chasing
    /// stale entries for every casing of the word.
    pub fn add_word(&mut self, word: &str) {
        self.dictionary.add_word(word);
        self.cache.clear();
    }

    /// Suppress a word (exact case) from future reports.
    pub fn ignore_word(&mut self, word: &str) {
        self.ignored.insert(word.to_string());
        self.cache.clear();
    }

    pub fn is_ignored(&self, word: &str) -> bool {
        self.ignored.contains(word)
    }
}
