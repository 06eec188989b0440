use std::collections::HashMap;

use crate::Dictionary;

/// Memoizes per-token correctness decisions.
///
/// Keys are the exact token strings, case included: repeated tokens are
/// frequent in real documents and this spares the dictionary descent.
/// Holders must call `clear` (or `invalidate`) whenever the dictionary
/// or the ignore set is mutated, otherwise stale "incorrect" results
/// stick around.
#[derive(Debug, Default)]
pub struct CorrectnessCache {
    entries: HashMap<String, bool>,
}

impl CorrectnessCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_correct(&mut self, word: &str, dictionary: &Dictionary) -> bool {
        if let Some(&cached) = self.entries.get(word) {
            return cached;
        }
        let correct = dictionary.contains(word);
        self.entries.insert(word.to_string(), correct);
        correct
    }

    pub fn invalidate(&mut self, word: &str) {
        self.entries.remove(word);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caches_both_outcomes() {
        let dictionary = Dictionary::from_words(["hello"]);
        let mut cache = CorrectnessCache::new();

        assert!(cache.is_correct("hello", &dictionary));
        assert!(!cache.is_correct("helo", &dictionary));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_entries_are_case_sensitive() {
        let dictionary = Dictionary::from_words(["hello"]);
        let mut cache = CorrectnessCache::new();

        assert!(cache.is_correct("Hello", &dictionary));
        assert!(cache.is_correct("hello", &dictionary));

        // One entry per spelling as typed
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalidate_forces_recomputation() {
        let mut dictionary = Dictionary::new();
        let mut cache = CorrectnessCache::new();

        assert!(!cache.is_correct("hello", &dictionary));

        dictionary.add_word("hello");

        // Stale until invalidated
        assert!(!cache.is_correct("hello", &dictionary));

        cache.invalidate("hello");
        assert!(cache.is_correct("hello", &dictionary));
    }

    #[test]
    fn test_clear() {
        let dictionary = Dictionary::from_words(["hello"]);
        let mut cache = CorrectnessCache::new();
        cache.is_correct("hello", &dictionary);

        cache.clear();

        assert!(cache.is_empty());
    }
}
