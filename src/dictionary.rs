use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// Word-membership structure used for spell checking.
///
/// Every key is stored lowercase, so lookups are case-insensitive.
/// Keys are kept in a `BTreeSet` so that all words sharing a prefix
/// can be enumerated with a range query instead of a full scan.
#[derive(Debug, Default)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.add_word(word.as_ref());
        }
        dictionary
    }

    /// Read a newline-delimited word list. Each non-empty line (after
    /// trimming) becomes one entry. IO errors fail the whole load - no
    /// partial dictionary is ever produced.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = Self::new();
        for line in reader.lines() {
            let line = line.context("Could not read line from word list")?;
            dictionary.add_word(line.trim());
        }
        Ok(dictionary)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open '{}' for reading", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not load word list from '{}'", path.display()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Insert a word, lowercased. Inserting an existing word or an
    /// empty string is a no-op. Callers holding a `CorrectnessCache`
    /// must invalidate it after this returns.
    pub fn add_word(&mut self, word: &str) {
        let word = word.to_lowercase();
        if word.is_empty() {
            return;
        }
        self.words.insert(word);
    }

    /// All stored keys starting with `prefix`, each exactly once.
    /// Returns a fresh iterator on every call.
    pub fn words_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.words
            .range(prefix.to_string()..)
            .take_while(move |w| w.starts_with(prefix))
            .map(|w| w.as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_contains_is_case_insensitive() {
        let mut dictionary = Dictionary::from_words(["Hello", "world"]);
        dictionary.add_word("FOO");

        assert!(dictionary.contains("hello"));
        assert!(dictionary.contains("HELLO"));
        assert!(dictionary.contains("World"));
        assert!(dictionary.contains("foo"));
        assert!(!dictionary.contains("bar"));
    }

    #[test]
    fn test_duplicate_insertion_is_a_noop() {
        let mut dictionary = Dictionary::from_words(["hello"]);
        dictionary.add_word("hello");
        dictionary.add_word("Hello");

        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn test_empty_words_are_discarded() {
        let dictionary = Dictionary::from_words(["", "hello", ""]);

        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn test_words_with_prefix() {
        let dictionary = Dictionary::from_words(["example", "excellent", "other", "exam"]);

        let actual: Vec<_> = dictionary.words_with_prefix("ex").collect();

        assert_eq!(&actual, &["exam", "example", "excellent"]);
    }

    #[test]
    fn test_words_with_prefix_no_match() {
        let dictionary = Dictionary::from_words(["example"]);

        assert_eq!(dictionary.words_with_prefix("z").count(), 0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Hello\n\n  world  \n").unwrap();

        let dictionary = Dictionary::load(file.path()).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("hello"));
        assert!(dictionary.contains("world"));
    }

    #[test]
    fn test_load_missing_file() {
        let actual = Dictionary::load(Path::new("no/such/file.txt"));

        assert!(actual.is_err());
    }
}
