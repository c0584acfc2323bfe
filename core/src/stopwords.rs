use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

const ENGLISH: &[&str] = &[
    "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
    "be","because","been","before","being","below","between","both","but","by",
    "can","cannot","could",
    "did","do","does","doing","down","during",
    "each","few","for","from","further",
    "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
    "i","if","in","into","is","it","its","itself",
    "just","me","more","most","my","myself",
    "no","nor","not","now","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
    "same","she","should","so","some","such",
    "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
    "under","until","up","very",
    "was","we","were","what","when","where","which","while","who","whom","why","will","with","would",
    "you","your","yours","yourself","yourselves",
];

/// Immutable set of lowercase stopwords.
///
/// The set is a plain value handed to the tokenizer, so callers can swap in a
/// custom list without touching any process-wide state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The built-in English list.
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// A set that filters nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a stopword file: one word per line, blank lines and `#` comments ignored.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading stopword file {}", path.display()))?;
        let set = Self::from_words(text.lines().filter(|l| !l.trim_start().starts_with('#')));
        tracing::debug!(path = %path.display(), words = set.len(), "loaded stopwords");
        Ok(set)
    }

    /// Expects an already lowercased word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
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
    fn english_contains_common_words() {
        let s = StopwordSet::english();
        assert!(s.contains("the"));
        assert!(s.contains("and"));
        assert!(!s.contains("matrix"));
    }

    #[test]
    fn custom_words_are_lowercased() {
        let s = StopwordSet::from_words(["The", " Of ", ""]);
        assert_eq!(s.len(), 2);
        assert!(s.contains("the"));
        assert!(s.contains("of"));
    }

    #[test]
    fn loads_file_skipping_comments() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "# custom list\nfoo\n\nBar").unwrap();
        let s = StopwordSet::from_file(f.path()).unwrap();
        assert_eq!(s.len(), 2);
        assert!(s.contains("bar"));
    }
}
