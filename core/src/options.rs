use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Normalization switches for one processing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingOptions {
    pub remove_stopwords: bool,
    pub apply_stemming: bool,
    pub case_sensitive: bool,
    /// Lowercase words dropped after stopword removal.
    #[serde(deserialize_with = "lowercase_set")]
    pub exclude_words: BTreeSet<String>,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            remove_stopwords: true,
            apply_stemming: false,
            case_sensitive: false,
            exclude_words: BTreeSet::new(),
        }
    }
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remove_stopwords(mut self, on: bool) -> Self {
        self.remove_stopwords = on;
        self
    }

    pub fn with_stemming(mut self, on: bool) -> Self {
        self.apply_stemming = on;
        self
    }

    pub fn with_case_sensitive(mut self, on: bool) -> Self {
        self.case_sensitive = on;
        self
    }

    pub fn with_exclude_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self
    }

    /// Accepts a comma separated list such as `"foo, Bar ,baz"`.
    pub fn with_exclude_list(self, list: &str) -> Self {
        self.with_exclude_words(list.split(','))
    }
}

fn lowercase_set<'de, D>(de: D) -> Result<BTreeSet<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let words: Vec<String> = Vec::deserialize(de)?;
    Ok(ProcessingOptions::default().with_exclude_words(words).exclude_words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = ProcessingOptions::default();
        assert!(o.remove_stopwords);
        assert!(!o.apply_stemming);
        assert!(!o.case_sensitive);
        assert!(o.exclude_words.is_empty());
    }

    #[test]
    fn exclude_list_is_trimmed_and_lowercased() {
        let o = ProcessingOptions::new().with_exclude_list(" Foo, bar ,,BAZ ");
        let words: Vec<&str> = o.exclude_words.iter().map(String::as_str).collect();
        assert_eq!(words, vec!["bar", "baz", "foo"]);
    }

    #[test]
    fn deserializes_partial_json() {
        let o: ProcessingOptions =
            serde_json::from_str(r#"{"apply_stemming": true, "exclude_words": ["Cat"]}"#).unwrap();
        assert!(o.remove_stopwords);
        assert!(o.apply_stemming);
        assert!(o.exclude_words.contains("cat"));
    }
}
