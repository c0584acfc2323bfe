use crate::options::ProcessingOptions;
use crate::stemmer::stem;
use crate::stopwords::StopwordSet;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref LOWER_WORD: Regex = Regex::new(r"[a-z]+").expect("valid regex");
    static ref ANY_CASE_WORD: Regex = Regex::new(r"[A-Za-z]+").expect("valid regex");
}

/// Split text into maximal runs of ASCII letters, honouring the case policy.
/// Digits, punctuation and non-ASCII letters all act as separators.
pub fn extract_words(text: &str, case_sensitive: bool) -> Vec<String> {
    if case_sensitive {
        ANY_CASE_WORD.find_iter(text).map(|m| m.as_str().to_string()).collect()
    } else {
        let lowered = text.to_lowercase();
        LOWER_WORD.find_iter(&lowered).map(|m| m.as_str().to_string()).collect()
    }
}

/// Tokenize one document: extract words, drop stopwords, drop excluded words,
/// then optionally stem. Order and duplicates are preserved.
pub fn tokenize(text: &str, options: &ProcessingOptions, stopwords: &StopwordSet) -> Vec<String> {
    let mut tokens = extract_words(text, options.case_sensitive);

    if options.remove_stopwords {
        tokens.retain(|t| !stopwords.contains(&t.to_lowercase()));
    }
    if !options.exclude_words.is_empty() {
        // entries may have been inserted without going through the builder
        let excluded: HashSet<String> = options.exclude_words.iter().map(|w| w.to_lowercase()).collect();
        tokens.retain(|t| !excluded.contains(&t.to_lowercase()));
    }
    if options.apply_stemming {
        tokens = tokens.iter().map(|t| stem(t)).collect();
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop() -> StopwordSet {
        StopwordSet::from_words(["the", "and"])
    }

    #[test]
    fn letters_only() {
        let w = extract_words("Hello, world! abc123def 42 café", false);
        assert_eq!(w, vec!["hello", "world", "abc", "def", "caf"]);
    }

    #[test]
    fn case_sensitive_keeps_case() {
        let w = extract_words("The Cat the cat", true);
        assert_eq!(w, vec!["The", "Cat", "the", "cat"]);
    }

    #[test]
    fn stopwords_match_lowercase_form_in_case_sensitive_mode() {
        let opts = ProcessingOptions::new().with_case_sensitive(true);
        assert_eq!(tokenize("The Cat AND dog", &opts, &stop()), vec!["Cat", "dog"]);
    }

    #[test]
    fn stopwords_can_be_kept() {
        let opts = ProcessingOptions::new().with_remove_stopwords(false);
        assert_eq!(tokenize("the cat", &opts, &stop()), vec!["the", "cat"]);
    }

    #[test]
    fn exclusion_and_stemming() {
        let opts = ProcessingOptions::new().with_exclude_list("Dogs").with_stemming(true);
        let t = tokenize("the cats and DOGS chased cats", &opts, &stop());
        assert_eq!(t, vec!["cat", "chased", "cat"]);
    }

    #[test]
    fn mixed_case_exclusions_inserted_directly_still_match() {
        let mut opts = ProcessingOptions::new().with_case_sensitive(true);
        opts.exclude_words.insert("Dog".into());
        assert_eq!(tokenize("dog DOG Dog cat", &opts, &stop()), vec!["cat"]);
    }

    #[test]
    fn stopwords_are_dropped_before_stemming() {
        let opts = ProcessingOptions::new().with_stemming(true);
        let stop = StopwordSet::english();
        // "does" would stem to "doe", which is not a stopword
        assert_eq!(tokenize("does cats", &opts, &stop), vec!["cat"]);
    }

    #[test]
    fn blank_text_yields_nothing() {
        let opts = ProcessingOptions::default();
        assert!(tokenize("", &opts, &stop()).is_empty());
        assert!(tokenize("  \n\t 123 !!", &opts, &stop()).is_empty());
    }
}
