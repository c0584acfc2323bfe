use std::collections::{BTreeSet, HashMap};

/// Union of every document's tokens, deduplicated and sorted by byte order.
pub fn build_vocabulary<D, T>(per_document_tokens: &[D]) -> Vec<String>
where
    D: AsRef<[T]>,
    T: AsRef<str>,
{
    let terms: BTreeSet<&str> = per_document_tokens
        .iter()
        .flat_map(|doc| doc.as_ref().iter().map(|t| t.as_ref()))
        .collect();
    terms.into_iter().map(str::to_string).collect()
}

/// Map from term to its row index.
pub(crate) fn term_index(vocabulary: &[String]) -> HashMap<&str, usize> {
    vocabulary.iter().enumerate().map(|(i, t)| (t.as_str(), i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_and_deduplicated() {
        let docs = vec![vec!["sat", "cat", "sat"], vec!["dog", "cat"]];
        assert_eq!(build_vocabulary(&docs), vec!["cat", "dog", "sat"]);
    }

    #[test]
    fn ordinal_not_locale_order() {
        let docs = vec![vec!["apple", "Banana", "Apple"]];
        assert_eq!(build_vocabulary(&docs), vec!["Apple", "Banana", "apple"]);
    }

    #[test]
    fn empty_documents() {
        let docs: Vec<Vec<String>> = vec![vec![], vec![]];
        assert!(build_vocabulary(&docs).is_empty());
    }
}
