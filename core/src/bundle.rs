use crate::csv::to_csv;
use crate::error::{MatrixError, MatrixResult};
use crate::matrix::{build_counts, build_incidence, build_tfidf, term_frequencies, Matrix};
use crate::options::ProcessingOptions;
use crate::stopwords::StopwordSet;
use crate::tokenizer::tokenize;
use crate::vocabulary::{build_vocabulary, term_index};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A titled input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub text: String,
}

impl Document {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self { title: title.into(), text: text.into() }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Everything produced by one processing run.
///
/// `vocabulary`, the three matrices and `term_frequencies` are indexed by the
/// same term order. Fields are private so that order can only change through
/// [`ResultBundle::reordered`], which moves all of them together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultBundle {
    document_titles: Vec<String>,
    vocabulary: Vec<String>,
    incidence: Matrix<u8>,
    counts: Matrix<u32>,
    tfidf: Matrix<f64>,
    term_frequencies: Vec<u64>,
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

/// Run the whole pipeline over `documents`.
///
/// Fails with [`MatrixError::EmptyInput`] when there are no documents or every
/// document is blank. Blank documents among non-blank ones still get a column.
pub fn process_documents(
    documents: &[Document],
    options: &ProcessingOptions,
    stopwords: &StopwordSet,
) -> MatrixResult<ResultBundle> {
    if documents.iter().all(Document::is_blank) {
        return Err(MatrixError::EmptyInput);
    }

    let tokens: Vec<Vec<String>> = documents
        .iter()
        .map(|doc| {
            let t = tokenize(&doc.text, options, stopwords);
            tracing::trace!(title = %doc.title, tokens = t.len(), "tokenized");
            t
        })
        .collect();

    let vocabulary = build_vocabulary(&tokens);
    let incidence = build_incidence(&vocabulary, &tokens);
    let counts = build_counts(&vocabulary, &tokens);
    let tfidf = build_tfidf(&counts, documents.len());
    let term_frequencies = term_frequencies(&counts);
    tracing::debug!(num_docs = documents.len(), num_terms = vocabulary.len(), "built term matrices");

    Ok(ResultBundle {
        document_titles: documents.iter().map(|d| d.title.clone()).collect(),
        positions: positions_of(&vocabulary),
        vocabulary,
        incidence,
        counts,
        tfidf,
        term_frequencies,
    })
}

/// Which of the three matrices to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixKind {
    Incidence,
    Count,
    Tfidf,
}

impl MatrixKind {
    pub const ALL: [MatrixKind; 3] = [MatrixKind::Incidence, MatrixKind::Count, MatrixKind::Tfidf];

    pub fn name(self) -> &'static str {
        match self {
            MatrixKind::Incidence => "incidence",
            MatrixKind::Count => "count",
            MatrixKind::Tfidf => "tfidf",
        }
    }

    /// Download name used for the exported CSV.
    pub fn file_name(self) -> &'static str {
        match self {
            MatrixKind::Incidence => "incidence_matrix.csv",
            MatrixKind::Count => "count_matrix.csv",
            MatrixKind::Tfidf => "tfidf_matrix.csv",
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatrixKind {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "incidence" => Ok(MatrixKind::Incidence),
            "count" | "counts" => Ok(MatrixKind::Count),
            "tfidf" | "tf-idf" | "weight" => Ok(MatrixKind::Tfidf),
            _ => Err(MatrixError::UnknownMatrixKind(s.to_string())),
        }
    }
}

/// Row orderings offered for display and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermOrder {
    /// Byte order of the term strings, as produced by processing.
    #[default]
    Alphabetical,
    /// Highest total frequency first, ties by term.
    Frequency,
}

impl FromStr for TermOrder {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabetical" | "alpha" | "name" => Ok(TermOrder::Alphabetical),
            "frequency" | "freq" => Ok(TermOrder::Frequency),
            _ => Err(MatrixError::UnknownTermOrder(s.to_string())),
        }
    }
}

impl ResultBundle {
    pub fn document_titles(&self) -> &[String] {
        &self.document_titles
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn incidence(&self) -> &Matrix<u8> {
        &self.incidence
    }

    pub fn counts(&self) -> &Matrix<u32> {
        &self.counts
    }

    pub fn tfidf(&self) -> &Matrix<f64> {
        &self.tfidf
    }

    pub fn term_frequencies(&self) -> &[u64] {
        &self.term_frequencies
    }

    pub fn num_terms(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn num_docs(&self) -> usize {
        self.document_titles.len()
    }

    /// Row index of `term`, if present.
    pub fn term_position(&self, term: &str) -> Option<usize> {
        self.positions.get(term).copied()
    }

    /// New bundle whose row `i` is row `permutation[i]` of this one.
    pub fn reordered(&self, permutation: &[usize]) -> MatrixResult<ResultBundle> {
        validate_permutation(permutation, self.num_terms())?;
        Ok(self.project(permutation))
    }

    fn project(&self, perm: &[usize]) -> ResultBundle {
        let vocabulary: Vec<String> = perm.iter().map(|&i| self.vocabulary[i].clone()).collect();
        ResultBundle {
            document_titles: self.document_titles.clone(),
            positions: positions_of(&vocabulary),
            vocabulary,
            incidence: self.incidence.select_rows(perm),
            counts: self.counts.select_rows(perm),
            tfidf: self.tfidf.select_rows(perm),
            term_frequencies: perm.iter().map(|&i| self.term_frequencies[i]).collect(),
        }
    }

    /// Permutation that would put the rows in `order`.
    pub fn order_permutation(&self, order: TermOrder) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..self.num_terms()).collect();
        let v = &self.vocabulary;
        match order {
            TermOrder::Alphabetical => idx.sort_by(|&a, &b| v[a].cmp(&v[b])),
            TermOrder::Frequency => {
                let f = &self.term_frequencies;
                idx.sort_by(|&a, &b| f[b].cmp(&f[a]).then_with(|| v[a].cmp(&v[b])))
            }
        }
        idx
    }

    pub fn sorted(&self, order: TermOrder) -> ResultBundle {
        self.project(&self.order_permutation(order))
    }

    /// Indices of terms containing `query`, case-insensitively. An empty query matches all.
    pub fn search_terms(&self, query: &str) -> Vec<usize> {
        let q = query.trim().to_lowercase();
        self.vocabulary
            .iter()
            .enumerate()
            .filter(|(_, t)| t.to_lowercase().contains(&q))
            .map(|(i, _)| i)
            .collect()
    }

    /// CSV rendering of one matrix with this bundle's labels.
    pub fn to_csv(&self, kind: MatrixKind) -> String {
        let titles = &self.document_titles;
        let terms = &self.vocabulary;
        match kind {
            MatrixKind::Incidence => to_csv(&self.incidence, titles, terms),
            MatrixKind::Count => to_csv(&self.counts, titles, terms),
            MatrixKind::Tfidf => to_csv(&self.tfidf, titles, terms),
        }
    }
}

fn positions_of(vocabulary: &[String]) -> HashMap<String, usize> {
    term_index(vocabulary).into_iter().map(|(t, i)| (t.to_string(), i)).collect()
}

fn validate_permutation(permutation: &[usize], len: usize) -> MatrixResult<()> {
    if permutation.len() != len {
        return Err(MatrixError::InvalidPermutation(format!(
            "expected {len} indices, got {}",
            permutation.len()
        )));
    }
    let mut seen = vec![false; len];
    for &i in permutation {
        match seen.get_mut(i) {
            None => return Err(MatrixError::InvalidPermutation(format!("index {i} out of range"))),
            Some(true) => return Err(MatrixError::InvalidPermutation(format!("index {i} repeated"))),
            Some(slot) => *slot = true,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> ResultBundle {
        let docs = vec![
            Document::new("A", "apple banana apple"),
            Document::new("B", "banana cherry"),
            Document::new("C", "banana"),
        ];
        process_documents(&docs, &ProcessingOptions::default(), &StopwordSet::empty()).unwrap()
    }

    #[test]
    fn frequency_order_breaks_ties_by_name() {
        let b = bundle().sorted(TermOrder::Frequency);
        assert_eq!(b.vocabulary(), &["banana", "apple", "cherry"]);
        assert_eq!(b.term_frequencies(), &[3, 2, 1]);
        assert_eq!(b.counts().row(1), &[2, 0, 0]);
    }

    #[test]
    fn reordered_rejects_non_permutations() {
        let b = bundle();
        assert!(matches!(b.reordered(&[0, 1]), Err(MatrixError::InvalidPermutation(_))));
        assert!(matches!(b.reordered(&[0, 0, 1]), Err(MatrixError::InvalidPermutation(_))));
        assert!(matches!(b.reordered(&[0, 1, 7]), Err(MatrixError::InvalidPermutation(_))));
        assert_eq!(b.reordered(&[0, 1, 2]).unwrap(), b);
    }

    #[test]
    fn term_position_follows_reordering() {
        let b = bundle();
        assert_eq!(b.term_position("cherry"), Some(2));
        assert_eq!(b.term_position("durian"), None);
        let f = b.sorted(TermOrder::Frequency);
        assert_eq!(f.term_position("banana"), Some(0));
        assert_eq!(f.term_position("cherry"), Some(2));
        let r = b.reordered(&[2, 0, 1]).unwrap();
        assert_eq!(r.term_position("cherry"), Some(0));
        assert_eq!(r.term_position("apple"), Some(1));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let b = bundle();
        assert_eq!(b.search_terms("AN"), vec![1]);
        assert_eq!(b.search_terms("").len(), 3);
        assert!(b.search_terms("zzz").is_empty());
    }

    #[test]
    fn parses_kind_and_order() {
        assert_eq!("TF-IDF".parse::<MatrixKind>().unwrap(), MatrixKind::Tfidf);
        assert_eq!("count".parse::<MatrixKind>().unwrap(), MatrixKind::Count);
        assert!("graph".parse::<MatrixKind>().is_err());
        assert_eq!("freq".parse::<TermOrder>().unwrap(), TermOrder::Frequency);
    }
}
