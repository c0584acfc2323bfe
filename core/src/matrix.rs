//! Term-by-document matrices and the functions that build them.
//!
//! Every matrix is stored row-major: one row per vocabulary term, one column
//! per document, in input order.

use crate::vocabulary::term_index;
use serde::ser::{Serialize, Serializer};
use std::collections::HashSet;

/// Dense T×D grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Matrix<T> {
    /// A matrix filled with `T::default()`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![T::default(); rows * cols] }
    }
}

impl<T> Matrix<T> {
    /// Build from nested rows. Panics if the rows are ragged.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(rows.iter().all(|r| r.len() == cols), "ragged matrix rows");
        let n = rows.len();
        Self { rows: n, cols, data: rows.into_iter().flatten().collect() }
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.cols + col]
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Matrix<U> {
        Matrix { rows: self.rows, cols: self.cols, data: self.data.iter().map(f).collect() }
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }
}

impl<T: Clone> Matrix<T> {
    /// New matrix whose row `i` is row `order[i]` of `self`. `order` must hold valid row indices.
    pub fn select_rows(&self, order: &[usize]) -> Self {
        let mut data = Vec::with_capacity(order.len() * self.cols);
        for &r in order {
            data.extend_from_slice(self.row(r));
        }
        Self { rows: order.len(), cols: self.cols, data }
    }
}

/// Serialized as an array of rows.
impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// 1 where the term occurs in the document at least once.
pub fn build_incidence<D, T>(vocabulary: &[String], per_document_tokens: &[D]) -> Matrix<u8>
where
    D: AsRef<[T]>,
    T: AsRef<str>,
{
    let index = term_index(vocabulary);
    let mut m = Matrix::zeros(vocabulary.len(), per_document_tokens.len());
    for (doc, tokens) in per_document_tokens.iter().enumerate() {
        let distinct: HashSet<&str> = tokens.as_ref().iter().map(|t| t.as_ref()).collect();
        for term in distinct {
            if let Some(&row) = index.get(term) {
                *m.cell_mut(row, doc) = 1;
            }
        }
    }
    m
}

/// Occurrences of each term in each document.
pub fn build_counts<D, T>(vocabulary: &[String], per_document_tokens: &[D]) -> Matrix<u32>
where
    D: AsRef<[T]>,
    T: AsRef<str>,
{
    let index = term_index(vocabulary);
    let mut m = Matrix::zeros(vocabulary.len(), per_document_tokens.len());
    for (doc, tokens) in per_document_tokens.iter().enumerate() {
        for token in tokens.as_ref() {
            if let Some(&row) = index.get(token.as_ref()) {
                *m.cell_mut(row, doc) += 1;
            }
        }
    }
    m
}

/// Number of documents in which each term has a non-zero count.
pub fn document_frequencies(counts: &Matrix<u32>) -> Vec<u32> {
    counts.rows().map(|row| row.iter().filter(|&&c| c > 0).count() as u32).collect()
}

/// `count × log10(D / df)`, rounded to three decimals. Rows with zero document
/// frequency produce zeros.
pub fn build_tfidf(counts: &Matrix<u32>, document_count: usize) -> Matrix<f64> {
    let dfs = document_frequencies(counts);
    let mut m = Matrix::zeros(counts.num_rows(), counts.num_cols());
    for (row, df) in dfs.iter().enumerate() {
        if *df == 0 {
            continue;
        }
        let idf = (document_count as f64 / *df as f64).log10();
        for (col, &count) in counts.row(row).iter().enumerate() {
            *m.cell_mut(row, col) = round3(count as f64 * idf);
        }
    }
    m
}

/// Total corpus frequency of each term.
pub fn term_frequencies(counts: &Matrix<u32>) -> Vec<u64> {
    counts.rows().map(|row| row.iter().map(|&c| u64::from(c)).sum()).collect()
}

/// Round to three decimal places from the exact binary value of `x`, so
/// 1.0005 (stored as 1.000499...) becomes 1.0 as with JavaScript's `toFixed(3)`.
/// Exact binary ties round to even.
pub fn round3(x: f64) -> f64 {
    format!("{x:.3}").parse().unwrap_or(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> (Vec<String>, Vec<Vec<&'static str>>) {
        let vocab = vec!["cat".to_string(), "dog".to_string(), "sat".to_string()];
        let docs = vec![vec!["cat", "sat", "cat"], vec!["dog", "sat"]];
        (vocab, docs)
    }

    #[test]
    fn incidence_and_counts() {
        let (vocab, docs) = corpus();
        let inc = build_incidence(&vocab, &docs);
        let cnt = build_counts(&vocab, &docs);
        assert_eq!(inc, Matrix::from_rows(vec![vec![1, 0], vec![0, 1], vec![1, 1]]));
        assert_eq!(cnt, Matrix::from_rows(vec![vec![2, 0], vec![0, 1], vec![1, 1]]));
    }

    #[test]
    fn tfidf_values() {
        let (vocab, docs) = corpus();
        let cnt = build_counts(&vocab, &docs);
        let tfidf = build_tfidf(&cnt, 2);
        assert_eq!(tfidf.row(0), &[0.602, 0.0]);
        assert_eq!(tfidf.row(1), &[0.0, 0.301]);
        assert_eq!(tfidf.row(2), &[0.0, 0.0]);
    }

    #[test]
    fn tfidf_guards_zero_document_frequency() {
        let cnt = Matrix::from_rows(vec![vec![0u32, 0], vec![3, 0]]);
        let tfidf = build_tfidf(&cnt, 2);
        assert_eq!(tfidf.row(0), &[0.0, 0.0]);
        assert_eq!(tfidf.row(1), &[0.903, 0.0]);
    }

    #[test]
    fn frequencies_are_row_sums() {
        let (vocab, docs) = corpus();
        let cnt = build_counts(&vocab, &docs);
        assert_eq!(term_frequencies(&cnt), vec![2, 1, 2]);
        assert_eq!(document_frequencies(&cnt), vec![1, 1, 2]);
    }

    #[test]
    fn select_rows_permutes() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let p = m.select_rows(&[2, 0, 1]);
        assert_eq!(p, Matrix::from_rows(vec![vec![5, 6], vec![1, 2], vec![3, 4]]));
        assert_eq!(p.get(0, 1), Some(&6));
        assert_eq!(p.get(3, 0), None);
    }

    #[test]
    fn serializes_as_nested_rows() {
        let m = Matrix::from_rows(vec![vec![1u32, 0], vec![0, 2]]);
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[1,0],[0,2]]");
    }

    #[test]
    fn rounding() {
        assert_eq!(round3(0.30103), 0.301);
        assert_eq!(round3(0.9030899), 0.903);
        assert_eq!(round3(0.0), 0.0);
        assert_eq!(round3(1.0005), 1.0);
        assert_eq!(round3(2.0 * 2f64.log10()), 0.602);
    }
}
