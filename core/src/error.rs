use thiserror::Error;

/// Errors surfaced by the matrix pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// No document carried any non-whitespace text.
    #[error("no documents with content to process")]
    EmptyInput,

    /// A reordering was requested with something other than a permutation of the term indices.
    #[error("invalid term permutation: {0}")]
    InvalidPermutation(String),

    #[error("unknown matrix kind: {0} (expected incidence, count or tfidf)")]
    UnknownMatrixKind(String),

    #[error("unknown term order: {0} (expected alphabetical or frequency)")]
    UnknownTermOrder(String),
}

pub type MatrixResult<T> = Result<T, MatrixError>;
