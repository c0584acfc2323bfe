//! Term-by-document matrices from raw text.
//!
//! [`process_documents`] tokenizes each document, builds a sorted vocabulary
//! and returns a [`ResultBundle`] holding the incidence, count and TF-IDF
//! matrices together with per-term corpus frequencies.

pub mod bundle;
pub mod csv;
pub mod error;
pub mod export;
pub mod highlight;
pub mod matrix;
pub mod options;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
pub mod vocabulary;

pub use bundle::{process_documents, Document, MatrixKind, ResultBundle, TermOrder};
pub use csv::to_csv;
pub use error::{MatrixError, MatrixResult};
pub use highlight::{highlight_bands, Band};
pub use matrix::Matrix;
pub use options::ProcessingOptions;
pub use stemmer::stem;
pub use stopwords::StopwordSet;
