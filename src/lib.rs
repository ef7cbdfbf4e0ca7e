/// This crate is a content-based book recommendation engine built on a
/// TF-IDF vectorizer and pairwise cosine similarity.
pub mod corpus;
pub mod error;
pub mod index;
pub mod recommend;
pub mod similarity;
pub mod vectorizer;

/// Recommendation engine
/// The top-level struct of this crate. It owns one immutable corpus
/// snapshot together with the similarity matrix and title index built
/// from it, and answers "books similar to this title" queries.
///
/// The whole pipeline (load documents, fit TF-IDF, compute the N×N
/// similarity matrix, index titles) runs once at build time; every
/// query afterwards reuses the snapshot through `&self`, so the value
/// can be shared freely across threads. Rebuilding means constructing
/// a new `Recommender`.
pub use recommend::Recommender;

/// Outcome of a query: a ranked list of display records, or a typed
/// not-found signal distinct from an empty list.
pub use recommend::{BookRecord, Recommendations, DEFAULT_TOP_K};

/// Corpus of loaded book rows
/// Reads a comma-delimited dataset, trimming header whitespace and
/// silently skipping rows that fail to parse. Row position within the
/// corpus is the identity every other component keys on.
pub use corpus::{Book, Corpus};

/// TF-IDF Vectorizer
/// Converts the per-book documents into sparse, L2-normalized TF-IDF
/// vectors over a vocabulary fixed at fit time, with English stop
/// words excluded. Fitting is deterministic for a given document order.
pub use vectorizer::{SparseVector, TfidfVectorizer};

/// Pairwise cosine-similarity matrix over all document vectors.
pub use similarity::SimilarityMatrix;

/// Title → first-occurrence row index mapping.
pub use index::TitleIndex;

/// Load-time error taxonomy. Unknown titles are not errors; they are
/// reported through `Recommendations::TitleNotFound`.
pub use error::LoadError;
