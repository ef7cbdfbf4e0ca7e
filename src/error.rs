//! Error types for the recommendation engine.
//!
//! Load-time failures are fatal to building a snapshot. A title that is
//! simply absent from the corpus is not an error; it is reported as
//! `Recommendations::TitleNotFound` by the recommender.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dataset source could not be opened or read at all.
    #[error("failed to read dataset {path:?}: {source}")]
    DatasetUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset was readable but contained no rows that parse
    /// against the expected columns.
    #[error("dataset {path:?} contains no usable rows")]
    EmptyDataset { path: PathBuf },
}

/// Result type alias for readnext operations
pub type Result<T> = std::result::Result<T, LoadError>;
