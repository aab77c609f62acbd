//! Error types for loading reference data.

use std::path::PathBuf;

/// Alias for `Result<T, DataError>`.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading reference tables.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A data file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A table is not valid JSON or does not match the expected shape.
    #[error("invalid {table}: {source}")]
    Json {
        /// Which table failed to parse (usually the file name).
        table: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// An odds table key is not a non-negative integer ingredient count.
    #[error("invalid ingredient count key: \"{0}\"")]
    InvalidCount(String),
}
