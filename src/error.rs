use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Queries themselves are infallible; errors only arise at the data-loading
/// and serialization boundaries.
#[derive(Error, Debug)]
pub enum PoiIndexError {
    /// A record in the data source could not be read or parsed.
    #[error("Invalid POI record: {0}")]
    InvalidRecord(#[from] csv::Error),

    /// The data source could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Results could not be rendered as JSON.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PoiIndexError>;
