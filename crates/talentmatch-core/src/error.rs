//! Error types for the talentmatch-core library.
//!
//! Extraction and matching never fail: malformed input yields default
//! records. Only the collaborators around them (record store, document
//! loading, configuration) can return errors.

use thiserror::Error;

/// Main error type for the talentmatch library.
#[derive(Error, Debug)]
pub enum TalentError {
    /// Record store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Document loading error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not hold a valid store document.
    #[error("store file is corrupt: {0}")]
    Corrupt(String),

    /// Failed to serialize the records.
    #[error("failed to serialize records: {0}")]
    Serialize(String),
}

/// Errors related to turning a document file into plain text.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file extension is not one we can decode.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// PDF text extraction failed.
    #[error("failed to extract PDF text: {0}")]
    Pdf(String),

    /// The file is not valid UTF-8 text.
    #[error("document is not valid UTF-8: {0}")]
    Encoding(String),

    /// I/O error while reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the talentmatch library.
pub type Result<T> = std::result::Result<T, TalentError>;
