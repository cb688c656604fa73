//! Error types and result types for document store operations.
//!
//! Saving, searching and clearing never fail. The errors below are only produced
//! when a caller forces a lookup that has no result, or builds a document without
//! one of its required fields. Use [`DocumentStoreResult<T>`] as the return type
//! for fallible operations.

use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a document store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentStoreError {
    /// The requested document was not found in the store.
    /// The argument is the document ID that was looked up.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),
    /// A document was built without one of its required fields.
    /// The argument names the missing field.
    #[error("Invalid document: missing field `{0}`")]
    InvalidDocument(String),
}

/// A specialized `Result` type for document store operations.
///
/// This type alias is used throughout the crate to indicate operations that may fail
/// with a [`DocumentStoreError`].
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;
