//! Storage backend abstraction for the document store.
//!
//! [`StoreBackend`] is the seam between the [`DocumentStore`](crate::store::DocumentStore),
//! which owns identifier policy, and the structure that actually holds documents and
//! evaluates filter expressions against them.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances

use std::fmt::Debug;

use crate::{document::Document, error::DocumentStoreResult, query::Expr};

/// Abstract interface for document storage backends.
///
/// Backends hold documents keyed by identifier and must iterate them in insertion
/// order: queries return matches in that order, and removing an entry must not
/// reorder the remaining ones.
///
/// Backends are plain single-owner values. Mutating methods take `&mut self`; wrap
/// the store in a [`SharedDocumentStore`](crate::shared::SharedDocumentStore) to share
/// it between tasks.
pub trait StoreBackend: Send + Sync + Debug {
    /// Returns `true` if a document is stored under `id`.
    fn contains(&self, id: &str) -> bool;

    /// Stores `document` under `id`, replacing any previous entry with that id.
    ///
    /// The store never calls this with an id that is already present.
    fn insert(&mut self, id: String, document: Document);

    /// Returns the document stored under `id`.
    fn get(&self, id: &str) -> Option<&Document>;

    /// Removes and returns the document stored under `id`.
    fn remove(&mut self, id: &str) -> Option<Document>;

    /// Returns the documents matching `filter`, or every document when `filter` is
    /// `None`, in insertion order.
    fn query(&self, filter: Option<&Expr>) -> Vec<Document>;

    /// Removes every document.
    fn clear(&mut self);

    /// Returns the number of stored documents.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Factory trait for constructing [`StoreBackend`] instances.
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    /// Builds the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be initialized.
    fn build(self) -> DocumentStoreResult<Self::Backend>;
}
