//! In-memory storage implementation for document stores.
//!
//! This module provides a simple in-memory backend that keeps documents in an
//! insertion-ordered map keyed by document id.

use indexmap::IndexMap;

use docshelf_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document,
    error::DocumentStoreResult,
    query::Expr,
};

use crate::evaluator::DocumentEvaluator;

type DocumentMap = IndexMap<String, Document>;

/// In-memory document storage backend.
///
/// Documents are kept in insertion order. Queries scan every document (no indexing),
/// and removing a document keeps the relative order of the remaining ones.
///
/// The backend is a plain owned value with no internal locking; share it between
/// tasks through [`SharedDocumentStore`](docshelf_core::shared::SharedDocumentStore).
///
/// # Example
///
/// ```ignore
/// use docshelf_memory::InMemoryStore;
/// use docshelf::store::DocumentStore;
///
/// let mut store = DocumentStore::new(InMemoryStore::new());
/// let saved = store.save(document);
/// assert!(store.find_by_id(saved.id().unwrap()).is_some());
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// document_id -> document, in insertion order
    documents: DocumentMap,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self {
            documents: DocumentMap::new(),
        }
    }

    /// Creates a new empty store with room for `capacity` documents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: DocumentMap::with_capacity(capacity),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use docshelf_memory::InMemoryStore;
    /// use docshelf::backend::StoreBackendBuilder;
    ///
    /// let store = InMemoryStore::builder().capacity(1024).build().unwrap();
    /// ```
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }
}

impl StoreBackend for InMemoryStore {
    fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    fn insert(&mut self, id: String, document: Document) {
        self.documents.insert(id, document);
    }

    fn get(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    fn remove(&mut self, id: &str) -> Option<Document> {
        self.documents.shift_remove(id)
    }

    fn query(&self, filter: Option<&Expr>) -> Vec<Document> {
        match filter {
            Some(filter) => DocumentEvaluator::filter_documents(
                self.documents.values(),
                filter,
            ),
            None => self.documents
                .values()
                .cloned()
                .collect::<Vec<_>>(),
        }
    }

    fn clear(&mut self) {
        self.documents.clear();
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
///
/// # Example
///
/// ```ignore
/// use docshelf_memory::InMemoryStore;
/// use docshelf::backend::StoreBackendBuilder;
///
/// let store = InMemoryStore::builder().build().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStoreBuilder {
    capacity: Option<usize>,
}

impl InMemoryStoreBuilder {
    /// Pre-allocates room for `capacity` documents.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    fn build(self) -> DocumentStoreResult<Self::Backend> {
        Ok(match self.capacity {
            Some(capacity) => InMemoryStore::with_capacity(capacity),
            None => InMemoryStore::new(),
        })
    }
}
