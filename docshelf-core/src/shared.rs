//! Lock-guarded document store for sharing between async tasks.
//!
//! [`DocumentStore`] itself is single-owner. [`SharedDocumentStore`] puts it behind an
//! async-aware read-write lock so clones of the handle can be used concurrently:
//! lookups and searches take the read lock, mutations take the write lock.

use mea::rwlock::RwLock;
use std::sync::Arc;

use crate::{
    backend::StoreBackend,
    document::Document,
    error::DocumentStoreResult,
    query::SearchRequest,
    store::DocumentStore,
};

/// A cloneable, lock-guarded handle to a [`DocumentStore`].
///
/// All clones share the same underlying store. Results are returned as owned copies,
/// so no lock is held once a method returns.
///
/// # Example
///
/// ```ignore
/// use docshelf::{prelude::*, memory::InMemoryStore};
///
/// let store = SharedDocumentStore::new(DocumentStore::new(InMemoryStore::new()));
/// let handle = store.clone();
///
/// tokio::spawn(async move {
///     handle.save(document).await;
/// });
/// ```
#[derive(Debug)]
pub struct SharedDocumentStore<B: StoreBackend> {
    inner: Arc<RwLock<DocumentStore<B>>>,
}

impl<B: StoreBackend> Clone for SharedDocumentStore<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: StoreBackend> SharedDocumentStore<B> {
    pub fn new(store: DocumentStore<B>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// See [`DocumentStore::save`].
    pub async fn save(&self, document: Document) -> Document {
        self.inner
            .write()
            .await
            .save(document)
    }

    /// See [`DocumentStore::find_by_id`].
    pub async fn find_by_id(&self, id: &str) -> Option<Document> {
        self.inner
            .read()
            .await
            .find_by_id(id)
            .cloned()
    }

    /// See [`DocumentStore::get_by_id`].
    pub async fn get_by_id(&self, id: &str) -> DocumentStoreResult<Document> {
        self.inner
            .read()
            .await
            .get_by_id(id)
            .cloned()
    }

    /// See [`DocumentStore::search`].
    pub async fn search(&self, request: &SearchRequest) -> Vec<Document> {
        self.inner
            .read()
            .await
            .search(request)
    }

    /// See [`DocumentStore::delete`].
    pub async fn delete(&self, id: &str) -> DocumentStoreResult<Document> {
        self.inner
            .write()
            .await
            .delete(id)
    }

    /// See [`DocumentStore::clear`].
    pub async fn clear(&self) {
        self.inner
            .write()
            .await
            .clear()
    }

    pub async fn len(&self) -> usize {
        self.inner
            .read()
            .await
            .len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner
            .read()
            .await
            .is_empty()
    }
}

impl<B: StoreBackend> From<DocumentStore<B>> for SharedDocumentStore<B> {
    fn from(store: DocumentStore<B>) -> Self {
        Self::new(store)
    }
}
