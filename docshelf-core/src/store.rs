//! Main document store interface.
//!
//! [`DocumentStore`] wraps a [`StoreBackend`] and owns the identifier policy applied
//! on save: documents without an identifier, or with one that is already taken, are
//! stored under a freshly generated identifier. Existing entries are never
//! overwritten by [`DocumentStore::save`].
//!
//! # Example
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//!
//! let mut store = DocumentStore::new(InMemoryStore::new());
//! let saved = store.save(document);
//! let found = store.find_by_id(saved.id().unwrap());
//! let matches = store.search(&SearchRequest::builder().title_prefixes(["Silent"]).build());
//! ```

use tracing::{debug, trace};

use crate::{
    backend::StoreBackend,
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    id::{IdGenerator, UuidIdGenerator},
    query::{Expr, SearchRequest},
};

/// An insertion-ordered document repository bound to a specific backend implementation.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
    id_generator: Box<dyn IdGenerator>,
}

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store that generates UUID identifiers.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            id_generator: Box::new(UuidIdGenerator),
        }
    }

    /// Creates a builder for configuring a store around `backend`.
    pub fn builder(backend: B) -> DocumentStoreBuilder<B> {
        DocumentStoreBuilder::new(backend)
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Saves a document and returns it as stored.
    ///
    /// - A missing or blank identifier is replaced with a generated one.
    /// - An identifier that is already stored is replaced with a generated one and the
    ///   document is stored as a new entry. The existing entry is left untouched.
    /// - Any other identifier is kept.
    pub fn save(&mut self, mut document: Document) -> Document {
        let requested = if document.has_blank_id() {
            None
        } else {
            document.id.take()
        };

        let id = match requested {
            Some(id) if !self.backend.contains(&id) => id,
            Some(taken) => {
                let id = self.fresh_id();
                debug!(%taken, %id, "document id already stored, assigned a new one");
                id
            }
            None => self.fresh_id(),
        };

        document.id = Some(id.clone());
        self.backend.insert(id.clone(), document.clone());
        debug!(%id, total = self.backend.len(), "saved document");

        document
    }

    /// Returns the document stored under `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Document> {
        self.backend.get(id)
    }

    /// Returns the document stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::DocumentNotFound`] if no document has that id.
    pub fn get_by_id(&self, id: &str) -> DocumentStoreResult<&Document> {
        self.find_by_id(id)
            .ok_or_else(|| DocumentStoreError::DocumentNotFound(id.to_string()))
    }

    /// Returns `true` if a document is stored under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.backend.contains(id)
    }

    /// Returns every stored document matching `request`, in store order.
    pub fn search(&self, request: &SearchRequest) -> Vec<Document> {
        let filter = request.to_expr();
        let matches = self.backend.query(filter.as_ref());
        trace!(matches = matches.len(), total = self.backend.len(), "searched documents");

        matches
    }

    /// Returns every stored document matching `filter`, in store order.
    pub fn query(&self, filter: &Expr) -> Vec<Document> {
        self.backend.query(Some(filter))
    }

    /// Returns every stored document, in store order.
    pub fn documents(&self) -> Vec<Document> {
        self.backend.query(None)
    }

    /// Removes and returns the document stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::DocumentNotFound`] if no document has that id.
    pub fn delete(&mut self, id: &str) -> DocumentStoreResult<Document> {
        let document = self
            .backend
            .remove(id)
            .ok_or_else(|| DocumentStoreError::DocumentNotFound(id.to_string()))?;
        debug!(%id, total = self.backend.len(), "deleted document");

        Ok(document)
    }

    /// Removes every stored document.
    pub fn clear(&mut self) {
        let removed = self.backend.len();
        self.backend.clear();
        debug!(removed, "cleared document store");
    }

    pub fn len(&self) -> usize {
        self.backend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    // Loops until the generator yields an id nothing is stored under.
    fn fresh_id(&self) -> String {
        loop {
            let id = self.id_generator.generate();

            if !self.backend.contains(&id) {
                return id;
            }

            trace!(%id, "generated id already stored, retrying");
        }
    }
}

impl<B: StoreBackend + Default> Default for DocumentStore<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

/// Builder for constructing [`DocumentStore`] instances.
///
/// # Example
///
/// ```ignore
/// use docshelf::{prelude::*, id::SequentialIdGenerator, memory::InMemoryStore};
///
/// let store = DocumentStore::builder(InMemoryStore::new())
///     .id_generator(SequentialIdGenerator::new("doc-"))
///     .build();
/// ```
#[derive(Debug)]
pub struct DocumentStoreBuilder<B: StoreBackend> {
    backend: B,
    id_generator: Option<Box<dyn IdGenerator>>,
}

impl<B: StoreBackend> DocumentStoreBuilder<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            id_generator: None,
        }
    }

    /// Sets the generator used for new identifiers. Defaults to [`UuidIdGenerator`].
    pub fn id_generator(mut self, id_generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Some(Box::new(id_generator));
        self
    }

    pub fn build(self) -> DocumentStore<B> {
        DocumentStore {
            backend: self.backend,
            id_generator: self
                .id_generator
                .unwrap_or_else(|| Box::new(UuidIdGenerator)),
        }
    }
}
