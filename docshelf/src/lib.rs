//! Main docshelf crate: an insertion-ordered, in-memory document repository with
//! composable multi-field search.
//!
//! This crate is the primary entry point. It re-exports the core types from
//! `docshelf-core` and the in-memory backend from `docshelf-memory`.
//!
//! # Features
//!
//! - **Id assignment on save** - Missing or already-taken ids are replaced with generated ones
//! - **Multi-criteria search** - Author, content, title and creation time filters, all optional
//! - **Stable ordering** - Results come back in the order documents were saved
//! - **Shared access** - A lock-guarded handle for use from concurrent async tasks
//!
//! # Quick Start
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//! use chrono::{Duration, Utc};
//!
//! let mut store = DocumentStore::new(InMemoryStore::new());
//!
//! store.save(
//!     Document::builder()
//!         .title("Winds of Change")
//!         .content("Exploring the depths of human emotion.")
//!         .author(Author::new("2", "George Orwell"))
//!         .created(Utc::now())
//!         .build()
//!         .unwrap(),
//! );
//!
//! let results = store.search(
//!     &SearchRequest::builder()
//!         .author_ids(["1", "2", "3"])
//!         .contains_contents(["human"])
//!         .title_prefixes(["of"])
//!         .created_to(Utc::now() + Duration::seconds(60))
//!         .build(),
//! );
//!
//! assert_eq!(results.len(), 1);
//! ```
//!
//! # Filter Expressions
//!
//! Search requests compile to filter expressions, which can also be built and run
//! directly:
//!
//! ```ignore
//! use docshelf::prelude::*;
//!
//! let by_name = Filter::starts_with(DocumentField::AuthorName, "George")
//!     .and(Filter::ends_with(DocumentField::Content, "."));
//!
//! let results = store.query(&by_name);
//! ```
//!
//! # Shared Access
//!
//! `DocumentStore` requires `&mut` access for writes. To use one store from several
//! async tasks, wrap it in a [`SharedDocumentStore`](prelude::SharedDocumentStore):
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//!
//! let shared = SharedDocumentStore::new(DocumentStore::new(InMemoryStore::new()));
//! let saved = shared.clone().save(document).await;
//! let found = shared.get_by_id(saved.id().unwrap()).await?;
//! ```
//!
//! # Backends
//!
//! - [`memory`] - Insertion-ordered in-memory storage

pub mod prelude;

pub use docshelf_core::{backend, document, error, id, query, shared, store};

// Re-export chrono for timestamps
pub use chrono;

/// In-memory storage backend implementations.
pub mod memory {
    pub use docshelf_memory::{InMemoryStore, InMemoryStoreBuilder};
}
