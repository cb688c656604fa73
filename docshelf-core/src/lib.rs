//! Core of the docshelf project: an insertion-ordered document repository with
//! composable search filters.
//!
//! This crate provides:
//!
//! - **Records** ([`document`]) - Documents, their authors and a document builder
//! - **Search and filtering API** ([`query`]) - Search requests and the filter expressions they compile to
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing storage backends
//! - **Document store** ([`store`]) - Save, lookup, search and clear over a backend
//! - **Shared store** ([`shared`]) - Lock-guarded store handle for concurrent use
//! - **Identifier generation** ([`id`]) - Pluggable generators for new document ids
//! - **Error handling** ([`error`]) - Error types and result types
//!
//! # Example
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//! use chrono::Utc;
//!
//! let mut store = DocumentStore::new(InMemoryStore::new());
//!
//! store.save(
//!     Document::new(
//!         "The Silent Voice",
//!         "A compelling story of resilience.",
//!         Author::new("1", "Haruki Murakami"),
//!         Utc::now(),
//!     )
//!     .with_id("1"),
//! );
//!
//! let found = store.search(&SearchRequest::builder().author_ids(["1"]).build());
//! assert_eq!(found.len(), 1);
//! ```

#[allow(unused_extern_crates)]
extern crate self as docshelf_core;

pub mod backend;
pub mod document;
pub mod error;
pub mod id;
pub mod query;
pub mod shared;
pub mod store;
