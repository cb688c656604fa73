//! In-memory document storage backend for docshelf.
//!
//! This crate provides an insertion-ordered, in-memory implementation of the
//! `StoreBackend` trait together with the evaluator that applies filter expressions
//! to stored documents.
//!
//! # Features
//!
//! - **Insertion order** - Searches return documents in the order they were saved
//! - **Full filter support** - Every `Expr` and `FieldOp` is evaluated in memory
//! - **No I/O** - Every operation completes synchronously
//!
//! # Quick Start
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//! use chrono::Utc;
//!
//! let mut store = DocumentStore::new(InMemoryStore::builder().build().unwrap());
//!
//! let saved = store.save(Document::new(
//!     "Journey Through Time",
//!     "An adventure like no other.",
//!     Author::new("5", "Agatha Christie"),
//!     Utc::now(),
//! ));
//!
//! assert!(store.find_by_id(saved.id().unwrap()).is_some());
//! ```

#[allow(unused_extern_crates)]
extern crate self as docshelf_memory;

pub mod store;
pub mod evaluator;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
