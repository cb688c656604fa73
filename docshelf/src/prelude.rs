//! Convenient re-exports of commonly used types from docshelf.
//!
//! ```ignore
//! use docshelf::prelude::*;
//! ```
//!
//! This provides access to:
//! - Document and author records
//! - The document store, its shared handle and builders
//! - Search requests and filter expressions
//! - Backend traits, identifier generators and error types

pub use docshelf_core::{
    document::{Author, Document, DocumentBuilder},
    store::{DocumentStore, DocumentStoreBuilder},
    shared::SharedDocumentStore,
    backend::{StoreBackend, StoreBackendBuilder},
    query::{SearchRequest, SearchRequestBuilder, QueryVisitor, Expr, FieldOp, DocumentField, Value, Filter},
    id::{IdGenerator, UuidIdGenerator, SequentialIdGenerator},
    error::{DocumentStoreError, DocumentStoreResult},
};
