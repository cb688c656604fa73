//! Identifier generation for newly saved documents.
//!
//! The store asks an [`IdGenerator`] for a fresh identifier whenever a document is
//! saved without one, or with one that is already taken. [`UuidIdGenerator`] is the
//! default; [`SequentialIdGenerator`] produces predictable identifiers for tests.

use std::{
    fmt::Debug,
    sync::atomic::{AtomicU64, Ordering},
};
use uuid::Uuid;

/// Source of unique string identifiers.
pub trait IdGenerator: Send + Sync + Debug {
    /// Returns a new identifier.
    fn generate(&self) -> String;
}

/// Generates random version 4 UUIDs rendered in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Generates `prefix` followed by an increasing counter, starting at 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}
