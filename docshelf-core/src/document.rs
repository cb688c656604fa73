//! Core record types stored in a document store.
//!
//! A [`Document`] carries a title, content, an embedded [`Author`] and a creation
//! timestamp. Its identifier is optional until the document is saved, at which point
//! the store assigns its final value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DocumentStoreError, DocumentStoreResult};

/// The author of a document.
///
/// Authors are plain values: documents embed a copy and the store never tracks
/// them independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl Author {
    /// Creates a new author.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A stored record with a title, content, author, creation time and identifier.
///
/// # Example
///
/// ```ignore
/// use docshelf::document::{Author, Document};
/// use chrono::Utc;
///
/// let document = Document::new(
///     "The Silent Voice",
///     "A compelling story of resilience.",
///     Author::new("1", "Haruki Murakami"),
///     Utc::now(),
/// )
/// .with_id("1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The identifier, `None` until the document has been saved.
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl Document {
    /// Creates a new document without an identifier.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            author,
            created,
        }
    }

    /// Creates a new document builder.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Sets the identifier the document should be saved under.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns the identifier if one has been set.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns `true` if the identifier is missing or consists only of whitespace.
    pub fn has_blank_id(&self) -> bool {
        self.id
            .as_deref()
            .is_none_or(|id| id.trim().is_empty())
    }
}

/// Builder for [`Document`] values.
///
/// Every field except the identifier is required. [`DocumentBuilder::build`] reports
/// the first missing field as [`DocumentStoreError::InvalidDocument`].
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    id: Option<String>,
    title: Option<String>,
    content: Option<String>,
    author: Option<Author>,
    created: Option<DateTime<Utc>>,
}

impl DocumentBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Builds the document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::InvalidDocument`] naming the first required
    /// field that was never set.
    pub fn build(self) -> DocumentStoreResult<Document> {
        Ok(Document {
            id: self.id,
            title: self.title.ok_or_else(|| missing("title"))?,
            content: self.content.ok_or_else(|| missing("content"))?,
            author: self.author.ok_or_else(|| missing("author"))?,
            created: self.created.ok_or_else(|| missing("created"))?,
        })
    }
}

fn missing(field: &str) -> DocumentStoreError {
    DocumentStoreError::InvalidDocument(field.to_string())
}
