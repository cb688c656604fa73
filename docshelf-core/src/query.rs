//! Search requests and the filter expression API behind them.
//!
//! A [`SearchRequest`] is the high-level way of selecting documents: every criterion
//! is optional, present criteria are combined with AND, and list-valued criteria match
//! when any of their entries match. Requests compile into an [`Expr`] tree which
//! storage backends evaluate through a [`QueryVisitor`].
//!
//! # Search Requests
//!
//! ```ignore
//! use docshelf::query::SearchRequest;
//!
//! let request = SearchRequest::builder()
//!     .author_ids(["1", "2", "3"])
//!     .contains_contents(["An", "story", "human"])
//!     .title_prefixes(["of", "and"])
//!     .created_from(from)
//!     .created_to(to)
//!     .build();
//! ```
//!
//! # Filter Expression API
//!
//! The [`Filter`] struct provides static methods for building expressions directly
//! over [`DocumentField`]s:
//!
//! - Comparison: `eq`, `ne`, `gt`, `gte`, `lt`, `lte`
//! - String: `contains`, `starts_with`, `word_starts_with`, `ends_with`
//! - Membership: `any_of`
//! - Logical: `and`, `or`, `not`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

use crate::error::DocumentStoreError;

/// The document fields an expression can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentField {
    Id,
    Title,
    Content,
    AuthorId,
    AuthorName,
    Created,
}

impl DocumentField {
    /// Returns the dotted path of the field, e.g. `author.id`.
    pub fn path(&self) -> &'static str {
        match self {
            DocumentField::Id => "id",
            DocumentField::Title => "title",
            DocumentField::Content => "content",
            DocumentField::AuthorId => "author.id",
            DocumentField::AuthorName => "author.name",
            DocumentField::Created => "created",
        }
    }
}

impl fmt::Display for DocumentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A value to compare a document field against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    DateTime(DateTime<Utc>),
    List(Vec<Value>),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::DateTime(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

/// Field comparison operators for filter expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOp {
    /// Equal to (exact match).
    Eq,
    /// Not equal to.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal to.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal to.
    Lte,
    /// String contains value.
    Contains,
    /// String starts with value.
    StartsWith,
    /// String starts with value, or value occurs right after a whitespace character.
    WordStartsWith,
    /// String ends with value.
    EndsWith,
    /// Field equals any of the listed values.
    AnyOf,
}

/// A filter expression for selecting documents.
///
/// # Example
///
/// ```ignore
/// use docshelf::query::{DocumentField, Filter};
///
/// let expr = Filter::and([
///     Filter::eq(DocumentField::AuthorId, "1"),
///     Filter::gte(DocumentField::Created, from),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Logical AND of multiple expressions (all must match).
    And(Vec<Expr>),
    /// Logical OR of multiple expressions (any must match).
    Or(Vec<Expr>),
    /// Logical NOT of an expression (inverts the result).
    Not(Box<Expr>),
    /// Field comparison expression.
    Field {
        field: DocumentField,
        op: FieldOp,
        value: Value,
    },
}

impl Expr {
    /// Creates a field comparison expression.
    pub fn field(field: DocumentField, op: FieldOp, value: Value) -> Self {
        Expr::Field { field, op, value }
    }

    /// Combines this expression with another using logical AND.
    ///
    /// If this expression is already an AND, the other expression is appended
    /// to the list. Otherwise, a new AND expression is created.
    pub fn and(self, other: Expr) -> Self {
        match self {
            Expr::And(mut list) => {
                list.push(other);
                Expr::And(list)
            }
            _ => Expr::And(vec![self, other]),
        }
    }

    /// Combines this expression with another using logical OR.
    ///
    /// If this expression is already an OR, the other expression is appended
    /// to the list. Otherwise, a new OR expression is created.
    pub fn or(self, other: Expr) -> Self {
        match self {
            Expr::Or(mut list) => {
                list.push(other);
                Expr::Or(list)
            }
            _ => Expr::Or(vec![self, other]),
        }
    }

    /// Negates this expression (logical NOT).
    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }
}

/// Helper struct for constructing filter expressions.
pub struct Filter;

impl Filter {
    pub fn eq(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Eq, value.into())
    }

    pub fn ne(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Ne, value.into())
    }

    pub fn gt(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Gt, value.into())
    }

    pub fn gte(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Gte, value.into())
    }

    pub fn lt(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Lt, value.into())
    }

    pub fn lte(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Lte, value.into())
    }

    /// Matches documents whose string field contains the value.
    pub fn contains(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Contains, value.into())
    }

    /// Matches documents whose string field starts with the value.
    pub fn starts_with(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::StartsWith, value.into())
    }

    /// Matches documents where one of the words of the string field starts with the value.
    ///
    /// `"Shadows and Light"` matches `"Shadows"`, `"and"` and `"Li"`, but not `"hadows"`.
    pub fn word_starts_with(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::WordStartsWith, value.into())
    }

    /// Matches documents whose string field ends with the value.
    pub fn ends_with(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::EndsWith, value.into())
    }

    /// Matches documents whose field equals any of the given values.
    pub fn any_of<T: Into<Value>>(field: DocumentField, values: impl IntoIterator<Item = T>) -> Expr {
        Expr::field(
            field,
            FieldOp::AnyOf,
            Value::List(values.into_iter().map(Into::into).collect()),
        )
    }

    pub fn and(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::And(exprs.into_iter().collect())
    }

    pub fn or(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Or(exprs.into_iter().collect())
    }

    pub fn not(expr: Expr) -> Expr {
        expr.not()
    }
}

/// A set of optional, combinable criteria for selecting stored documents.
///
/// Absent criteria do not filter. Empty lists are treated as absent. Both creation
/// time bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Matches documents whose author id is in the set.
    pub author_ids: Option<BTreeSet<String>>,
    /// Matches documents whose content contains at least one of the substrings.
    pub contains_contents: Option<Vec<String>>,
    /// Matches documents whose title has a word starting with at least one of the prefixes.
    pub title_prefixes: Option<Vec<String>>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates a request that matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::new()
    }

    /// Returns `true` if no criterion would filter anything.
    pub fn is_unfiltered(&self) -> bool {
        self.to_expr().is_none()
    }

    /// Compiles the request into a filter expression.
    ///
    /// Each present criterion becomes one conjunct; list criteria become disjunctions
    /// of their entries. Returns `None` when the request matches every document.
    pub fn to_expr(&self) -> Option<Expr> {
        let mut conjuncts = Vec::new();

        if let Some(ids) = self.author_ids.as_ref().filter(|ids| !ids.is_empty()) {
            conjuncts.push(Filter::any_of(DocumentField::AuthorId, ids));
        }

        if let Some(contents) = non_empty(&self.contains_contents) {
            conjuncts.push(Filter::or(
                contents
                    .iter()
                    .map(|content| Filter::contains(DocumentField::Content, content)),
            ));
        }

        if let Some(prefixes) = non_empty(&self.title_prefixes) {
            conjuncts.push(Filter::or(
                prefixes
                    .iter()
                    .map(|prefix| Filter::word_starts_with(DocumentField::Title, prefix)),
            ));
        }

        if let Some(from) = self.created_from {
            conjuncts.push(Filter::gte(DocumentField::Created, from));
        }

        if let Some(to) = self.created_to {
            conjuncts.push(Filter::lte(DocumentField::Created, to));
        }

        match conjuncts.len() {
            0 => None,
            1 => conjuncts.pop(),
            _ => Some(Expr::And(conjuncts)),
        }
    }
}

fn non_empty(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref().filter(|items| !items.is_empty())
}

#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    pub fn new() -> Self {
        SearchRequestBuilder { request: SearchRequest::default() }
    }

    /// Restricts results to documents by any of these authors.
    pub fn author_ids<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.request.author_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts results to documents whose content contains any of these substrings.
    pub fn contains_contents<S: Into<String>>(mut self, contents: impl IntoIterator<Item = S>) -> Self {
        self.request.contains_contents = Some(contents.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts results to documents whose title has a word starting with any of these prefixes.
    pub fn title_prefixes<S: Into<String>>(mut self, prefixes: impl IntoIterator<Item = S>) -> Self {
        self.request.title_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(from);
        self
    }

    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(to);
        self
    }

    pub fn build(self) -> SearchRequest {
        self.request
    }
}

/// Visitor over [`Expr`] trees, implemented by backends that evaluate expressions.
pub trait QueryVisitor {
    type Output;
    type Error: Into<DocumentStoreError>;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error>;
    fn visit_or(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error>;
    fn visit_not(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error>;
    fn visit_field(
        &mut self,
        field: DocumentField,
        op: FieldOp,
        value: &Value,
    ) -> Result<Self::Output, Self::Error>;

    fn visit_expr(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error> {
        match expr {
            Expr::And(exprs) => self.visit_and(exprs),
            Expr::Or(exprs) => self.visit_or(exprs),
            Expr::Not(expr) => self.visit_not(expr),
            Expr::Field { field, op, value } => self.visit_field(*field, *op, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_request_has_no_expr() {
        assert_eq!(SearchRequest::new().to_expr(), None);
        assert!(SearchRequest::builder().build().is_unfiltered());
    }

    #[test]
    fn test_empty_lists_are_ignored() {
        let request = SearchRequest::builder()
            .author_ids(Vec::<String>::new())
            .contains_contents(Vec::<String>::new())
            .title_prefixes(Vec::<String>::new())
            .build();

        assert!(request.is_unfiltered());
    }

    #[test]
    fn test_single_criterion_is_not_wrapped() {
        let request = SearchRequest::builder().title_prefixes(["Silent"]).build();

        assert_eq!(
            request.to_expr(),
            Some(Filter::or([Filter::word_starts_with(DocumentField::Title, "Silent")]))
        );
    }

    #[test]
    fn test_all_criteria_compile_to_conjunction() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let request = SearchRequest::builder()
            .author_ids(["2", "1"])
            .contains_contents(["An", "story"])
            .title_prefixes(["of"])
            .created_from(from)
            .created_to(to)
            .build();

        let expected = Filter::and([
            Filter::any_of(DocumentField::AuthorId, ["1", "2"]),
            Filter::or([
                Filter::contains(DocumentField::Content, "An"),
                Filter::contains(DocumentField::Content, "story"),
            ]),
            Filter::or([Filter::word_starts_with(DocumentField::Title, "of")]),
            Filter::gte(DocumentField::Created, from),
            Filter::lte(DocumentField::Created, to),
        ]);

        assert_eq!(request.to_expr(), Some(expected));
    }

    #[test]
    fn test_request_deserializes_with_missing_fields() {
        let request: SearchRequest = serde_json::from_str(
            r#"{ "authorIds": ["1", "3"], "createdTo": "2024-01-01T00:00:00Z" }"#,
        )
        .unwrap();

        assert_eq!(
            request.author_ids,
            Some(BTreeSet::from(["1".to_string(), "3".to_string()]))
        );
        assert_eq!(request.contains_contents, None);
        assert_eq!(request.created_from, None);
        assert_eq!(
            request.created_to,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_expr_chaining() {
        let expr = Filter::eq(DocumentField::Id, "1")
            .or(Filter::eq(DocumentField::Id, "2"))
            .or(Filter::eq(DocumentField::Id, "3"));

        match expr {
            Expr::Or(list) => assert_eq!(list.len(), 3),
            other => panic!("expected OR expression, got {other:?}"),
        }

        let negated = Filter::not(Filter::eq(DocumentField::Title, "x"));
        assert!(matches!(negated, Expr::Not(_)));
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(DocumentField::AuthorId.to_string(), "author.id");
        assert_eq!(DocumentField::Created.path(), "created");
    }
}
