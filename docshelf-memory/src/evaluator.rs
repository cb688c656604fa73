//! Query expression evaluation for in-memory document filtering.
//!
//! This module evaluates [`Expr`] trees against a single [`Document`] by reading the
//! referenced fields directly off the record.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use docshelf_core::{
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    query::{DocumentField, Expr, FieldOp, QueryVisitor, Value},
};

/// Comparable view over document fields and expression values.
#[derive(Debug)]
pub(crate) enum Comparable<'a> {
    /// Missing value, e.g. an unsaved document's id
    Null,
    String(&'a str),
    DateTime(DateTime<Utc>),
    List(Vec<Comparable<'a>>),
}

impl<'a> From<&'a Value> for Comparable<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(value) => Comparable::String(value),
            Value::DateTime(value) => Comparable::DateTime(*value),
            Value::List(values) => Comparable::List(
                values
                    .iter()
                    .map(Comparable::from)
                    .collect::<Vec<_>>()
            ),
        }
    }
}

impl<'a> Comparable<'a> {
    fn of_field(document: &'a Document, field: DocumentField) -> Self {
        match field {
            DocumentField::Id => document
                .id
                .as_deref()
                .map(Comparable::String)
                .unwrap_or(Comparable::Null),
            DocumentField::Title => Comparable::String(&document.title),
            DocumentField::Content => Comparable::String(&document.content),
            DocumentField::AuthorId => Comparable::String(&document.author.id),
            DocumentField::AuthorName => Comparable::String(&document.author.name),
            DocumentField::Created => Comparable::DateTime(document.created),
        }
    }
}

impl<'a> PartialEq for Comparable<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparable::Null, Comparable::Null) => true,
            (Comparable::String(a), Comparable::String(b)) => a == b,
            (Comparable::DateTime(a), Comparable::DateTime(b)) => a == b,
            (Comparable::List(a), Comparable::List(b)) => a == b,
            _ => false,
        }
    }
}

impl<'a> PartialOrd for Comparable<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Comparable::String(a), Comparable::String(b)) => a.partial_cmp(b),
            (Comparable::DateTime(a), Comparable::DateTime(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Returns `true` if `text` starts with `prefix`, or `prefix` occurs right after a
/// whitespace character in `text`.
fn word_starts_with(text: &str, prefix: &str) -> bool {
    text.starts_with(prefix)
        || text
            .char_indices()
            .filter(|(_, c)| c.is_whitespace())
            .any(|(index, c)| text[index + c.len_utf8()..].starts_with(prefix))
}

pub(crate) struct DocumentEvaluator<'a> {
    document: &'a Document,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn evaluate(&mut self, expr: &Expr) -> DocumentStoreResult<bool> {
        self.visit_expr(expr)
    }

    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        expr: &Expr,
    ) -> Vec<Document> {
        documents
            .into_iter()
            .filter(|doc| {
                DocumentEvaluator::new(doc)
                    .evaluate(expr)
                    .unwrap_or(false)
            })
            .cloned()
            .collect::<Vec<_>>()
    }
}

impl<'a> QueryVisitor for DocumentEvaluator<'a> {
    type Output = bool;
    type Error = DocumentStoreError;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        for expr in exprs {
            if !self.visit_expr(expr)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn visit_or(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        for expr in exprs {
            if self.visit_expr(expr)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn visit_not(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error> {
        Ok(!self.visit_expr(expr)?)
    }

    fn visit_field(&mut self, field: DocumentField, op: FieldOp, value: &Value) -> Result<Self::Output, Self::Error> {
        let left = Comparable::of_field(self.document, field);
        let right = Comparable::from(value);

        Ok(match op {
            FieldOp::Eq => left == right,
            FieldOp::Ne => left != right,
            FieldOp::Gt | FieldOp::Gte | FieldOp::Lt | FieldOp::Lte => match left.partial_cmp(&right) {
                Some(ordering) => match op {
                    FieldOp::Gt => ordering == Ordering::Greater,
                    FieldOp::Gte => ordering != Ordering::Less,
                    FieldOp::Lt => ordering == Ordering::Less,
                    _ => ordering != Ordering::Greater,
                },
                None => false,
            },
            FieldOp::Contains => match (left, right) {
                (Comparable::String(left), Comparable::String(right)) => left.contains(right),
                _ => false,
            },
            FieldOp::StartsWith => match (left, right) {
                (Comparable::String(left), Comparable::String(right)) => left.starts_with(right),
                _ => false,
            },
            FieldOp::WordStartsWith => match (left, right) {
                (Comparable::String(left), Comparable::String(right)) => word_starts_with(left, right),
                _ => false,
            },
            FieldOp::EndsWith => match (left, right) {
                (Comparable::String(left), Comparable::String(right)) => left.ends_with(right),
                _ => false,
            },
            FieldOp::AnyOf => match right {
                Comparable::List(values) => values.iter().any(|value| *value == left),
                single_value => single_value == left,
            },
        })
    }
}
