//! Filter and search clauses over criminal records.
//!
//! A filter expression is a `;`-separated list of clauses. Each clause is
//! either `field==value` (exact match) or `field@=*value` (substring match).
//! Clauses that cannot be parsed or that name an unknown field are dropped
//! without error.

use crate::domain::criminal::Criminal;
use crate::query::field::TextField;

pub const CLAUSE_SEPARATOR: char = ';';
pub const EQUALS_OPERATOR: &str = "==";
pub const CONTAINS_OPERATOR: &str = "@=*";

/// Fields scanned by the free-text search.
pub const SEARCH_FIELDS: [TextField; 3] =
    [TextField::CriminalName, TextField::Crime, TextField::Location];

/// A single accepted filter clause. All comparisons are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Equals(TextField, String),
    Contains(TextField, String),
}

impl Predicate {
    pub fn field(&self) -> TextField {
        match self {
            Predicate::Equals(field, _) | Predicate::Contains(field, _) => *field,
        }
    }

    pub fn matches(&self, criminal: &Criminal) -> bool {
        match self {
            Predicate::Equals(field, value) => field.value(criminal) == value.as_str(),
            Predicate::Contains(field, value) => field.value(criminal).contains(value.as_str()),
        }
    }
}

/// Parses a whole filter expression into the list of accepted predicates.
pub fn parse_filters(raw: &str) -> Vec<Predicate> {
    raw.split(CLAUSE_SEPARATOR)
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .filter_map(parse_clause)
        .collect()
}

/// Parses one clause. `==` is detected before `@=*`; each splits on its
/// first occurrence.
fn parse_clause(clause: &str) -> Option<Predicate> {
    if let Some((field, value)) = clause.split_once(EQUALS_OPERATOR) {
        let field = TextField::lookup(field)?;
        return Some(Predicate::Equals(field, value.trim().to_string()));
    }

    if let Some((field, value)) = clause.split_once(CONTAINS_OPERATOR) {
        let field = TextField::lookup(field)?;
        return Some(Predicate::Contains(field, value.trim().to_string()));
    }

    None
}

/// Trimmed, non-empty free-text search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when any of the [`SEARCH_FIELDS`] contains the term.
    pub fn matches(&self, criminal: &Criminal) -> bool {
        SEARCH_FIELDS
            .iter()
            .any(|field| field.value(criminal).contains(self.0.as_str()))
    }
}
