//! Multi-key ordering of criminal records.

use std::cmp::Ordering;

use crate::domain::criminal::Criminal;
use crate::query::field::{CriminalField, TimestampField};

pub const SORT_SEPARATOR: char = ',';
pub const DESCENDING_PREFIX: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// One key of an ordering: the field and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: CriminalField,
    pub direction: SortDirection,
}

impl SortKey {
    pub const fn ascending(field: CriminalField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub const fn descending(field: CriminalField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Compares two records on this key. Absent values order before present ones.
    pub fn compare(&self, a: &Criminal, b: &Criminal) -> Ordering {
        let ordering = match self.field {
            CriminalField::Text(field) => field.raw(a).cmp(&field.raw(b)),
            CriminalField::Timestamp(field) => field.value(a).cmp(&field.value(b)),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Ordering applied when no usable sort key was supplied.
pub const fn default_sort() -> SortKey {
    SortKey::descending(CriminalField::Timestamp(TimestampField::DateOfCrime))
}

/// Parses a comma-separated sort expression. Tokens naming unknown fields
/// are dropped; the remaining keys keep their listed order.
pub fn parse_sorts(raw: &str) -> Vec<SortKey> {
    raw.split(SORT_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.strip_prefix(DESCENDING_PREFIX) {
            Some(name) => CriminalField::lookup(name).map(SortKey::descending),
            None => CriminalField::lookup(token).map(SortKey::ascending),
        })
        .collect()
}
