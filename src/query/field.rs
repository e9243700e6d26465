//! Registry of criminal record fields addressable from query expressions.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDateTime;

use crate::domain::criminal::Criminal;

/// Textual columns; these accept filter clauses and sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Guid,
    CriminalName,
    Crime,
    Location,
    ImageUrl,
    CreatedBy,
    UpdatedBy,
}

/// Timestamp columns; these accept sort keys only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampField {
    DateOfCrime,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriminalField {
    Text(TextField),
    Timestamp(TimestampField),
}

static FIELD_REGISTRY: LazyLock<HashMap<&'static str, CriminalField>> = LazyLock::new(|| {
    use CriminalField::{Text, Timestamp};

    HashMap::from([
        ("guid", Text(TextField::Guid)),
        ("criminalname", Text(TextField::CriminalName)),
        ("name", Text(TextField::CriminalName)),
        ("crime", Text(TextField::Crime)),
        ("category", Text(TextField::Crime)),
        ("location", Text(TextField::Location)),
        ("imageurl", Text(TextField::ImageUrl)),
        ("createdby", Text(TextField::CreatedBy)),
        ("updatedby", Text(TextField::UpdatedBy)),
        ("dateofcrime", Timestamp(TimestampField::DateOfCrime)),
        ("dateofevent", Timestamp(TimestampField::DateOfCrime)),
        ("createdat", Timestamp(TimestampField::CreatedAt)),
        ("updatedat", Timestamp(TimestampField::UpdatedAt)),
    ])
});

impl CriminalField {
    /// Resolves a field name case-insensitively. Surrounding whitespace is ignored.
    pub fn lookup(name: &str) -> Option<Self> {
        FIELD_REGISTRY
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
    }

    /// Canonical camelCase name as exposed in JSON payloads.
    pub const fn name(self) -> &'static str {
        match self {
            CriminalField::Text(field) => field.name(),
            CriminalField::Timestamp(field) => field.name(),
        }
    }
}

impl TextField {
    /// Resolves a name that must refer to a textual field.
    pub fn lookup(name: &str) -> Option<Self> {
        match CriminalField::lookup(name)? {
            CriminalField::Text(field) => Some(field),
            CriminalField::Timestamp(_) => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TextField::Guid => "guid",
            TextField::CriminalName => "criminalName",
            TextField::Crime => "crime",
            TextField::Location => "location",
            TextField::ImageUrl => "imageUrl",
            TextField::CreatedBy => "createdBy",
            TextField::UpdatedBy => "updatedBy",
        }
    }

    /// Raw column value; `None` when the column is absent.
    pub fn raw<'a>(self, criminal: &'a Criminal) -> Option<Cow<'a, str>> {
        match self {
            TextField::Guid => Some(Cow::Owned(criminal.guid.to_string())),
            TextField::CriminalName => criminal.criminal_name.as_deref().map(Cow::Borrowed),
            TextField::Crime => criminal.crime.as_deref().map(Cow::Borrowed),
            TextField::Location => criminal.location.as_deref().map(Cow::Borrowed),
            TextField::ImageUrl => criminal.image_url.as_deref().map(Cow::Borrowed),
            TextField::CreatedBy => criminal.created_by.as_deref().map(Cow::Borrowed),
            TextField::UpdatedBy => criminal.updated_by.as_deref().map(Cow::Borrowed),
        }
    }

    /// Column value used by comparisons; absent values read as "".
    pub fn value<'a>(self, criminal: &'a Criminal) -> Cow<'a, str> {
        self.raw(criminal).unwrap_or(Cow::Borrowed(""))
    }
}

impl TimestampField {
    pub const fn name(self) -> &'static str {
        match self {
            TimestampField::DateOfCrime => "dateOfCrime",
            TimestampField::CreatedAt => "createdAt",
            TimestampField::UpdatedAt => "updatedAt",
        }
    }

    pub fn value(self, criminal: &Criminal) -> Option<NaiveDateTime> {
        match self {
            TimestampField::DateOfCrime => Some(criminal.date_of_crime),
            TimestampField::CreatedAt => Some(criminal.created_at),
            TimestampField::UpdatedAt => criminal.updated_at,
        }
    }
}
