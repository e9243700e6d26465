//! Filter, search, sort and pagination over criminal records.
//!
//! [`QueryRequest`] is the raw inbound shape; [`CriminalQuery`] is its
//! parsed, typed counterpart. The repository translates a `CriminalQuery`
//! into SQL, and [`CriminalQuery::apply`] evaluates the same query over an
//! in-memory slice with identical semantics.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::domain::criminal::Criminal;
use crate::pagination::PageRequest;

pub mod field;
pub mod filter;
pub mod sort;

pub use field::{CriminalField, TextField, TimestampField};
pub use filter::{Predicate, SearchTerm, parse_filters};
pub use sort::{SortDirection, SortKey, default_sort, parse_sorts};

/// Raw list parameters as received over HTTP.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    #[serde(default, alias = "Filters")]
    pub filters: Option<String>,
    #[serde(default, alias = "Sorts")]
    pub sorts: Option<String>,
    #[serde(default, alias = "Page")]
    pub page: Option<i64>,
    #[serde(default, alias = "PageSize", alias = "page_size")]
    pub page_size: Option<i64>,
    #[serde(default, alias = "Search")]
    pub search: Option<String>,
}

/// Parsed list query. Construction never fails; unusable input is dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriminalQuery {
    predicates: Vec<Predicate>,
    search: Option<SearchTerm>,
    sorts: Vec<SortKey>,
    page: PageRequest,
}

impl CriminalQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(request: &QueryRequest) -> Self {
        Self {
            predicates: request
                .filters
                .as_deref()
                .map(parse_filters)
                .unwrap_or_default(),
            search: request.search.as_deref().and_then(SearchTerm::new),
            sorts: request.sorts.as_deref().map(parse_sorts).unwrap_or_default(),
            page: PageRequest::new(request.page, request.page_size),
        }
    }

    #[must_use]
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    #[must_use]
    pub fn search(mut self, term: &str) -> Self {
        self.search = SearchTerm::new(term);
        self
    }

    #[must_use]
    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sorts.push(key);
        self
    }

    #[must_use]
    pub fn paginate(mut self, page: i64, page_size: i64) -> Self {
        self.page = PageRequest::new(Some(page), Some(page_size));
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn search_term(&self) -> Option<&SearchTerm> {
        self.search.as_ref()
    }

    /// Sort keys in application order; the default order when none were usable.
    pub fn sort_keys(&self) -> Vec<SortKey> {
        if self.sorts.is_empty() {
            vec![default_sort()]
        } else {
            self.sorts.clone()
        }
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    /// True when the record satisfies every predicate and the search term.
    pub fn matches(&self, criminal: &Criminal) -> bool {
        self.predicates.iter().all(|p| p.matches(criminal))
            && self.search.as_ref().is_none_or(|s| s.matches(criminal))
    }

    /// Orders two records by the sort keys, then by internal key ascending.
    pub fn compare(&self, a: &Criminal, b: &Criminal) -> Ordering {
        self.sort_keys()
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.id.cmp(&b.id))
    }

    /// Evaluates the query over a snapshot, returning the total match count
    /// and the requested page.
    pub fn apply<I>(&self, records: I) -> (usize, Vec<Criminal>)
    where
        I: IntoIterator<Item = Criminal>,
    {
        let mut matched: Vec<Criminal> = records.into_iter().filter(|c| self.matches(c)).collect();
        let total = matched.len();
        matched.sort_by(|a, b| self.compare(a, b));

        let offset = usize::try_from(self.page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.page.page_size()).unwrap_or(usize::MAX);
        let items = matched.into_iter().skip(offset).take(limit).collect();
        (total, items)
    }
}

impl From<&QueryRequest> for CriminalQuery {
    fn from(request: &QueryRequest) -> Self {
        Self::parse(request)
    }
}
