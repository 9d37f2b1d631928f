//! Core types shared by every ledger
//!
//! - `RecordId`: identifier assigned to a record when it is added
//! - `IdGenerator`: per-ledger monotonic id source
//! - `Record`: what an entity kind must provide to live in a `Ledger`
//! - `Predicate` and `Selection`: the single active filter of a list view

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a record, unique within its ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Monotonic id source. Ids are never reused, even after a removal.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next id
    pub fn next_id(&mut self) -> RecordId {
        let id = RecordId(self.next);
        self.next += 1;
        id
    }

    #[cfg(test)]
    fn peek(&self) -> RecordId {
        RecordId(self.next)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// An entity kind stored in a `Ledger`
///
/// A record is built from its `Draft` (every field except the id) and can be
/// mutated one field at a time through its `Flag` type.
pub trait Record: Clone {
    /// Caller-supplied fields of a record
    type Draft;
    /// Single-field mutations (status, booked, paid, completed)
    type Flag;
    /// Categorical filter used by list views
    type Filter: Predicate<Self>;

    /// Short name used in logs ("guest", "task", ...)
    const KIND: &'static str;

    /// Build the record from a draft and a freshly assigned id
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    fn id(&self) -> RecordId;

    /// Apply a single-field change. Transitions are never rejected.
    fn apply_flag(&mut self, flag: Self::Flag);

    /// Flip the kind's primary boolean. Returns false if the kind has none.
    fn toggle(&mut self) -> bool {
        false
    }

    /// Category name, for kinds grouped by category
    fn category(&self) -> Option<&str> {
        None
    }

    /// Case-insensitive substring match over the searchable fields.
    /// `needle` is already lower-cased.
    fn matches_search(&self, needle: &str) -> bool;
}

/// A categorical filter over one record kind
pub trait Predicate<R> {
    fn matches(&self, record: &R) -> bool;
}

/// The one active filter of a list view: free-text search or a categorical
/// filter, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<F> {
    Search(String),
    Filter(F),
}

impl<F> Selection<F> {
    /// Free-text search. The term is lower-cased once here.
    pub fn search(term: impl AsRef<str>) -> Self {
        Selection::Search(term.as_ref().trim().to_lowercase())
    }

    pub fn filter(filter: F) -> Self {
        Selection::Filter(filter)
    }

    /// Check whether a record belongs in the view
    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Record<Filter = F>,
        F: Predicate<R>,
    {
        match self {
            Selection::Search(needle) if needle.is_empty() => true,
            Selection::Search(needle) => record.matches_search(needle),
            Selection::Filter(filter) => filter.matches(record),
        }
    }
}

/// Case-insensitive containment against an already lower-cased needle
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Sum of amounts. Empty input totals `0.0`, never `-0.0`.
pub fn total(amounts: impl IntoIterator<Item = f64>) -> f64 {
    amounts.into_iter().fold(0.0, |acc, x| acc + x)
}

/// `100 * part / whole`, or 0 when `whole` is 0
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        100.0 * part / whole
    }
}
