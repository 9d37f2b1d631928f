//! The generic in-memory ledger
//!
//! Records live in insertion order. Mutations addressed to an id that is not
//! present are silently ignored: `update`, `set_flag` and `toggle` return
//! `false` and `remove` returns `None`, and the collection is left untouched.

use crate::ledger::types::{IdGenerator, Record, RecordId, Selection};
use std::collections::BTreeSet;

/// An owned, in-memory collection of one record kind
#[derive(Debug, Clone)]
pub struct Ledger<R> {
    records: Vec<R>,
    ids: IdGenerator,
}

impl<R: Record> Ledger<R> {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Create a ledger and add every draft in order
    pub fn with_drafts(drafts: impl IntoIterator<Item = R::Draft>) -> Self {
        let mut ledger = Self::new();
        for draft in drafts {
            ledger.add(draft);
        }
        ledger
    }

    /// All records, in insertion order
    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Assign a new id to the draft and append it
    pub fn add(&mut self, draft: R::Draft) -> &R {
        let id = self.ids.next_id();
        self.records.push(R::from_draft(id, draft));
        tracing::debug!(kind = R::KIND, %id, "record added");
        &self.records[self.records.len() - 1]
    }

    /// Replace the whole record matching `id`, keeping the id
    pub fn update(&mut self, id: RecordId, draft: R::Draft) -> bool {
        match self.position(id) {
            Some(index) => {
                self.records[index] = R::from_draft(id, draft);
                tracing::debug!(kind = R::KIND, %id, "record updated");
                true
            }
            None => {
                tracing::debug!(kind = R::KIND, %id, "update ignored, no such record");
                false
            }
        }
    }

    /// Remove the record matching `id`
    pub fn remove(&mut self, id: RecordId) -> Option<R> {
        match self.position(id) {
            Some(index) => {
                tracing::debug!(kind = R::KIND, %id, "record removed");
                Some(self.records.remove(index))
            }
            None => {
                tracing::debug!(kind = R::KIND, %id, "remove ignored, no such record");
                None
            }
        }
    }

    /// Change a single field of the record matching `id`
    pub fn set_flag(&mut self, id: RecordId, flag: R::Flag) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.apply_flag(flag);
                tracing::debug!(kind = R::KIND, %id, "flag set");
                true
            }
            None => {
                tracing::debug!(kind = R::KIND, %id, "flag ignored, no such record");
                false
            }
        }
    }

    /// Flip the primary boolean of the record matching `id`
    pub fn toggle(&mut self, id: RecordId) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                let toggled = record.toggle();
                tracing::debug!(kind = R::KIND, %id, toggled, "toggle");
                toggled
            }
            None => false,
        }
    }

    /// Lazy view over the records matching `predicate`
    pub fn filter<P>(&self, predicate: P) -> FilteredView<'_, R, P>
    where
        P: Fn(&R) -> bool,
    {
        FilteredView {
            records: &self.records,
            predicate,
        }
    }

    /// Lazy view for the active search or categorical filter
    pub fn select<'a>(
        &'a self,
        selection: &'a Selection<R::Filter>,
    ) -> FilteredView<'a, R, impl Fn(&R) -> bool + 'a> {
        self.filter(move |record: &R| selection.matches(record))
    }

    /// Distinct category names, sorted
    pub fn categories(&self) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|r| r.category())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl<R: Record> Default for Ledger<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R: Record> IntoIterator for &'a Ledger<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A restartable, read-only view over part of a ledger
///
/// Nothing is evaluated until `iter` is called, and `iter` can be called any
/// number of times.
pub struct FilteredView<'a, R, P> {
    records: &'a [R],
    predicate: P,
}

impl<'a, R, P> FilteredView<'a, R, P>
where
    P: Fn(&R) -> bool,
{
    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.records.iter().filter(move |r| (self.predicate)(*r))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Clone the matching records out of the view
    pub fn to_vec(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.iter().cloned().collect()
    }
}
