//! WeDay Ledger
//!
//! The generic collection every planner page is built on:
//!
//! - **types**: record ids, the `Record` trait, search/filter selection
//! - **collection**: `Ledger<R>`, the owned in-memory store, and its lazy
//!   `FilteredView`
//!
//! # Contract
//!
//! ```text
//! add(draft)            -> record with a fresh id, appended
//! update(id, draft)     -> whole record replaced, id kept   (absent id: no-op)
//! remove(id)            -> record dropped                   (absent id: no-op)
//! set_flag(id, flag)    -> one field replaced               (absent id: no-op)
//! filter / select       -> lazy view, collection untouched
//! ```
//!
//! None of these operations can fail. Derived statistics live next to each
//! record kind in [`crate::planner`] and are recomputed on every call.

pub mod collection;
pub mod types;

pub use collection::{FilteredView, Ledger};
pub use types::{
    contains_ignore_case, percentage, total, IdGenerator, Predicate, Record, RecordId, Selection,
};
