//! WeDay Planner
//!
//! The four record kinds tracked for a wedding, one `Ledger` each:
//!
//! - **guest**: guest list and RSVP head counts
//! - **task**: planning checklist with progress and display order
//! - **vendor**: vendors, bookings and deposits
//! - **expense**: budget lines and spend breakdown per category
//! - **seed**: the example records a fresh planner starts with
//!
//! A `Planner` owns one ledger per kind plus the total budget and the
//! wedding date. Ledgers never reference each other; the only thing they
//! share is being summarised side by side on the dashboard.
//!
//! # Example
//!
//! ```rust
//! use weday::planner::{GuestDraft, GuestFlag, GuestStatus, Planner};
//!
//! let mut planner = Planner::seeded();
//! let id = planner.guests.add(GuestDraft::new("Ada Lovelace", "ada@example.com")).id;
//! planner.guests.set_flag(id, GuestFlag::Status(GuestStatus::Attending));
//!
//! let stats = planner.guests.stats();
//! assert_eq!(stats.attending, 3);
//! ```

pub mod error;
pub mod expense;
pub mod guest;
pub mod seed;
pub mod task;
pub mod vendor;

pub use error::{ParseError, ParseResult};
pub use expense::{BudgetStats, CategoryTotal, Expense, ExpenseDraft, ExpenseFilter, ExpenseFlag};
pub use guest::{Guest, GuestDraft, GuestFilter, GuestFlag, GuestStats, GuestStatus};
pub use task::{
    display_order, Priority, Task, TaskDraft, TaskFilter, TaskFlag, TaskStats,
    UPCOMING_PREVIEW_LEN,
};
pub use vendor::{Vendor, VendorDraft, VendorFilter, VendorFlag, VendorStats};

use chrono::NaiveDate;

use crate::ledger::Ledger;

/// Parse a calendar date written as `YYYY-MM-DD`
pub fn parse_date(s: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| ParseError::Date(s.to_string()))
}

/// All the ledgers for one wedding
#[derive(Debug, Clone)]
pub struct Planner {
    pub guests: Ledger<Guest>,
    pub tasks: Ledger<Task>,
    pub vendors: Ledger<Vendor>,
    pub expenses: Ledger<Expense>,
    total_budget: f64,
    wedding_date: NaiveDate,
}

impl Planner {
    /// Empty ledgers
    pub fn new(total_budget: f64, wedding_date: NaiveDate) -> Self {
        Self {
            guests: Ledger::new(),
            tasks: Ledger::new(),
            vendors: Ledger::new(),
            expenses: Ledger::new(),
            total_budget,
            wedding_date,
        }
    }

    /// Ledgers loaded with the example records
    pub fn seeded() -> Self {
        Self {
            guests: Ledger::with_drafts(seed::seed_guests()),
            tasks: Ledger::with_drafts(seed::seed_tasks()),
            vendors: Ledger::with_drafts(seed::seed_vendors()),
            expenses: Ledger::with_drafts(seed::seed_expenses()),
            total_budget: seed::SEED_TOTAL_BUDGET,
            wedding_date: seed::seed_wedding_date(),
        }
    }

    pub fn total_budget(&self) -> f64 {
        self.total_budget
    }

    pub fn set_total_budget(&mut self, total_budget: f64) {
        tracing::debug!(total_budget, "total budget changed");
        self.total_budget = total_budget;
    }

    pub fn wedding_date(&self) -> NaiveDate {
        self.wedding_date
    }

    pub fn set_wedding_date(&mut self, date: NaiveDate) {
        self.wedding_date = date;
    }

    /// Budget totals against the planner's total budget
    pub fn budget(&self) -> BudgetStats {
        self.expenses.stats(self.total_budget)
    }

    /// Borrow every ledger at once, for building views
    pub fn ledgers(&self) -> PlannerRef<'_> {
        PlannerRef {
            guests: &self.guests,
            tasks: &self.tasks,
            vendors: &self.vendors,
            expenses: &self.expenses,
            total_budget: self.total_budget,
            wedding_date: self.wedding_date,
        }
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Read-only borrow of a planner's ledgers
///
/// Views are built from this rather than from `Planner` so callers that keep
/// each ledger behind its own lock can still assemble one.
#[derive(Debug, Clone, Copy)]
pub struct PlannerRef<'a> {
    pub guests: &'a Ledger<Guest>,
    pub tasks: &'a Ledger<Task>,
    pub vendors: &'a Ledger<Vendor>,
    pub expenses: &'a Ledger<Expense>,
    pub total_budget: f64,
    pub wedding_date: NaiveDate,
}

impl<'a> PlannerRef<'a> {
    pub fn budget(&self) -> BudgetStats {
        self.expenses.stats(self.total_budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::RecordId;

    #[test]
    fn test_seeded_planner() {
        let planner = Planner::seeded();

        assert_eq!(planner.guests.len(), 4);
        assert_eq!(planner.tasks.len(), 8);
        assert_eq!(planner.vendors.len(), 4);
        assert_eq!(planner.expenses.len(), 5);
        assert_eq!(planner.total_budget(), 30000.0);
        assert_eq!(planner.wedding_date(), NaiveDate::from_ymd_opt(2025, 10, 15).unwrap());
    }

    #[test]
    fn test_seeded_aggregates() {
        let planner = Planner::seeded();

        let guests = planner.guests.stats();
        assert_eq!(guests.attending, 2);
        assert_eq!(guests.attending_with_plus_ones, 3);
        assert_eq!(guests.pending, 1);

        let tasks = planner.tasks.stats();
        assert_eq!(tasks.completed, 1);
        assert_eq!(tasks.completion_percent, 12.5);

        let vendors = planner.vendors.stats();
        assert_eq!(vendors.total_cost, 19000.0);
        assert_eq!(vendors.booked_cost, 10500.0);

        let budget = planner.budget();
        assert_eq!(budget.total_actual, 22000.0);
        assert_eq!(budget.remaining, 8000.0);
    }

    #[test]
    fn test_ledgers_are_independent() {
        let mut planner = Planner::seeded();
        planner.guests.remove(RecordId(1));

        assert_eq!(planner.guests.len(), 3);
        assert!(planner.tasks.get(RecordId(1)).is_some());
        assert!(planner.vendors.get(RecordId(1)).is_some());
        assert!(planner.expenses.get(RecordId(1)).is_some());
    }

    #[test]
    fn test_set_total_budget() {
        let mut planner = Planner::seeded();
        planner.set_total_budget(0.0);
        assert_eq!(planner.budget().percent_used, 0.0);

        planner.set_total_budget(44000.0);
        assert_eq!(planner.ledgers().budget().percent_used, 50.0);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-10-15"),
            Ok(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap())
        );
        assert!(parse_date("15/10/2025").is_err());
    }
}
