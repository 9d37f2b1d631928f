//! Budget expenses
//!
//! An expense's *actual spend* is its `actual_cost` when known and its
//! `estimated_cost` otherwise. Every budget total is built from actual spend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ledger::{
    contains_ignore_case, percentage, total, Ledger, Predicate, Record, RecordId,
};
use crate::planner::error::ParseError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub estimated_cost: f64,
    #[serde(default)]
    pub actual_cost: Option<f64>,
    pub paid: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub vendor: Option<String>,
}

impl Expense {
    /// Actual cost if recorded, estimate otherwise
    pub fn actual_spend(&self) -> f64 {
        self.actual_cost.unwrap_or(self.estimated_cost)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub estimated_cost: f64,
    #[serde(default)]
    pub actual_cost: Option<f64>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub vendor: Option<String>,
}

impl ExpenseDraft {
    pub fn new(name: impl Into<String>, category: impl Into<String>, estimated_cost: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            estimated_cost,
            ..Default::default()
        }
    }

    pub fn actual_cost(mut self, cost: f64) -> Self {
        self.actual_cost = Some(cost);
        self
    }

    pub fn paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ExpenseFlag {
    Paid(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseFilter {
    All,
    Paid,
    Unpaid,
    Category(String),
}

impl Predicate<Expense> for ExpenseFilter {
    fn matches(&self, expense: &Expense) -> bool {
        match self {
            ExpenseFilter::All => true,
            ExpenseFilter::Paid => expense.paid,
            ExpenseFilter::Unpaid => !expense.paid,
            ExpenseFilter::Category(category) => expense.category.eq_ignore_ascii_case(category),
        }
    }
}

impl FromStr for ExpenseFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.to_lowercase().as_str() {
            "all" => ExpenseFilter::All,
            "paid" => ExpenseFilter::Paid,
            "unpaid" => ExpenseFilter::Unpaid,
            _ => ExpenseFilter::Category(s.to_string()),
        })
    }
}

impl Record for Expense {
    type Draft = ExpenseDraft;
    type Flag = ExpenseFlag;
    type Filter = ExpenseFilter;

    const KIND: &'static str = "expense";

    fn from_draft(id: RecordId, draft: ExpenseDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            estimated_cost: draft.estimated_cost,
            actual_cost: draft.actual_cost,
            paid: draft.paid,
            notes: draft.notes,
            due_date: draft.due_date,
            vendor: draft.vendor,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_flag(&mut self, flag: ExpenseFlag) {
        match flag {
            ExpenseFlag::Paid(paid) => self.paid = paid,
        }
    }

    fn toggle(&mut self) -> bool {
        self.paid = !self.paid;
        true
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
            || contains_ignore_case(&self.category, needle)
            || self
                .vendor
                .as_deref()
                .is_some_and(|v| contains_ignore_case(v, needle))
    }
}

/// Spend for one category, as a share of total actual spend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStats {
    pub total_budget: f64,
    pub total_estimated: f64,
    pub total_actual: f64,
    pub total_paid: f64,
    /// `total_budget - total_actual`, negative when over budget
    pub remaining: f64,
    pub percent_used: f64,
    pub over_budget: bool,
    /// Sorted by category name. Percentages are relative to
    /// `total_actual`, not to `total_budget`.
    pub categories: Vec<CategoryTotal>,
}

impl Ledger<Expense> {
    /// Budget totals against `total_budget`
    pub fn stats(&self, total_budget: f64) -> BudgetStats {
        let total_estimated = total(self.iter().map(|e| e.estimated_cost));
        let total_actual = total(self.iter().map(Expense::actual_spend));
        let total_paid = total(self.iter().filter(|e| e.paid).map(Expense::actual_spend));

        let categories = self
            .categories()
            .into_iter()
            .map(|category| {
                let spent = total(
                    self.iter()
                        .filter(|e| e.category == category)
                        .map(Expense::actual_spend),
                );
                CategoryTotal {
                    percentage: percentage(spent, total_actual),
                    category,
                    total: spent,
                }
            })
            .collect();

        BudgetStats {
            total_budget,
            total_estimated,
            total_actual,
            total_paid,
            remaining: total_budget - total_actual,
            percent_used: percentage(total_actual, total_budget),
            over_budget: total_actual > total_budget,
            categories,
        }
    }
}
