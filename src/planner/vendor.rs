//! Vendors and bookings

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ledger::{contains_ignore_case, total, Ledger, Predicate, Record, RecordId};
use crate::planner::error::ParseError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub booked: bool,
    #[serde(default)]
    pub cost: Option<f64>,
    /// Expected to stay at or below `cost`; not enforced
    #[serde(default)]
    pub deposit: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorDraft {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub booked: bool,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub deposit: Option<f64>,
}

impl VendorDraft {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn contact(
        mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        self.contact_name = Some(name.into());
        self.email = Some(email.into());
        self.phone = Some(phone.into());
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn booked(mut self, booked: bool) -> Self {
        self.booked = booked;
        self
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn deposit(mut self, deposit: f64) -> Self {
        self.deposit = Some(deposit);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum VendorFlag {
    Booked(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorFilter {
    All,
    Booked,
    Pending,
    Category(String),
}

impl Predicate<Vendor> for VendorFilter {
    fn matches(&self, vendor: &Vendor) -> bool {
        match self {
            VendorFilter::All => true,
            VendorFilter::Booked => vendor.booked,
            VendorFilter::Pending => !vendor.booked,
            VendorFilter::Category(category) => vendor.category.eq_ignore_ascii_case(category),
        }
    }
}

impl FromStr for VendorFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.to_lowercase().as_str() {
            "all" => VendorFilter::All,
            "booked" => VendorFilter::Booked,
            "pending" => VendorFilter::Pending,
            _ => VendorFilter::Category(s.to_string()),
        })
    }
}

impl Record for Vendor {
    type Draft = VendorDraft;
    type Flag = VendorFlag;
    type Filter = VendorFilter;

    const KIND: &'static str = "vendor";

    fn from_draft(id: RecordId, draft: VendorDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            contact_name: draft.contact_name,
            email: draft.email,
            phone: draft.phone,
            website: draft.website,
            notes: draft.notes,
            booked: draft.booked,
            cost: draft.cost,
            deposit: draft.deposit,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_flag(&mut self, flag: VendorFlag) {
        match flag {
            VendorFlag::Booked(booked) => self.booked = booked,
        }
    }

    fn toggle(&mut self) -> bool {
        self.booked = !self.booked;
        true
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
            || contains_ignore_case(&self.category, needle)
            || self
                .contact_name
                .as_deref()
                .is_some_and(|c| contains_ignore_case(c, needle))
    }
}

/// Booking totals. Vendors without a cost count as 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorStats {
    pub total: usize,
    pub booked: usize,
    pub pending: usize,
    pub total_cost: f64,
    pub booked_cost: f64,
    pub deposits_paid: f64,
}

impl Ledger<Vendor> {
    pub fn stats(&self) -> VendorStats {
        let booked: Vec<&Vendor> = self.iter().filter(|v| v.booked).collect();

        VendorStats {
            total: self.len(),
            booked: booked.len(),
            pending: self.len() - booked.len(),
            total_cost: total(self.iter().map(|v| v.cost.unwrap_or(0.0))),
            booked_cost: total(booked.iter().map(|v| v.cost.unwrap_or(0.0))),
            deposits_paid: total(booked.iter().map(|v| v.deposit.unwrap_or(0.0))),
        }
    }
}
