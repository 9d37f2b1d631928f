//! Guests and RSVP tracking

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ledger::{contains_ignore_case, percentage, Ledger, Predicate, Record, RecordId};
use crate::planner::error::ParseError;

/// RSVP status of a guest. Any status may follow any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuestStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "attending")]
    Attending,
    #[serde(rename = "not attending", alias = "not_attending", alias = "not-attending")]
    NotAttending,
}

impl GuestStatus {
    pub fn all() -> &'static [GuestStatus] {
        &[
            GuestStatus::Pending,
            GuestStatus::Attending,
            GuestStatus::NotAttending,
        ]
    }
}

impl fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestStatus::Pending => write!(f, "pending"),
            GuestStatus::Attending => write!(f, "attending"),
            GuestStatus::NotAttending => write!(f, "not attending"),
        }
    }
}

impl FromStr for GuestStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(GuestStatus::Pending),
            "attending" => Ok(GuestStatus::Attending),
            "not attending" | "not_attending" | "not-attending" => Ok(GuestStatus::NotAttending),
            _ => Err(ParseError::GuestStatus(s.to_string())),
        }
    }
}

/// A guest on the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: GuestStatus,
    pub plus_one: bool,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub meal_preference: Option<String>,
}

/// Guest fields supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestDraft {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: GuestStatus,
    #[serde(default)]
    pub plus_one: bool,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub meal_preference: Option<String>,
}

impl GuestDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn status(mut self, status: GuestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn plus_one(mut self, plus_one: bool) -> Self {
        self.plus_one = plus_one;
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn meal_preference(mut self, meal: impl Into<String>) -> Self {
        self.meal_preference = Some(meal.into());
        self
    }
}

/// Single-field guest changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum GuestFlag {
    Status(GuestStatus),
    PlusOne(bool),
}

/// Categorical guest filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestFilter {
    All,
    Status(GuestStatus),
}

impl Predicate<Guest> for GuestFilter {
    fn matches(&self, guest: &Guest) -> bool {
        match self {
            GuestFilter::All => true,
            GuestFilter::Status(status) => guest.status == *status,
        }
    }
}

impl FromStr for GuestFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(GuestFilter::All);
        }
        s.parse().map(GuestFilter::Status)
    }
}

impl Record for Guest {
    type Draft = GuestDraft;
    type Flag = GuestFlag;
    type Filter = GuestFilter;

    const KIND: &'static str = "guest";

    fn from_draft(id: RecordId, draft: GuestDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            status: draft.status,
            plus_one: draft.plus_one,
            group: draft.group,
            meal_preference: draft.meal_preference,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_flag(&mut self, flag: GuestFlag) {
        match flag {
            GuestFlag::Status(status) => self.status = status,
            GuestFlag::PlusOne(plus_one) => self.plus_one = plus_one,
        }
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
            || contains_ignore_case(&self.email, needle)
            || self
                .group
                .as_deref()
                .is_some_and(|group| contains_ignore_case(group, needle))
    }
}

/// Head counts for the guest list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestStats {
    pub total_invited: usize,
    pub attending: usize,
    pub not_attending: usize,
    pub pending: usize,
    /// `attending` plus one more for every attending guest bringing a
    /// plus-one. Kept identical to the figure the dashboard has always shown.
    pub attending_with_plus_ones: usize,
    pub attending_percent: f64,
    pub not_attending_percent: f64,
    pub pending_percent: f64,
}

impl Ledger<Guest> {
    /// Derive head counts from the current list
    pub fn stats(&self) -> GuestStats {
        let count = |status: GuestStatus| self.iter().filter(|g| g.status == status).count();

        let total_invited = self.len();
        let attending = count(GuestStatus::Attending);
        let not_attending = count(GuestStatus::NotAttending);
        let pending = count(GuestStatus::Pending);
        let attending_plus_ones = self
            .iter()
            .filter(|g| g.status == GuestStatus::Attending && g.plus_one)
            .count();

        let invited = total_invited as f64;
        GuestStats {
            total_invited,
            attending,
            not_attending,
            pending,
            attending_with_plus_ones: attending + attending_plus_ones,
            attending_percent: percentage(attending as f64, invited),
            not_attending_percent: percentage(not_attending as f64, invited),
            pending_percent: percentage(pending as f64, invited),
        }
    }
}
