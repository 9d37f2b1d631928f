//! Planning tasks
//!
//! Besides the usual ledger operations, tasks have a display order used by
//! the dashboard: unfinished tasks first, then by due date, earliest first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::ledger::{contains_ignore_case, percentage, Ledger, Predicate, Record, RecordId};
use crate::planner::error::ParseError;

/// Number of tasks shown in the dashboard's upcoming list
pub const UPCOMING_PREVIEW_LEN: usize = 5;

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParseError::Priority(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub category: String,
    pub priority: Priority,
    pub completed: bool,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, category: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date,
            category: category.into(),
            priority: Priority::default(),
            completed: false,
            assigned_to: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn assigned_to(mut self, who: impl Into<String>) -> Self {
        self.assigned_to = Some(who.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum TaskFlag {
    Completed(bool),
}

/// Task list tabs: everything, by completion, or one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Completed,
    Incomplete,
    Category(String),
}

impl Predicate<Task> for TaskFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Incomplete => !task.completed,
            TaskFilter::Category(category) => task.category.eq_ignore_ascii_case(category),
        }
    }
}

impl FromStr for TaskFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.to_lowercase().as_str() {
            "all" => TaskFilter::All,
            "completed" => TaskFilter::Completed,
            "incomplete" => TaskFilter::Incomplete,
            _ => TaskFilter::Category(s.to_string()),
        })
    }
}

impl Record for Task {
    type Draft = TaskDraft;
    type Flag = TaskFlag;
    type Filter = TaskFilter;

    const KIND: &'static str = "task";

    fn from_draft(id: RecordId, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            category: draft.category,
            priority: draft.priority,
            completed: draft.completed,
            assigned_to: draft.assigned_to,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_flag(&mut self, flag: TaskFlag) {
        match flag {
            TaskFlag::Completed(completed) => self.completed = completed,
        }
    }

    fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        true
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.title, needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| contains_ignore_case(d, needle))
            || self
                .assigned_to
                .as_deref()
                .is_some_and(|a| contains_ignore_case(a, needle))
    }
}

/// Display order: incomplete before completed, then earlier due date first
pub fn display_order(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| a.due_date.cmp(&b.due_date))
}

/// Progress over the task list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub completion_percent: f64,
}

impl Ledger<Task> {
    pub fn stats(&self) -> TaskStats {
        let total = self.len();
        let completed = self.iter().filter(|t| t.completed).count();

        TaskStats {
            total,
            completed,
            remaining: total - completed,
            completion_percent: percentage(completed as f64, total as f64),
        }
    }

    /// Every task in display order. Ties keep insertion order.
    pub fn sorted(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.iter().collect();
        tasks.sort_by(|a, b| display_order(a, b));
        tasks
    }

    /// The first `limit` tasks in display order
    pub fn upcoming(&self, limit: usize) -> Vec<&Task> {
        let mut tasks = self.sorted();
        tasks.truncate(limit);
        tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Selection;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sort_incomplete_first_then_due_date() {
        let ledger: Ledger<Task> = Ledger::with_drafts([
            TaskDraft::new("June", "Food", date(2025, 6, 1)),
            TaskDraft::new("January", "Venue", date(2025, 1, 1)).completed(true),
            TaskDraft::new("May", "Food", date(2025, 5, 1)),
        ]);

        let order: Vec<_> = ledger.sorted().iter().map(|t| t.due_date).collect();
        assert_eq!(
            order,
            vec![date(2025, 5, 1), date(2025, 6, 1), date(2025, 1, 1)]
        );
        assert!(ledger.sorted()[2].completed);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let ledger: Ledger<Task> = Ledger::with_drafts([
            TaskDraft::new("first", "A", date(2025, 5, 1)),
            TaskDraft::new("second", "A", date(2025, 5, 1)),
        ]);
        let titles: Vec<_> = ledger.sorted().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_upcoming_preview_is_bounded() {
        let ledger: Ledger<Task> = Ledger::with_drafts(
            (1..=8).map(|d| TaskDraft::new(format!("task {d}"), "Misc", date(2025, 6, d))),
        );

        assert_eq!(ledger.upcoming(UPCOMING_PREVIEW_LEN).len(), 5);
        assert_eq!(ledger.sorted().len(), 8);
        assert_eq!(ledger.upcoming(UPCOMING_PREVIEW_LEN)[0].title, "task 1");
    }

    #[test]
    fn test_completion_percent() {
        let mut ledger: Ledger<Task> = Ledger::with_drafts([
            TaskDraft::new("a", "A", date(2025, 5, 1)).completed(true),
            TaskDraft::new("b", "A", date(2025, 5, 2)),
            TaskDraft::new("c", "B", date(2025, 5, 3)),
            TaskDraft::new("d", "B", date(2025, 5, 4)),
        ]);

        let stats = ledger.stats();
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.remaining, 3);
        assert_eq!(stats.completion_percent, 25.0);

        ledger.toggle(RecordId(2));
        assert_eq!(ledger.stats().completion_percent, 50.0);
    }

    #[test]
    fn test_completion_percent_empty() {
        assert_eq!(Ledger::<Task>::new().stats().completion_percent, 0.0);
    }

    #[test]
    fn test_tab_filters() {
        let ledger: Ledger<Task> = Ledger::with_drafts([
            TaskDraft::new("Choose menu", "Food", date(2025, 6, 1)),
            TaskDraft::new("Book venue", "Venue", date(2025, 5, 15)).completed(true),
            TaskDraft::new("Order cake", "Food", date(2025, 6, 10)),
        ]);

        let count = |s: &str| ledger.select(&Selection::filter(s.parse().unwrap())).count();
        assert_eq!(count("all"), 3);
        assert_eq!(count("completed"), 1);
        assert_eq!(count("incomplete"), 2);
        assert_eq!(count("food"), 2);
        assert_eq!(count("Honeymoon"), 0);
    }

    #[test]
    fn test_search_title_description_assignee() {
        let ledger: Ledger<Task> = Ledger::with_drafts([
            TaskDraft::new("Book makeup artist", "Beauty", date(2025, 6, 15)).assigned_to("Bride"),
            TaskDraft::new("Rent tuxedos", "Attire", date(2025, 6, 20))
                .description("Reserve tuxedos for groom and groomsmen"),
        ]);

        assert_eq!(ledger.select(&Selection::search("bride")).count(), 1);
        assert_eq!(ledger.select(&Selection::search("GROOMSMEN")).count(), 1);
        assert_eq!(ledger.select(&Selection::search("makeup")).count(), 1);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_draft_deserialization_defaults() {
        let draft: TaskDraft = serde_json::from_str(
            r#"{"title": "Plan honeymoon", "due_date": "2025-07-01", "category": "Honeymoon"}"#,
        )
        .unwrap();
        assert_eq!(draft.priority, Priority::Medium);
        assert!(!draft.completed);
        assert_eq!(draft.due_date, date(2025, 7, 1));
    }
}
