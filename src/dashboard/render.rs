//! Plain-text rendering of view payloads for the terminal

use std::fmt::Write;

use crate::dashboard::payload::ViewPayload;
use crate::dashboard::summary::DashboardSummary;
use crate::planner::{BudgetStats, Expense, Guest, Task, Vendor};

/// Render a payload as aligned tables
pub fn render_text(payload: &ViewPayload) -> String {
    let mut out = String::new();
    let _ = write_payload(&mut out, payload);
    out
}

fn write_payload(out: &mut String, payload: &ViewPayload) -> std::fmt::Result {
    writeln!(out, "{}", payload.view().title())?;
    writeln!(out, "{}", "=".repeat(60))?;

    match payload {
        ViewPayload::Dashboard(summary) => write_dashboard(out, summary),
        ViewPayload::Guests { guests, stats } => {
            writeln!(
                out,
                "Invited: {}  Attending: {} ({} with plus-ones)  Declined: {}  Pending: {}",
                stats.total_invited,
                stats.attending,
                stats.attending_with_plus_ones,
                stats.not_attending,
                stats.pending
            )?;
            writeln!(out)?;
            write_guests(out, guests)
        }
        ViewPayload::Tasks { tasks, stats, .. } => {
            writeln!(
                out,
                "Completed {} of {} ({:.0}%)",
                stats.completed, stats.total, stats.completion_percent
            )?;
            writeln!(out)?;
            write_tasks(out, tasks)
        }
        ViewPayload::Vendors { vendors, stats, .. } => {
            writeln!(
                out,
                "Booked: {}  Pending: {}  Total cost: {}  Booked cost: {}  Deposits paid: {}",
                stats.booked,
                stats.pending,
                money(stats.total_cost),
                money(stats.booked_cost),
                money(stats.deposits_paid)
            )?;
            writeln!(out)?;
            write_vendors(out, vendors)
        }
        ViewPayload::Budget { expenses, stats } => {
            write_budget(out, stats)?;
            writeln!(out)?;
            write_expenses(out, expenses)
        }
        ViewPayload::NotFound { path, message } => {
            writeln!(out, "404: {}", message)?;
            writeln!(out, "No page at {:?}. Try /dashboard.", path)
        }
    }
}

fn write_dashboard(out: &mut String, summary: &DashboardSummary) -> std::fmt::Result {
    let c = &summary.countdown;
    writeln!(out, "Wedding day: {}", summary.wedding_date)?;
    if c.has_passed() {
        writeln!(out, "Countdown:   the big day has arrived")?;
    } else {
        writeln!(
            out,
            "Countdown:   {}d {}h {}m {}s",
            c.days, c.hours, c.minutes, c.seconds
        )?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "Guests:   {} attending ({} with plus-ones) of {} invited",
        summary.guests.attending, summary.guests.attending_with_plus_ones, summary.guests.total_invited
    )?;
    writeln!(
        out,
        "Tasks:    {} of {} completed ({:.0}%)",
        summary.tasks.completed, summary.tasks.total, summary.tasks.completion_percent
    )?;
    writeln!(
        out,
        "Vendors:  {} of {} booked",
        summary.vendors.booked, summary.vendors.total
    )?;
    writeln!(
        out,
        "Budget:   {} of {} used ({:.1}%)",
        money(summary.budget.total_actual),
        money(summary.budget.total_budget),
        summary.budget.percent_used
    )?;
    writeln!(out)?;

    writeln!(out, "Upcoming tasks")?;
    write_tasks(out, &summary.upcoming_tasks)
}

fn write_guests(out: &mut String, guests: &[Guest]) -> std::fmt::Result {
    if guests.is_empty() {
        return writeln!(out, "No guests yet.");
    }
    writeln!(
        out,
        "{:<4} {:<20} {:<26} {:<14} {:<6} {}",
        "ID", "Name", "Email", "Status", "+1", "Group"
    )?;
    writeln!(out, "{}", "-".repeat(80))?;
    for guest in guests {
        writeln!(
            out,
            "{:<4} {:<20} {:<26} {:<14} {:<6} {}",
            guest.id,
            guest.name,
            guest.email,
            guest.status.to_string(),
            if guest.plus_one { "yes" } else { "no" },
            guest.group.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}

fn write_tasks(out: &mut String, tasks: &[Task]) -> std::fmt::Result {
    if tasks.is_empty() {
        return writeln!(out, "No tasks yet.");
    }
    writeln!(
        out,
        "{:<4} {:<4} {:<24} {:<12} {:<12} {}",
        "ID", "Done", "Title", "Category", "Due", "Priority"
    )?;
    writeln!(out, "{}", "-".repeat(70))?;
    for task in tasks {
        writeln!(
            out,
            "{:<4} {:<4} {:<24} {:<12} {:<12} {}",
            task.id,
            if task.completed { "[x]" } else { "[ ]" },
            task.title,
            task.category,
            task.due_date.to_string(),
            task.priority
        )?;
    }
    Ok(())
}

fn write_vendors(out: &mut String, vendors: &[Vendor]) -> std::fmt::Result {
    if vendors.is_empty() {
        return writeln!(out, "No vendors yet.");
    }
    writeln!(
        out,
        "{:<4} {:<30} {:<14} {:<8} {:>10} {:>10}",
        "ID", "Name", "Category", "Booked", "Cost", "Deposit"
    )?;
    writeln!(out, "{}", "-".repeat(80))?;
    for vendor in vendors {
        writeln!(
            out,
            "{:<4} {:<30} {:<14} {:<8} {:>10} {:>10}",
            vendor.id,
            vendor.name,
            vendor.category,
            if vendor.booked { "yes" } else { "no" },
            vendor.cost.map(money).unwrap_or_else(|| "-".to_string()),
            vendor.deposit.map(money).unwrap_or_else(|| "-".to_string())
        )?;
    }
    Ok(())
}

fn write_budget(out: &mut String, stats: &BudgetStats) -> std::fmt::Result {
    writeln!(out, "Total budget: {}", money(stats.total_budget))?;
    writeln!(out, "Estimated:    {}", money(stats.total_estimated))?;
    writeln!(out, "Actual:       {}", money(stats.total_actual))?;
    writeln!(out, "Paid:         {}", money(stats.total_paid))?;
    writeln!(
        out,
        "Remaining:    {}{}",
        money(stats.remaining),
        if stats.over_budget { "  (over budget)" } else { "" }
    )?;

    if !stats.categories.is_empty() {
        writeln!(out)?;
        writeln!(out, "{:<24} {:>10} {:>7}", "Category", "Spent", "Share")?;
        writeln!(out, "{}", "-".repeat(43))?;
        for category in &stats.categories {
            writeln!(
                out,
                "{:<24} {:>10} {:>6.1}%",
                category.category,
                money(category.total),
                category.percentage
            )?;
        }
    }
    Ok(())
}

fn write_expenses(out: &mut String, expenses: &[Expense]) -> std::fmt::Result {
    if expenses.is_empty() {
        return writeln!(out, "No expenses yet.");
    }
    writeln!(
        out,
        "{:<4} {:<20} {:<20} {:>10} {:>10} {}",
        "ID", "Name", "Category", "Estimated", "Actual", "Paid"
    )?;
    writeln!(out, "{}", "-".repeat(75))?;
    for expense in expenses {
        writeln!(
            out,
            "{:<4} {:<20} {:<20} {:>10} {:>10} {}",
            expense.id,
            expense.name,
            expense.category,
            money(expense.estimated_cost),
            expense.actual_cost.map(money).unwrap_or_else(|| "-".to_string()),
            if expense.paid { "yes" } else { "no" }
        )?;
    }
    Ok(())
}

fn money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::Planner;
    use chrono::{TimeZone, Utc};

    fn render(path: &str) -> String {
        let planner = Planner::seeded();
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        render_text(&ViewPayload::for_path(path, planner.ledgers(), now))
    }

    #[test]
    fn test_render_dashboard() {
        let text = render("/dashboard");
        assert!(text.starts_with("Dashboard"));
        assert!(text.contains("Countdown:   167d 0h 0m 0s"));
        assert!(text.contains("Upcoming tasks"));
        assert!(text.contains("Send save-the-dates"));
    }

    #[test]
    fn test_render_guests() {
        let text = render("/guests");
        assert!(text.contains("John Smith"));
        assert!(text.contains("not attending"));
    }

    #[test]
    fn test_render_budget() {
        let text = render("/budget");
        assert!(text.contains("Remaining:    $8000.00"));
        assert!(text.contains("Food & Drinks"));
    }

    #[test]
    fn test_render_not_found() {
        let text = render("/timeline");
        assert!(text.starts_with("Page Not Found"));
        assert!(text.contains("\"/timeline\""));
    }

    #[test]
    fn test_render_empty_budget() {
        let planner = Planner::new(30000.0, chrono::NaiveDate::from_ymd_opt(2025, 10, 15).unwrap());
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        let text = render_text(&ViewPayload::for_path("/budget", planner.ledgers(), now));

        assert!(!text.contains("$-0.00"));
        assert!(text.contains("$0.00"));
    }

    #[test]
    fn test_money() {
        assert_eq!(money(2500.0), "$2500.00");
        assert_eq!(money(-150.5), "-$150.50");
        assert_eq!(money(-0.0), "$0.00");
    }
}
