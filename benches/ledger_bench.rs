//! Benchmarks for WeDay ledgers and aggregates
//!
//! Run with: cargo bench

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use weday::ledger::{Ledger, Selection};
use weday::planner::{
    Expense, ExpenseDraft, Guest, GuestDraft, GuestStatus, Task, TaskDraft,
};

fn create_guests(count: usize) -> Ledger<Guest> {
    let statuses = GuestStatus::all();
    Ledger::with_drafts((0..count).map(|i| {
        GuestDraft::new(format!("Guest {}", i), format!("guest{}@example.com", i))
            .status(statuses[i % statuses.len()])
            .plus_one(i % 4 == 0)
            .group(if i % 2 == 0 { "Family" } else { "Friends" })
    }))
}

fn create_tasks(count: usize) -> Ledger<Task> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    Ledger::with_drafts((0..count).map(|i| {
        // Spread due dates so the sort has work to do
        let due = start + Duration::days(((i * 37) % 365) as i64);
        TaskDraft::new(format!("Task {}", i), format!("Category {}", i % 8), due)
            .completed(i % 3 == 0)
    }))
}

fn create_expenses(count: usize) -> Ledger<Expense> {
    Ledger::with_drafts((0..count).map(|i| {
        let draft = ExpenseDraft::new(format!("Expense {}", i), format!("Category {}", i % 12), 100.0)
            .paid(i % 2 == 0);
        if i % 3 == 0 {
            draft
        } else {
            draft.actual_cost(120.0)
        }
    }))
}

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");

    for size in [100, 1000, 10000] {
        let guests = create_guests(size);
        let expenses = create_expenses(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("guest_stats_{}", size), |b| {
            b.iter(|| black_box(&guests).stats())
        });

        group.bench_function(format!("budget_stats_{}", size), |b| {
            b.iter(|| black_box(&expenses).stats(black_box(30000.0)))
        });
    }

    group.finish();
}

fn bench_tasks(c: &mut Criterion) {
    let mut group = c.benchmark_group("tasks");

    for size in [100, 1000, 10000] {
        let tasks = create_tasks(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("sorted_{}", size), |b| {
            b.iter(|| black_box(&tasks).sorted().len())
        });

        group.bench_function(format!("upcoming_5_{}", size), |b| {
            b.iter(|| black_box(&tasks).upcoming(5).len())
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let guests = create_guests(10000);
    let hit = Selection::search("guest 99");
    let miss = Selection::search("nobody");

    group.bench_function("search_hit_10000", |b| {
        b.iter(|| guests.select(black_box(&hit)).count())
    });

    group.bench_function("search_miss_10000", |b| {
        b.iter(|| guests.select(black_box(&miss)).count())
    });

    group.finish();
}

criterion_group!(benches, bench_stats, bench_tasks, bench_search);
criterion_main!(benches);
