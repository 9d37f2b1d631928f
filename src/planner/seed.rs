//! Example records every fresh planner starts with

use chrono::NaiveDate;

use crate::planner::expense::ExpenseDraft;
use crate::planner::guest::{GuestDraft, GuestStatus};
use crate::planner::task::{Priority, TaskDraft};
use crate::planner::vendor::VendorDraft;

pub const SEED_TOTAL_BUDGET: f64 = 30_000.0;

pub fn seed_wedding_date() -> NaiveDate {
    date(2025, 10, 15)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn seed_guests() -> Vec<GuestDraft> {
    vec![
        GuestDraft::new("John Smith", "john@example.com")
            .phone("555-123-4567")
            .status(GuestStatus::Attending)
            .plus_one(true)
            .group("Family")
            .meal_preference("Chicken"),
        GuestDraft::new("Emma Johnson", "emma@example.com")
            .phone("555-987-6543")
            .status(GuestStatus::Attending)
            .group("Friends")
            .meal_preference("Vegetarian"),
        GuestDraft::new("Michael Brown", "michael@example.com")
            .status(GuestStatus::NotAttending)
            .group("Work"),
        GuestDraft::new("Sophia Davis", "sophia@example.com")
            .phone("555-111-2222")
            .plus_one(true)
            .group("Family"),
    ]
}

pub fn seed_tasks() -> Vec<TaskDraft> {
    vec![
        TaskDraft::new("Book venue", "Venue", date(2025, 5, 15))
            .description("Find and secure a wedding venue for the ceremony and reception")
            .priority(Priority::High)
            .completed(true),
        TaskDraft::new("Send save-the-dates", "Invitations", date(2025, 5, 20))
            .description("Design and mail save-the-date cards to all guests"),
        TaskDraft::new("Hire photographer", "Vendors", date(2025, 5, 25))
            .description("Research and book a wedding photographer")
            .priority(Priority::High),
        TaskDraft::new("Choose menu", "Food", date(2025, 6, 1))
            .description("Select reception menu options and schedule tasting"),
        TaskDraft::new("Order wedding cake", "Food", date(2025, 6, 10))
            .description("Choose design and flavors for the wedding cake"),
        TaskDraft::new("Book makeup artist", "Beauty", date(2025, 6, 15))
            .description("Find and secure a makeup artist for the wedding day")
            .assigned_to("Bride"),
        TaskDraft::new("Rent tuxedos", "Attire", date(2025, 6, 20))
            .description("Choose and reserve tuxedos for groom and groomsmen")
            .assigned_to("Groom"),
        TaskDraft::new("Plan honeymoon", "Honeymoon", date(2025, 7, 1))
            .description("Research destinations, book flights and accommodations")
            .priority(Priority::Low),
    ]
}

pub fn seed_vendors() -> Vec<VendorDraft> {
    vec![
        VendorDraft::new("Elegant Events Venue", "Venue")
            .contact("Sarah Johnson", "sarah@elegantevents.com", "555-123-4567")
            .website("https://elegantevents.com")
            .notes("Beautiful venue with garden for ceremony and ballroom for reception.")
            .booked(true)
            .cost(8000.0)
            .deposit(2000.0),
        VendorDraft::new("Divine Catering", "Catering")
            .contact("Michael Chen", "michael@divinecatering.com", "555-987-6543")
            .website("https://divinecatering.com")
            .notes("Offers a variety of menu options. Need to schedule tasting.")
            .cost(5000.0),
        VendorDraft::new("Blooming Bouquets", "Florist")
            .contact("Emma Garcia", "emma@bloomingbouquets.com", "555-456-7890")
            .website("https://bloomingbouquets.com")
            .notes("Specializes in seasonal flowers. Offers package discounts.")
            .booked(true)
            .cost(2500.0)
            .deposit(500.0),
        VendorDraft::new("Capture Moments Photography", "Photography")
            .contact("David Williams", "david@capturemoments.com", "555-789-0123")
            .website("https://capturemoments.com")
            .notes("Check portfolio for wedding samples. Includes engagement photoshoot.")
            .cost(3500.0),
    ]
}

pub fn seed_expenses() -> Vec<ExpenseDraft> {
    vec![
        ExpenseDraft::new("Venue Rental", "Venue", 8000.0)
            .actual_cost(8500.0)
            .paid(true)
            .vendor("Elegant Events Venue")
            .due_date(date(2025, 4, 15)),
        ExpenseDraft::new("Catering", "Food & Drinks", 5000.0)
            .actual_cost(5200.0)
            .notes("Includes appetizers, main course, and dessert for 100 guests")
            .vendor("Divine Catering")
            .due_date(date(2025, 9, 1)),
        ExpenseDraft::new("Photography", "Photography & Video", 3500.0)
            .notes("8 hours of coverage, engagement session included")
            .vendor("Capture Moments Photography")
            .due_date(date(2025, 8, 15)),
        ExpenseDraft::new("Wedding Dress", "Attire", 2000.0)
            .actual_cost(2300.0)
            .paid(true)
            .due_date(date(2025, 5, 30)),
        ExpenseDraft::new("Flowers", "Decor", 2500.0)
            .actual_cost(2500.0)
            .paid(true)
            .vendor("Blooming Bouquets")
            .due_date(date(2025, 9, 10)),
    ]
}
