//! API Routes
//!
//! Route handlers organized by functionality.

pub mod budget;
pub mod health;
pub mod records;
pub mod stats;
pub mod views;
