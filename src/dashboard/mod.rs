//! WeDay Dashboard
//!
//! Everything above the ledgers that a reader navigates:
//!
//! - **view**: path to page resolution, with a not-found fallback
//! - **countdown**: time left until the wedding day
//! - **summary**: the cross-ledger dashboard snapshot
//! - **payload**: serialisable page contents for any view
//! - **render**: plain-text tables for the terminal
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use weday::dashboard::{View, ViewPayload};
//! use weday::planner::Planner;
//!
//! let planner = Planner::seeded();
//! let payload = ViewPayload::for_path("/messages", planner.ledgers(), Utc::now());
//! assert_eq!(payload.view(), View::NotFound);
//! ```

pub mod countdown;
pub mod payload;
pub mod render;
pub mod summary;
pub mod view;

pub use countdown::Countdown;
pub use payload::{ViewPayload, NOT_FOUND_MESSAGE};
pub use render::render_text;
pub use summary::DashboardSummary;
pub use view::View;
