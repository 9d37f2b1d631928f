//! Countdown to the wedding day

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Time left until midnight (UTC) at the start of the wedding date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// All fields are zero once `now` reaches the target
    pub fn until(date: NaiveDate, now: DateTime<Utc>) -> Self {
        let target = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        let left = (target - now).num_seconds();
        if left <= 0 {
            return Self::default();
        }

        Self {
            days: left / SECS_PER_DAY,
            hours: (left % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (left % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: left % SECS_PER_MINUTE,
        }
    }

    pub fn has_passed(&self) -> bool {
        *self == Self::default()
    }
}
