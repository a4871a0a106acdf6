//! Elapsed-day counter relative to the fixed anchor date.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// The anchor the day counter is measured from: 2020-12-20 00:00:00 local.
fn anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 12, 20)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("anchor date literal is valid")
}

/// Whole days elapsed between the anchor and `now`.
pub fn days_since_anchor(now: NaiveDateTime) -> i64 {
    (now - anchor()).num_days()
}

/// Whole days elapsed between the anchor and the current local time.
pub fn days_today() -> i64 {
    days_since_anchor(Local::now().naive_local())
}
