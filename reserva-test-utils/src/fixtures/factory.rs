//! Factory functions for building chrono values used across reservation tests.
//!
//! Reservation tests construct a lot of dates and instants. These helpers keep
//! the call sites short and panic immediately on an invalid component, which in
//! a test is the right failure mode.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Build a calendar date for a reserva.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date")
}

/// Build a UTC instant, typically a hora_inicio or hora_fim.
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}
