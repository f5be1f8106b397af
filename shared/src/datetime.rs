//! Reservation date/time normalization and dashboard date navigation
//!
//! The backend may hand back `reservation_date` as a full ISO timestamp and
//! `reservation_time` with seconds. Everything the client decodes is brought
//! to `YYYY-MM-DD` and `HH:MM` so display strings are consistent.

use chrono::{Days, Local, NaiveDate, NaiveTime, Timelike};

/// Display/wire format for reservation dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Display/wire format for reservation times
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a reservation date, keeping only the calendar part of a timestamp.
pub fn parse_reservation_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

/// Parse a reservation time, truncated to whole minutes.
pub fn parse_reservation_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    let time = NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(raw, TIME_FORMAT))
        .ok()?;
    time.with_second(0)?.with_nanosecond(0)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The day before `date` (saturates at the earliest representable date)
pub fn previous(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(1)).unwrap_or(date)
}

/// The day after `date` (saturates at the latest representable date)
pub fn next(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

/// Serde adapter for `reservation_date` fields
pub mod serde_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_reservation_date(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid reservation date: {raw}")))
    }
}

/// Serde adapter for `reservation_time` fields
pub mod serde_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_reservation_time(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid reservation time: {raw}")))
    }
}
