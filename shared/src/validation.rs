//! Client-side rules checked before a request is sent
//!
//! The backend enforces these too; running them first gives the user every
//! problem at once instead of one round trip per rule.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::ValidationError;
use crate::models::{DiningTable, Reservation, TableDraft};

/// When the restaurant takes reservations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    /// Weekly closure day
    pub closed_on: Weekday,
    pub opens_at: NaiveTime,
    pub closes_at: NaiveTime,
    /// Latest accepted start time (one hour before closing)
    pub last_seating: NaiveTime,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            closed_on: Weekday::Tue,
            opens_at: hm(10, 30),
            closes_at: hm(21, 30),
            last_seating: hm(20, 30),
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// `10:30AM`, `9:30PM`
fn clock(time: NaiveTime) -> String {
    time.format("%-I:%M%p").to_string()
}

/// Check a requested slot against the closure day, the current moment and
/// the opening hours.
///
/// Only one opening-hours message is reported: before opening, after
/// closing, or after the last-seating cutoff, checked in that order.
pub fn validate_reservation_slot(
    date: NaiveDate,
    time: NaiveTime,
    now: NaiveDateTime,
    hours: &OpeningHours,
) -> Result<(), ValidationError> {
    use chrono::Datelike;

    let mut messages = Vec::new();

    if date.weekday() == hours.closed_on {
        messages.push(format!(
            "Reservations cannot be made on a {} (Restaurant is closed).",
            weekday_name(hours.closed_on)
        ));
    }

    if date.and_time(time) < now {
        messages.push("Reservations cannot be made in the past.".to_string());
    }

    if time < hours.opens_at {
        messages.push(format!(
            "Reservation cannot be made: Restaurant is not open until {}.",
            clock(hours.opens_at)
        ));
    } else if time > hours.closes_at {
        messages.push(format!(
            "Reservation cannot be made: Restaurant is closed after {}.",
            clock(hours.closes_at)
        ));
    } else if time > hours.last_seating {
        messages.push(format!(
            "Reservation cannot be made: Reservation must be made before {}.",
            clock(hours.last_seating)
        ));
    }

    ValidationError::check(messages)
}

/// Validate table form input and coerce capacity to a number.
pub fn validate_table(table_name: &str, capacity: &str) -> Result<TableDraft, ValidationError> {
    let table_name = table_name.trim();
    let capacity = capacity.trim();

    if table_name.is_empty() || capacity.is_empty() {
        return Err(ValidationError::new("Please fill out all fields."));
    }

    let mut messages = Vec::new();
    if table_name.chars().count() < 2 {
        messages.push("Table name must be at least 2 characters.".to_string());
    }
    let parsed = capacity.parse::<u32>().ok().filter(|c| *c >= 1);
    if parsed.is_none() {
        messages.push("Table capacity must be at least 1.".to_string());
    }

    ValidationError::check(messages)?;
    Ok(TableDraft {
        table_name: table_name.to_string(),
        capacity: parsed.unwrap_or(1),
    })
}

/// Check that `reservation` can be seated at `table`.
///
/// Both are the resolved objects, not their ids; a missing object is
/// reported rather than skipped.
pub fn validate_seating(
    table: Option<&DiningTable>,
    reservation: Option<&Reservation>,
) -> Result<(), ValidationError> {
    let mut messages = Vec::new();

    if table.is_none() {
        messages.push("Table does not exist.".to_string());
    }
    if reservation.is_none() {
        messages.push("Reservation does not exist.".to_string());
    }

    if let Some(table) = table {
        if table.is_occupied() {
            messages.push("Table selected is occupied.".to_string());
        }
        if let Some(reservation) = reservation
            && table.capacity < reservation.people
        {
            messages.push("Table selected cannot seat number of people.".to_string());
        }
    }

    ValidationError::check(messages)
}

/// Only booked reservations can be seated, edited or cancelled.
pub fn validate_actionable(reservation: &Reservation) -> Result<(), ValidationError> {
    if reservation.status.is_actionable() {
        Ok(())
    } else {
        Err(ValidationError::new(format!(
            "Reservation is already {}.",
            reservation.status
        )))
    }
}
