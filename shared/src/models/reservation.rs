//! Reservation Model

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::datetime::{self, serde_date, serde_time};
use crate::error::ValidationError;
use crate::util::format_phone_number;
use crate::validation::{self, OpeningHours};

/// Reservation status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Booked,
    Seated,
    Finished,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::Seated => "seated",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
        }
    }

    /// Only booked reservations can be seated, edited or cancelled
    pub fn is_actionable(&self) -> bool {
        matches!(self, Self::Booked)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    #[serde(with = "serde_date")]
    pub reservation_date: NaiveDate,
    #[serde(with = "serde_time")]
    pub reservation_time: NaiveTime,
    /// Party size
    pub people: u32,
    #[serde(default)]
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `YYYY-MM-DD`
    pub fn display_date(&self) -> String {
        datetime::format_date(self.reservation_date)
    }

    /// `HH:MM`
    pub fn display_time(&self) -> String {
        datetime::format_time(self.reservation_time)
    }

    /// Populate an edit form from an existing reservation
    pub fn to_form(&self) -> ReservationForm {
        ReservationForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            mobile_number: self.mobile_number.clone(),
            reservation_date: self.display_date(),
            reservation_time: self.display_time(),
            people: self.people.to_string(),
        }
    }
}

/// Create/edit reservation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    #[serde(with = "serde_date")]
    pub reservation_date: NaiveDate,
    #[serde(with = "serde_time")]
    pub reservation_time: NaiveTime,
    pub people: u32,
}

/// Reservation form input as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub people: String,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            mobile_number: String::new(),
            reservation_date: String::new(),
            reservation_time: String::new(),
            people: "1".into(),
        }
    }
}

impl ReservationForm {
    /// Progressive mobile number formatting for input handlers
    pub fn set_mobile_number(&mut self, raw: &str) {
        self.mobile_number = format_phone_number(raw);
    }

    /// Validate the form against `hours` at `now` and coerce it into a payload.
    ///
    /// Field-level problems (missing fields, unparseable date/time/party
    /// size) are reported before the opening-hours rules run.
    pub fn into_draft(
        self,
        hours: &OpeningHours,
        now: NaiveDateTime,
    ) -> Result<ReservationDraft, ValidationError> {
        let mut messages = Vec::new();

        let required = [
            &self.first_name,
            &self.last_name,
            &self.mobile_number,
            &self.reservation_date,
            &self.reservation_time,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            messages.push("Please fill out all fields.".to_string());
        }

        let date = datetime::parse_reservation_date(&self.reservation_date);
        if date.is_none() && !self.reservation_date.trim().is_empty() {
            messages.push("Reservation date must be formatted YYYY-MM-DD.".to_string());
        }
        let time = datetime::parse_reservation_time(&self.reservation_time);
        if time.is_none() && !self.reservation_time.trim().is_empty() {
            messages.push("Reservation time must be formatted HH:MM.".to_string());
        }
        let people = match self.people.trim().parse::<u32>() {
            Ok(n) if n >= 1 => Some(n),
            _ => {
                messages.push("Party size must be at least 1.".to_string());
                None
            }
        };

        ValidationError::check(messages)?;
        let (Some(date), Some(time), Some(people)) = (date, time, people) else {
            return Err(ValidationError::new("Please fill out all fields."));
        };

        validation::validate_reservation_slot(date, time, now, hours)?;

        Ok(ReservationDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            mobile_number: format_phone_number(&self.mobile_number),
            reservation_date: date,
            reservation_time: time,
            people,
        })
    }
}
