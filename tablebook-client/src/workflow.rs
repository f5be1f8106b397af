//! Multi-step flows the dashboard and forms run against the gateway
//!
//! Every flow validates first, sends second and reloads the dashboard
//! last, so callers only render what a flow returns.

use chrono::{NaiveDate, NaiveDateTime};
use shared::validation::{validate_actionable, validate_seating};
use shared::{
    DiningTable, OpeningHours, Reservation, ReservationForm, ReservationStatus, TableForm,
    ValidationError,
};
use tokio_util::sync::CancellationToken;

use crate::http::is_cancelled;
use crate::{ClientResult, Gateway, ReservationQuery};

/// Reservations and tables for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub date: NaiveDate,
    pub reservations: Vec<Reservation>,
    pub tables: Vec<DiningTable>,
}

impl Dashboard {
    /// Reservations still waiting for or occupying a table
    pub fn active_reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.iter().filter(|r| {
            matches!(
                r.status,
                ReservationStatus::Booked | ReservationStatus::Seated
            )
        })
    }

    pub fn free_tables(&self) -> impl Iterator<Item = &DiningTable> {
        self.tables.iter().filter(|t| !t.is_occupied())
    }

    pub fn previous_date(&self) -> NaiveDate {
        shared::datetime::previous(self.date)
    }

    pub fn next_date(&self) -> NaiveDate {
        shared::datetime::next(self.date)
    }
}

/// Reservations found for a mobile number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub mobile_number: String,
    pub reservations: Vec<Reservation>,
}

impl SearchResult {
    /// "No reservations found"
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

impl Gateway {
    /// List reservations for `date` and all tables, both in flight at once.
    pub async fn load_dashboard(
        &self,
        date: NaiveDate,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Dashboard> {
        let query = ReservationQuery::for_date(date);
        let (reservations, tables) = tokio::join!(
            self.list_reservations(&query, cancel),
            self.list_tables(cancel)
        );

        Ok(Dashboard {
            date,
            reservations: reservations?,
            tables: tables?,
        })
    }

    /// Validate a reservation form, then create it (or edit `existing`).
    ///
    /// Editing requires the stored reservation to still be booked. Returns
    /// the date the dashboard should move to.
    pub async fn submit_reservation(
        &self,
        form: ReservationForm,
        existing: Option<i64>,
        hours: &OpeningHours,
        now: NaiveDateTime,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<NaiveDate> {
        let draft = form.into_draft(hours, now)?;
        match existing {
            Some(id) => {
                if self.read_actionable(id, cancel).await?.is_some() {
                    self.edit_reservation(id, &draft, cancel).await?;
                }
            }
            None => {
                self.create_reservation(&draft, cancel).await?;
            }
        }
        Ok(draft.reservation_date)
    }

    /// Validate a table form, then create the table.
    pub async fn submit_table(
        &self,
        form: TableForm,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Option<DiningTable>> {
        let draft = form.into_draft()?;
        self.create_table(&draft, cancel).await
    }

    /// Seat a reservation at the selected table, then reload its day.
    ///
    /// The reservation and table list are fetched first and the selected
    /// table object is checked for an occupant and enough capacity. Returns
    /// `None` when cancelled.
    pub async fn seat_at_table(
        &self,
        reservation_id: i64,
        table_id: Option<i64>,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Option<Dashboard>> {
        let (reservation, tables) = tokio::join!(
            self.read_reservation(reservation_id, cancel),
            self.list_tables(cancel)
        );
        let (reservation, tables) = (reservation?, tables?);
        if is_cancelled(cancel) {
            return Ok(None);
        }

        let table = table_id.and_then(|id| tables.iter().find(|t| t.table_id == id));
        validate_seating(table, reservation.as_ref())?;

        let Some(reservation) = reservation else {
            return Ok(None);
        };
        validate_actionable(&reservation)?;
        let Some(table) = table else {
            return Ok(None);
        };

        self.seat_reservation(table.table_id, reservation.reservation_id, cancel)
            .await?;
        if is_cancelled(cancel) {
            return Ok(None);
        }
        self.load_dashboard(reservation.reservation_date, cancel)
            .await
            .map(Some)
    }

    /// Free a table, then reload the dashboard for `date`.
    pub async fn finish_table(
        &self,
        table_id: i64,
        date: NaiveDate,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Dashboard> {
        self.release_table(table_id, cancel).await?;
        self.load_dashboard(date, cancel).await
    }

    /// Mark a booked reservation cancelled, then reload the dashboard for `date`.
    pub async fn cancel_reservation(
        &self,
        reservation_id: i64,
        date: NaiveDate,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Dashboard> {
        if self.read_actionable(reservation_id, cancel).await?.is_some() {
            self.update_reservation_status(reservation_id, ReservationStatus::Cancelled, cancel)
                .await?;
        }
        self.load_dashboard(date, cancel).await
    }

    /// Read a reservation and refuse it unless it is still booked.
    ///
    /// `None` when cancelled.
    async fn read_actionable(
        &self,
        reservation_id: i64,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Option<Reservation>> {
        let reservation = self.read_reservation(reservation_id, cancel).await?;
        if is_cancelled(cancel) {
            return Ok(None);
        }
        let Some(reservation) = reservation else {
            return Err(ValidationError::new("Reservation does not exist.").into());
        };
        validate_actionable(&reservation)?;
        Ok(Some(reservation))
    }

    /// Find reservations by mobile number as typed.
    pub async fn search_by_phone(
        &self,
        mobile_number: &str,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<SearchResult> {
        let reservations = self.list_reservations_by_phone(mobile_number, cancel).await?;
        Ok(SearchResult {
            mobile_number: mobile_number.trim().to_string(),
            reservations,
        })
    }
}
