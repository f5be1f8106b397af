use chrono::NaiveDate;
use reqwest::Method;
use shared::datetime::format_date;
use shared::{Reservation, ReservationDraft, ReservationStatus};
use tokio_util::sync::CancellationToken;

use super::StatusPayload;
use crate::http::is_cancelled;
use crate::{ClientResult, Gateway, RequestOptions};

/// Query for `GET /reservations`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationQuery {
    params: Vec<(String, String)>,
}

impl ReservationQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reservations on `date`
    pub fn for_date(date: NaiveDate) -> Self {
        Self::new().param("date", format_date(date))
    }

    /// Reservations whose mobile number matches `mobile_number`
    pub fn for_mobile_number(mobile_number: impl Into<String>) -> Self {
        Self::new().param("mobile_number", mobile_number)
    }

    /// Any extra query parameter the backend understands
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    fn into_options(self) -> RequestOptions {
        self.params
            .into_iter()
            .fold(RequestOptions::get(), |opts, (k, v)| opts.query(k, v))
    }
}

impl Gateway {
    /// `GET /reservations?date=...`, plus any extra parameters in `query`.
    ///
    /// Dates and times come back normalized to `YYYY-MM-DD` / `HH:MM`.
    pub async fn list_reservations(
        &self,
        query: &ReservationQuery,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Vec<Reservation>> {
        let options = query.clone().into_options();
        let list: Option<Vec<Reservation>> = self
            .request("reservations", options, cancel, Some(Vec::new()))
            .await?;
        Ok(list.unwrap_or_default())
    }

    /// `GET /reservations?mobile_number=...`
    pub async fn list_reservations_by_phone(
        &self,
        mobile_number: &str,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Vec<Reservation>> {
        let query = ReservationQuery::for_mobile_number(mobile_number.trim());
        self.list_reservations(&query, cancel).await
    }

    /// `GET /reservations/{id}`
    pub async fn read_reservation(
        &self,
        reservation_id: i64,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Option<Reservation>> {
        self.request(
            &format!("reservations/{reservation_id}"),
            RequestOptions::get(),
            cancel,
            None,
        )
        .await
    }

    /// `POST /reservations`
    pub async fn create_reservation(
        &self,
        reservation: &ReservationDraft,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Option<Reservation>> {
        let options = RequestOptions::with_data(Method::POST, reservation)?;
        let created: Option<Reservation> =
            self.request("reservations", options, cancel, None).await?;
        if let Some(r) = &created {
            tracing::info!(
                reservation_id = r.reservation_id,
                date = %r.display_date(),
                "Reservation created"
            );
        }
        Ok(created)
    }

    /// `PUT /reservations/{id}`
    pub async fn edit_reservation(
        &self,
        reservation_id: i64,
        reservation: &ReservationDraft,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Option<Reservation>> {
        let options = RequestOptions::with_data(Method::PUT, reservation)?;
        self.request(
            &format!("reservations/{reservation_id}"),
            options,
            cancel,
            None,
        )
        .await
    }

    /// `PUT /reservations/{id}/status`
    ///
    /// Returns the status the backend recorded.
    pub async fn update_reservation_status(
        &self,
        reservation_id: i64,
        status: ReservationStatus,
        cancel: Option<&CancellationToken>,
    ) -> ClientResult<Option<ReservationStatus>> {
        let options = RequestOptions::with_data(Method::PUT, &StatusPayload { status })?;
        let updated: Option<StatusPayload> = self
            .request(
                &format!("reservations/{reservation_id}/status"),
                options,
                cancel,
                None,
            )
            .await?;
        if !is_cancelled(cancel) {
            tracing::info!(reservation_id, %status, "Reservation status updated");
        }
        Ok(updated.map(|p| p.status))
    }
}
