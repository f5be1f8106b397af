//! Reservation and table operations
//!
//! Each operation builds a path and [`RequestOptions`](crate::RequestOptions)
//! and delegates to [`Gateway::request`](crate::Gateway::request). Cancelled
//! list calls resolve to an empty list, cancelled single-entity calls to
//! `None`.

mod reservations;
mod tables;

pub use reservations::ReservationQuery;

/// `{"status": ...}` body and response of the status endpoint
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StatusPayload {
    pub status: shared::ReservationStatus,
}

/// `{"reservation_id": ...}` body of the seat endpoint
#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct SeatPayload {
    pub reservation_id: i64,
}
