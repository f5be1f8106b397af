//! Tablebook Client - HTTP gateway for the reservation backend
//!
//! Typed reservation and table operations over the backend's JSON
//! envelope, with per-call cancellation.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod workflow;

pub use api::ReservationQuery;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{Gateway, RequestOptions};
pub use workflow::{Dashboard, SearchResult};

// Re-export shared types for convenience
pub use shared::{
    DiningTable, OpeningHours, Reservation, ReservationDraft, ReservationForm, ReservationStatus,
    TableDraft, TableForm, ValidationError,
};
pub use tokio_util::sync::CancellationToken;
