//! Shared types for the tablebook reservation client
//!
//! Wire models, the `{data}`/`{error}` response envelope, date/time
//! normalization and the client-side validation rules used before any
//! request is sent.

pub mod datetime;
pub mod error;
pub mod models;
pub mod response;
pub mod util;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::ValidationError;
pub use models::{
    DiningTable, Reservation, ReservationDraft, ReservationForm, ReservationStatus, TableDraft,
    TableForm,
};
pub use response::{DataEnvelope, Envelope};
pub use validation::OpeningHours;
