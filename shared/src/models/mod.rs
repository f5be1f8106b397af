//! Data models
//!
//! Mirrors the reservation backend's JSON shapes. IDs are `i64` as issued
//! by the backend; the client never generates them.

pub mod dining_table;
pub mod reservation;

// Re-exports
pub use dining_table::*;
pub use reservation::*;
