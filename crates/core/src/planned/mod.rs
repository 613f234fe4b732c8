//! Future/recurring transactions.
//!
//! Planned entries model anticipated effect only: they are consumed by the
//! projection logic and never mutate an account balance.

pub mod error;
pub mod service;
pub mod types;

pub use error::PlannedError;
pub use service::PlannedService;
pub use types::{CreatePlannedInput, Planned, Recurrence, UpdatePlannedInput};
