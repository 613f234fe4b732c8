//! Settled transactions (movements) and their lifecycle.
//!
//! A movement only ever affects an account balance while it is in
//! `Confirmed` status; the lifecycle service keeps the balance engine in
//! sync on create, update, and delete.

pub mod error;
pub mod service;
pub mod types;

pub use error::MovementError;
pub use service::MovementService;
pub use types::{
    CreateMovementInput, Movement, MovementCategory, MovementStatus, MovementType,
    UpdateMovementInput,
};
