//! Precondition checks shared by the lifecycle services.

pub mod error;
pub mod service;

pub use error::ValidationError;
pub use service::ValidationService;
