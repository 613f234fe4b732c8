//! Balance consistency engine.
//!
//! The authoritative mutator of an account's materialized balance. Every
//! lifecycle event of a confirmed movement funnels through the three
//! operations here (apply / reverse / update), each of which holds the
//! account's lock for its whole read-modify-write.

pub mod error;
pub mod locks;
pub mod service;

#[cfg(test)]
mod service_props;

pub use error::BalanceError;
pub use locks::AccountLocks;
pub use service::BalanceService;
