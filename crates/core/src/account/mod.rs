//! Bank accounts and their lifecycle.

pub mod error;
pub mod service;
pub mod types;

pub use error::AccountError;
pub use service::AccountService;
pub use types::{Account, AccountType, CreateAccountInput, UpdateAccountInput};
