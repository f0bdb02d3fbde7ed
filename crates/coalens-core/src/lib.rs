//! Core wire contracts for the coalens COA-analysis client.
//!
//! Every type here mirrors a payload exchanged with the analysis backend,
//! field-for-field. The backend owns creation, mutation, and deletion of all
//! entities; this crate carries shapes and a handful of derived display
//! helpers, nothing more. No HTTP, no UI dependencies.

pub mod blog;
pub mod coa;
pub mod error;
pub mod health;
pub mod review;
pub mod share;
pub mod validation;

pub use error::{Error, Result};
