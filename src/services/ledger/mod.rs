//! Access to the node query service.

mod client;
mod error;

pub use client::{HttpLedgerClient, LedgerQueryClient};
pub use error::LedgerError;
