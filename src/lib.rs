//! Hash-linked in-memory ledger with longest-valid-chain replacement and
//! wallets whose balances are replayed from chain history.

pub mod api;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod transaction;
pub mod wallet;

pub use error::{LedgerError, Result};
