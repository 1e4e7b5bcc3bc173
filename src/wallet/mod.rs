pub mod balance;

pub use balance::{Replay, balance_of};

use crate::blockchain::{Block, STARTING_BALANCE};
use crate::error::Result;
use crate::transaction::Transaction;

/// An actor that spends from an address.
///
/// `balance` is only a cache; the chain is the source of truth and
/// [`balance_of`] rebuilds it.
#[derive(Debug, Clone)]
pub struct Wallet {
    address: String,
    pub balance: u64,
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

impl Wallet {
    /// Fresh wallet with a random 20-byte hex address.
    pub fn new() -> Self {
        let bytes: [u8; 20] = rand::random();
        Self {
            address: hex::encode(bytes),
            balance: STARTING_BALANCE,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Build a transfer. When `chain` is given the cached balance is first
    /// refreshed from it, so the spend is checked against replayed history.
    pub fn create_transaction(
        &mut self,
        recipient: &str,
        amount: u64,
        chain: Option<&[Block]>,
    ) -> Result<Transaction> {
        self.create_transaction_with(recipient, amount, chain, Replay::Full)
    }

    pub fn create_transaction_with(
        &mut self,
        recipient: &str,
        amount: u64,
        chain: Option<&[Block]>,
        replay: Replay,
    ) -> Result<Transaction> {
        if let Some(chain) = chain {
            self.balance = replay.balance(chain, &self.address);
        }
        Transaction::new(self, recipient, amount)
    }
}
