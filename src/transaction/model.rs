use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LedgerError, Result};
use crate::wallet::Wallet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub timestamp: i64, // Unix milliseconds (UTC)
    /// The sender's whole balance when the transaction was built.
    pub amount: u64,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub input: TxInput,
    /// Address -> amount. Ordered so the hash preimage is stable.
    pub outputs: BTreeMap<String, u64>,
}

impl Transaction {
    /// Transfer `amount` from `sender` to `recipient`, returning the rest of
    /// the sender's balance to the sender as change.
    ///
    /// Checks against the wallet's cached balance; see
    /// [`Wallet::create_transaction`] for a chain-refreshed variant.
    pub fn new(sender: &Wallet, recipient: &str, amount: u64) -> Result<Self> {
        let balance = sender.balance;
        if amount > balance {
            return Err(LedgerError::InsufficientBalance { amount, balance });
        }

        let mut outputs = BTreeMap::new();
        outputs.insert(recipient.to_string(), amount);
        // a self-payment overwrites the recipient entry with the full balance
        outputs.insert(sender.address().to_string(), balance - amount);

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            input: TxInput {
                timestamp: Utc::now().timestamp_millis(),
                amount: balance,
                address: sender.address().to_string(),
            },
            outputs,
        })
    }

    pub fn total_output_amount(&self) -> u128 {
        self.outputs.values().map(|&a| a as u128).sum()
    }

    /// Outputs must add up to exactly the input amount.
    pub fn is_valid(&self) -> bool {
        self.total_output_amount() == self.input.amount as u128
    }

    pub fn output_for(&self, address: &str) -> Option<u64> {
        self.outputs.get(address).copied()
    }
}
