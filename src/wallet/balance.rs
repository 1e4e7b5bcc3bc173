use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::blockchain::{Block, STARTING_BALANCE};

/// How a wallet's balance is rebuilt from chain history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Replay {
    /// `STARTING_BALANCE` plus every output ever paid to the address.
    #[default]
    Full,
    /// Walk back from the tail and stop at the address's most recent spend.
    /// That spend's change output stands in for all earlier history, so
    /// `STARTING_BALANCE` is only added when the address never spent.
    SinceLastSpend,
}

impl Replay {
    pub fn balance(self, chain: &[Block], address: &str) -> u64 {
        let transactions = chain.iter().filter_map(Block::transaction);
        match self {
            Replay::Full => transactions
                .filter_map(|tx| tx.output_for(address))
                .fold(STARTING_BALANCE, u64::saturating_add),
            Replay::SinceLastSpend => {
                let mut total: u64 = 0;
                for tx in transactions.rev() {
                    total = total.saturating_add(tx.output_for(address).unwrap_or(0));
                    if tx.input.address == address {
                        return total;
                    }
                }
                total.saturating_add(STARTING_BALANCE)
            }
        }
    }
}

impl fmt::Display for Replay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replay::Full => f.write_str("full"),
            Replay::SinceLastSpend => f.write_str("since_last_spend"),
        }
    }
}

impl FromStr for Replay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Replay::Full),
            "since_last_spend" => Ok(Replay::SinceLastSpend),
            other => Err(format!("unknown balance replay mode: {other}")),
        }
    }
}

/// Balance of `address` on `chain` under the full replay rule.
pub fn balance_of(chain: &[Block], address: &str) -> u64 {
    Replay::Full.balance(chain, address)
}
