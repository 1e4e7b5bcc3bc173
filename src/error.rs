use thiserror::Error;

/// Every failure the ledger reports. None of them leave state half-applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("amount {amount} exceeds balance {balance}")]
    InsufficientBalance { amount: u64, balance: u64 },

    #[error("the incoming chain must be longer ({candidate} <= {current} blocks)")]
    ChainNotLonger { candidate: usize, current: usize },

    #[error("the incoming chain must be valid")]
    InvalidChain,

    #[error("unknown wallet: {0}")]
    UnknownWallet(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
