pub mod block;
pub mod hash;
pub mod model;
pub mod pow;
pub mod producer;

pub use block::{Block, Payload};
pub use hash::crypto_hash;
pub use model::{Blockchain, is_valid_chain};
pub use pow::ProofOfWork;
pub use producer::{BlockProducer, StaticProducer};

/// Balance every wallet holds before any chain activity.
pub const STARTING_BALANCE: u64 = 1000;

/// Target milliseconds per block for difficulty adjustment.
pub const MINE_RATE_MS: i64 = 1000;

/// Difficulty carried by the genesis block (leading zero bits).
pub const INITIAL_DIFFICULTY: u32 = 3;

/// Difficulty bounds. Adjusted difficulty always lands inside them, even
/// when an adopted chain ends on a block outside them.
pub const DIFF_MIN: u32 = 1;
pub const DIFF_MAX: u32 = 24;
