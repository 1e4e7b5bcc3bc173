use serde::{Deserialize, Serialize};
use serde_json::json;

use super::INITIAL_DIFFICULTY;
use super::hash::{crypto_hash, leading_zero_bits};
use crate::transaction::Transaction;

/// What a block carries. Only the genesis block is `Empty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    Empty,
    Transaction(Transaction),
}

impl Payload {
    pub fn transaction(&self) -> Option<&Transaction> {
        match self {
            Payload::Transaction(tx) => Some(tx),
            Payload::Empty => None,
        }
    }
}

impl From<Transaction> for Payload {
    fn from(tx: Transaction) -> Self {
        Payload::Transaction(tx)
    }
}

/// A single block in the chain holding one payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub timestamp: i64, // Unix milliseconds (UTC)
    pub previous_hash: String,
    pub hash: String,
    pub nonce: u64, // Proof-of-Work nonce
    pub difficulty: u32,
    pub payload: Payload,
}

impl Block {
    /// The fixed root block every valid chain starts with.
    pub fn genesis() -> Self {
        Self {
            timestamp: 1,
            previous_hash: String::from("-----"),
            hash: String::from("hash-one"),
            nonce: 0,
            difficulty: INITIAL_DIFFICULTY,
            payload: Payload::Empty,
        }
    }

    /// Digest of a block's contents, as stored in `hash`.
    pub fn hash_fields(
        timestamp: i64,
        previous_hash: &str,
        payload: &Payload,
        nonce: u64,
        difficulty: u32,
    ) -> String {
        crypto_hash(&[
            json!(timestamp),
            json!(previous_hash),
            json!(payload),
            json!(nonce),
            json!(difficulty),
        ])
    }

    /// Recompute the digest from this block's fields (ignores the cached `hash`).
    pub fn compute_hash(&self) -> String {
        Self::hash_fields(
            self.timestamp,
            &self.previous_hash,
            &self.payload,
            self.nonce,
            self.difficulty,
        )
    }

    /// Whether the cached `hash` satisfies the block's own difficulty.
    /// Chain validation does not require this; producers do.
    pub fn meets_difficulty(&self) -> bool {
        leading_zero_bits(&self.hash) >= self.difficulty
    }

    pub fn transaction(&self) -> Option<&Transaction> {
        self.payload.transaction()
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, Payload};
    use crate::blockchain::INITIAL_DIFFICULTY;
    use crate::wallet::Wallet;

    #[test]
    fn genesis_is_fixed() {
        let g = Block::genesis();
        assert_eq!(g, Block::genesis());
        assert_eq!(g.timestamp, 1);
        assert_eq!(g.previous_hash, "-----");
        assert_eq!(g.hash, "hash-one");
        assert_eq!(g.difficulty, INITIAL_DIFFICULTY);
        assert_eq!(g.payload, Payload::Empty);
    }

    #[test]
    fn hash_covers_every_field() {
        let base = Block::hash_fields(10, "prev", &Payload::Empty, 1, 2);
        assert_ne!(base, Block::hash_fields(11, "prev", &Payload::Empty, 1, 2));
        assert_ne!(base, Block::hash_fields(10, "other", &Payload::Empty, 1, 2));
        assert_ne!(base, Block::hash_fields(10, "prev", &Payload::Empty, 5, 2));
        assert_ne!(base, Block::hash_fields(10, "prev", &Payload::Empty, 1, 3));

        let tx = Wallet::new().create_transaction("r", 5, None).unwrap();
        assert_ne!(base, Block::hash_fields(10, "prev", &Payload::from(tx), 1, 2));
    }

    #[test]
    fn compute_hash_uses_block_fields() {
        let mut b = Block {
            timestamp: 42,
            previous_hash: "prev".into(),
            hash: String::new(),
            nonce: 7,
            difficulty: 1,
            payload: Payload::Empty,
        };
        b.hash = b.compute_hash();
        assert_eq!(b.hash, Block::hash_fields(42, "prev", &Payload::Empty, 7, 1));

        b.nonce += 1;
        assert_ne!(b.hash, b.compute_hash());
    }

    #[test]
    fn difficulty_is_read_from_hash_prefix() {
        let mut b = Block::genesis();
        b.difficulty = 8;
        b.hash = "00ff".into();
        assert!(b.meets_difficulty());
        b.hash = "01ff".into();
        assert!(!b.meets_difficulty());
    }
}
