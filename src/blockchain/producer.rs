use super::block::{Block, Payload};

/// Builds the next block on top of `previous`.
///
/// Implementations must return a block whose `previous_hash` is
/// `previous.hash` and whose `hash` matches its own fields.
pub trait BlockProducer {
    fn produce(&self, previous: &Block, payload: Payload) -> Block;
}

/// Deterministic producer with no work search: fixed nonce and difficulty,
/// timestamp one millisecond after the previous block.
#[derive(Debug, Clone, Copy)]
pub struct StaticProducer {
    pub nonce: u64,
    pub difficulty: u32,
}

impl Default for StaticProducer {
    fn default() -> Self {
        Self {
            nonce: 0,
            difficulty: 1,
        }
    }
}

impl BlockProducer for StaticProducer {
    fn produce(&self, previous: &Block, payload: Payload) -> Block {
        let timestamp = previous.timestamp.saturating_add(1);
        let hash = Block::hash_fields(
            timestamp,
            &previous.hash,
            &payload,
            self.nonce,
            self.difficulty,
        );
        Block {
            timestamp,
            previous_hash: previous.hash.clone(),
            hash,
            nonce: self.nonce,
            difficulty: self.difficulty,
            payload,
        }
    }
}
