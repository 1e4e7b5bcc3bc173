use chrono::Utc;
use log::debug;

use super::block::{Block, Payload};
use super::hash::leading_zero_bits;
use super::producer::BlockProducer;
use super::{DIFF_MAX, DIFF_MIN, MINE_RATE_MS};

/// Proof-of-Work producer: searches nonces until the digest has at least
/// `difficulty` leading zero bits, retuning difficulty against `mine_rate_ms`.
#[derive(Debug, Clone, Copy)]
pub struct ProofOfWork {
    pub mine_rate_ms: i64,
}

impl Default for ProofOfWork {
    fn default() -> Self {
        Self {
            mine_rate_ms: MINE_RATE_MS,
        }
    }
}

impl ProofOfWork {
    pub fn new(mine_rate_ms: i64) -> Self {
        Self { mine_rate_ms }
    }

    /// Difficulty for a block mined at `timestamp` on top of `previous`:
    /// one harder if `previous` came in under the mine rate, one easier
    /// otherwise, kept within `DIFF_MIN..=DIFF_MAX`.
    pub fn adjust_difficulty(&self, previous: &Block, timestamp: i64) -> u32 {
        let difficulty = previous.difficulty.clamp(DIFF_MIN, DIFF_MAX);
        let adjusted = if timestamp.saturating_sub(previous.timestamp) > self.mine_rate_ms {
            difficulty.saturating_sub(1)
        } else {
            difficulty.saturating_add(1)
        };
        adjusted.clamp(DIFF_MIN, DIFF_MAX)
    }
}

impl BlockProducer for ProofOfWork {
    fn produce(&self, previous: &Block, payload: Payload) -> Block {
        let mut nonce: u64 = 0;
        loop {
            nonce = nonce.wrapping_add(1);
            let timestamp = Utc::now().timestamp_millis();
            let difficulty = self.adjust_difficulty(previous, timestamp);
            let hash = Block::hash_fields(timestamp, &previous.hash, &payload, nonce, difficulty);

            if leading_zero_bits(&hash) >= difficulty {
                debug!("POW - sealed nonce={nonce} difficulty={difficulty} hash={hash}");
                return Block {
                    timestamp,
                    previous_hash: previous.hash.clone(),
                    hash,
                    nonce,
                    difficulty,
                    payload,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProofOfWork;
    use crate::blockchain::{Block, BlockProducer, DIFF_MAX, Payload};

    fn block_at(timestamp: i64, difficulty: u32) -> Block {
        Block {
            timestamp,
            difficulty,
            ..Block::genesis()
        }
    }

    #[test]
    fn raises_difficulty_for_fast_blocks() {
        let pow = ProofOfWork::new(1000);
        let prev = block_at(10_000, 4);
        assert_eq!(pow.adjust_difficulty(&prev, 10_500), 5);
        // exactly at the rate still counts as fast
        assert_eq!(pow.adjust_difficulty(&prev, 11_000), 5);
    }

    #[test]
    fn lowers_difficulty_for_slow_blocks() {
        let pow = ProofOfWork::new(1000);
        let prev = block_at(10_000, 4);
        assert_eq!(pow.adjust_difficulty(&prev, 11_001), 3);
    }

    #[test]
    fn difficulty_never_drops_below_one() {
        let pow = ProofOfWork::new(1000);
        assert_eq!(pow.adjust_difficulty(&block_at(0, 1), 5_000), 1);
        assert_eq!(pow.adjust_difficulty(&block_at(0, 0), 5_000), 1);
    }

    #[test]
    fn difficulty_never_exceeds_cap() {
        let pow = ProofOfWork::new(1000);
        assert_eq!(pow.adjust_difficulty(&block_at(0, DIFF_MAX), 10), DIFF_MAX);
        // a difficulty no 256-bit digest can meet is pulled back under the cap
        assert_eq!(pow.adjust_difficulty(&block_at(0, 300), 10), DIFF_MAX);
        assert_eq!(pow.adjust_difficulty(&block_at(0, 300), 5_000), DIFF_MAX - 1);
        assert_eq!(pow.adjust_difficulty(&block_at(0, u32::MAX), 10), DIFF_MAX);
    }

    #[test]
    fn extreme_timestamps_do_not_overflow() {
        let pow = ProofOfWork::new(1000);
        // tail far in the past: counts as slow
        assert_eq!(pow.adjust_difficulty(&block_at(i64::MIN, 4), 1_000_000), 3);
        // tail far in the future: counts as fast
        assert_eq!(pow.adjust_difficulty(&block_at(i64::MAX, 4), 1_000_000), 5);
        assert_eq!(pow.adjust_difficulty(&block_at(i64::MAX, 4), i64::MIN), 5);
    }

    #[test]
    fn produces_on_top_of_ancient_tail() {
        let tail = Block {
            timestamp: i64::MIN,
            difficulty: 2,
            ..Block::genesis()
        };
        let block = ProofOfWork::default().produce(&tail, Payload::Empty);
        assert_eq!(block.difficulty, 1);
        assert_eq!(block.hash, block.compute_hash());
        assert!(block.meets_difficulty());
    }

    #[test]
    fn produced_block_satisfies_invariants() {
        // genesis is ancient, so difficulty steps down and mining stays cheap
        let genesis = Block::genesis();
        let block = ProofOfWork::default().produce(&genesis, Payload::Empty);

        assert_eq!(block.previous_hash, genesis.hash);
        assert_eq!(block.hash, block.compute_hash());
        assert_eq!(block.difficulty, genesis.difficulty - 1);
        assert!(block.meets_difficulty());
    }
}
