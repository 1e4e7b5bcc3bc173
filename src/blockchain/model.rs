use log::{debug, info, warn};

use super::pow::ProofOfWork;
use super::producer::BlockProducer;
use super::{Block, Payload};
use crate::error::{LedgerError, Result};

/// In-memory chain owned by a single node. Always starts at genesis.
#[derive(Debug)]
pub struct Blockchain<P = ProofOfWork> {
    chain: Vec<Block>,
    producer: P,
}

impl Default for Blockchain<ProofOfWork> {
    fn default() -> Self {
        Self::new(ProofOfWork::default())
    }
}

impl<P: BlockProducer> Blockchain<P> {
    /// Initialize a new chain holding only the genesis block.
    pub fn new(producer: P) -> Self {
        Self {
            chain: vec![Block::genesis()],
            producer,
        }
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("Blockchain should always have at least the genesis block")
    }

    /// Produce and append a block carrying `payload`.
    /// Locally produced blocks are trusted, so nothing is validated here.
    pub fn add_block(&mut self, payload: impl Into<Payload>) -> &Block {
        let block = self.producer.produce(self.last_block(), payload.into());
        debug!(
            "CHAIN - appended block #{} (hash={}, difficulty={})",
            self.chain.len(),
            block.hash,
            block.difficulty
        );
        self.chain.push(block);
        self.last_block()
    }

    /// Validate this node's own chain.
    pub fn is_valid(&self) -> bool {
        is_valid_chain(&self.chain)
    }

    /// Adopt `candidate` if it is strictly longer and valid. On rejection the
    /// chain is left untouched and the error carries the reason.
    pub fn replace_chain(&mut self, candidate: Vec<Block>) -> Result<()> {
        if candidate.len() <= self.chain.len() {
            let err = LedgerError::ChainNotLonger {
                candidate: candidate.len(),
                current: self.chain.len(),
            };
            warn!("CHAIN - rejected replacement: {err}");
            return Err(err);
        }

        if !is_valid_chain(&candidate) {
            let err = LedgerError::InvalidChain;
            warn!("CHAIN - rejected replacement: {err}");
            return Err(err);
        }

        info!(
            "CHAIN - replacing chain ({} -> {} blocks)",
            self.chain.len(),
            candidate.len()
        );
        self.chain = candidate;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Never true: the genesis block is always present.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

/// Validate an arbitrary chain: genesis must match exactly, and every
/// later block must link to its predecessor and carry its own digest.
pub fn is_valid_chain(chain: &[Block]) -> bool {
    match chain.first() {
        Some(first) if *first == Block::genesis() => {}
        _ => return false,
    }

    chain.windows(2).all(|pair| {
        let (prev, current) = (&pair[0], &pair[1]);
        current.previous_hash == prev.hash && current.hash == current.compute_hash()
    })
}
