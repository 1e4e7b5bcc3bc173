use crate::blockchain::{Block, Blockchain, ProofOfWork};
use crate::config::Settings;
use crate::wallet::{Replay, Wallet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// Shared application state: one chain and the wallets this node holds.
///
/// The chain mutex is the single writer lock for appends and replacements.
/// Handlers that need both locks take `blockchain` before `wallets`.
pub struct AppState {
    pub blockchain: Mutex<Blockchain>,
    pub wallets: Mutex<HashMap<String, Wallet>>,
    pub balance_replay: Replay,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            blockchain: Mutex::new(Blockchain::new(ProofOfWork::new(settings.mine_rate_ms))),
            wallets: Mutex::new(HashMap::new()),
            balance_replay: settings.balance_replay,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

#[derive(Deserialize)]
pub struct ReplaceRequest {
    pub chain: Vec<Block>,
}

#[derive(Serialize)]
pub struct ReplaceResponse {
    pub replaced: bool,
    pub length: usize,
    pub reason: Option<String>,
}

#[derive(Serialize)]
pub struct DifficultyResponse {
    pub difficulty: u32,
}

/* ---------- TX API Models ---------- */

#[derive(Deserialize)]
pub struct TransactRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: u64,
}

#[derive(Serialize)]
pub struct TransactResponse {
    pub txid: String,
    pub block: Block,
}

/* ---------- Wallet API Models ---------- */

#[derive(Serialize)]
pub struct NewWalletResponse {
    pub address: String,
    pub balance: u64,
}

#[derive(Serialize)]
pub struct BalanceResponse {
    pub address: String,
    pub balance: u64,
    pub replay: Replay,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
