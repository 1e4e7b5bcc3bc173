use actix_web::{HttpResponse, Responder, post, web};
use log::{info, warn};

use super::error_response;
use super::models::{AppState, ErrorResponse, TransactRequest, TransactResponse};
use crate::error::LedgerError;

/// Spend from a wallet held by this node and seal the transfer in a new block.
/// The sender's balance is refreshed from the chain before the spend check.
#[post("/transact/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    req: web::Json<TransactRequest>,
) -> impl Responder {
    let req = req.into_inner();
    let mut bc = state.blockchain.lock().expect("mutex poisoned");

    let tx = {
        let mut wallets = state.wallets.lock().expect("mutex poisoned");
        let Some(wallet) = wallets.get_mut(&req.sender) else {
            return error_response(&LedgerError::UnknownWallet(req.sender));
        };
        match wallet.create_transaction_with(
            &req.recipient,
            req.amount,
            Some(bc.chain()),
            state.balance_replay,
        ) {
            Ok(tx) => tx,
            Err(e) => {
                warn!("TX - rejected from {}: {e}", req.sender);
                return error_response(&e);
            }
        }
    };

    if !tx.is_valid() {
        warn!("TX - {} outputs do not add up to its input", tx.id);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "outputs do not add up to the input amount".into(),
        });
    }

    let txid = tx.id.clone();
    let block = bc.add_block(tx).clone();
    info!(
        "TX - {} sealed in block #{} ({} -> {}: {})",
        txid,
        bc.len() - 1,
        req.sender,
        req.recipient,
        req.amount
    );

    HttpResponse::Ok().json(TransactResponse { txid, block })
}
