use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, BalanceResponse};

/// Balance replayed from the chain; never read from a wallet's cache.
#[get("/balance/{address}/")]
pub async fn get_balance(state: web::Data<AppState>, path: web::Path<(String,)>) -> impl Responder {
    let address = path.into_inner().0;

    let balance = {
        let bc = state.blockchain.lock().expect("mutex poisoned");
        state.balance_replay.balance(bc.chain(), &address)
    };

    HttpResponse::Ok().json(BalanceResponse {
        address,
        balance,
        replay: state.balance_replay,
    })
}
