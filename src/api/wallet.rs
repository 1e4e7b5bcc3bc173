use actix_web::{HttpResponse, Responder, post, web};
use log::info;

use super::models::{AppState, NewWalletResponse};
use crate::wallet::Wallet;

#[post("/wallet/new/")]
pub async fn create_wallet(state: web::Data<AppState>) -> impl Responder {
    let wallet = Wallet::new();
    let resp = NewWalletResponse {
        address: wallet.address().to_string(),
        balance: wallet.balance,
    };
    info!("WALLET - created {}", resp.address);

    let mut wallets = state.wallets.lock().expect("mutex poisoned");
    wallets.insert(resp.address.clone(), wallet);
    HttpResponse::Ok().json(resp)
}
