mod balance;
mod chain;
mod health;
pub mod models;
mod tx;
mod wallet;

use actix_web::HttpResponse;
use actix_web::web::{self, ServiceConfig};

use crate::error::LedgerError;
use models::ErrorResponse;

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(health::health_check)
            .service(chain::get_chain)
            .service(chain::validate_chain)
            .service(chain::replace_chain)
            .service(chain::get_difficulty)
            .service(tx::post_transaction)
            .service(balance::get_balance)
            .service(wallet::create_wallet),
    );
}

fn error_response(err: &LedgerError) -> HttpResponse {
    let body = ErrorResponse {
        error: err.to_string(),
    };
    match err {
        LedgerError::InsufficientBalance { .. } => HttpResponse::BadRequest().json(body),
        LedgerError::UnknownWallet(_) => HttpResponse::NotFound().json(body),
        LedgerError::ChainNotLonger { .. } | LedgerError::InvalidChain => {
            HttpResponse::Conflict().json(body)
        }
    }
}
