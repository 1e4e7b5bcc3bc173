use actix_web::{HttpResponse, Responder, get, post, web};

use super::models::{
    AppState, ChainResponse, DifficultyResponse, ReplaceRequest, ReplaceResponse, ValidateResponse,
};

/// Get the full blockchain.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        length: bc.len(),
        chain: bc.chain(),
    };
    HttpResponse::Ok().json(resp)
}

/// Validate the whole chain.
#[get("/validate/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ValidateResponse {
        valid: bc.is_valid(),
        length: bc.len(),
    })
}

/// Offer a competing chain. Adopted only if strictly longer and valid.
#[post("/chain/replace/")]
pub async fn replace_chain(
    state: web::Data<AppState>,
    body: web::Json<ReplaceRequest>,
) -> impl Responder {
    let candidate = body.into_inner().chain;
    let mut bc = state.blockchain.lock().expect("mutex poisoned");

    match bc.replace_chain(candidate) {
        Ok(()) => HttpResponse::Ok().json(ReplaceResponse {
            replaced: true,
            length: bc.len(),
            reason: None,
        }),
        Err(e) => HttpResponse::Conflict().json(ReplaceResponse {
            replaced: false,
            length: bc.len(),
            reason: Some(e.to_string()),
        }),
    }
}

/// Difficulty of the tail block.
#[get("/difficulty/")]
pub async fn get_difficulty(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(DifficultyResponse {
        difficulty: bc.last_block().difficulty,
    })
}
