use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::info;

use rust_ledger::api::{self, AppState};
use rust_ledger::config::Settings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();
    let settings = Settings::from_env();

    info!(
        "⛓️ Starting ledger API at http://{}:{} (mine rate {}ms, balance replay {})",
        settings.host, settings.port, settings.mine_rate_ms, settings.balance_replay
    );

    let state = web::Data::new(AppState::new(&settings));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
