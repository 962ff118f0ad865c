//! Single binary web server for the golf group REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env (or .env): HOST, PORT,
//! GROUP_SIZE, PADDING_POLICY, SEED_DEMO.

use actix_web::{web::Data, App, HttpServer};
use golf_group_web::{
    api::{self, AppState},
    store::seed_demo,
    Config, Store,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;

    let store = Store::new();
    if config.seed_demo {
        seed_demo(&store).map_err(std::io::Error::other)?;
    }

    let bind = (config.host.clone(), config.port);
    log::info!(
        "Starting server at http://{}:{} (group size {}, padding policy {})",
        bind.0,
        bind.1,
        config.group_size.get(),
        config.padding
    );

    let state = Data::new(AppState::new(store, &config));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}
