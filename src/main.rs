pub mod config;
pub mod err;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod router;
pub mod storage;

use axum::handler::Handler;
use axum::routing::any;
use axum::{Extension, Router};
use clap::Parser;
use env_logger::Env;

use crate::config::Config;
use crate::storage::Storage;

pub fn app(storage: Storage) -> Router {
    Router::new()
        .route("/api", any(handlers::dispatch))
        .route("/api/*path", any(handlers::dispatch))
        .fallback(err::handler404.into_service())
        .layer(Extension(storage))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    let storage = Storage::open(&config.database_url, &config.db_name, config.pool_settings())
        .map_err(|err| anyhow::anyhow!("invalid storage configuration: {:?}", err))?;

    log::info!("Starting TeacherHub HTTP Server on http://{}", config.bind);
    axum::Server::bind(&config.bind)
        .serve(app(storage).into_make_service())
        .await?;
    Ok(())
}
