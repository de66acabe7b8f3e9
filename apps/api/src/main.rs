mod assets;
mod auth;
mod commands;
mod companies;
mod config;
mod content;
mod db;
mod errors;
mod extract;
mod import;
mod jobs;
mod models;
mod routes;
mod state;
mod store;

#[cfg(test)]
mod testing;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // load .env if present; ignore if missing

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("careers=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    commands::run().await
}
