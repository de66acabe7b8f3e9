use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::assets::s3::S3AssetStore;
use crate::auth::JwtService;
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::PgStore;

pub async fn run(config: Config) -> Result<()> {
    info!("Starting careers API v{}", env!("CARGO_PKG_VERSION"));

    let pool = create_pool(&config.database_url).await?;

    let assets = S3AssetStore::from_config(&config).await;
    info!("Asset store ready (bucket: {})", config.s3_bucket);

    let state = AppState {
        store: Arc::new(PgStore::new(pool)),
        assets: Arc::new(assets),
        jwt: JwtService::new(&config.jwt_secret, config.jwt_issuer.clone()),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
