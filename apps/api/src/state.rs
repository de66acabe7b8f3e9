use std::sync::Arc;

use crate::assets::AssetStore;
use crate::auth::JwtService;
use crate::config::Config;
use crate::store::CareersStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CareersStore>,
    /// Logo and banner storage. S3/MinIO in production.
    pub assets: Arc<dyn AssetStore>,
    pub jwt: JwtService,
    pub config: Config,
}

impl AppState {
    pub fn asset_base_url(&self) -> &str {
        &self.config.asset_base_url
    }
}
