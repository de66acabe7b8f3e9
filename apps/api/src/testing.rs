//! Fixtures shared by unit and router tests.

use std::sync::Arc;

use uuid::Uuid;

use crate::assets::memory::MemoryAssetStore;
use crate::auth::JwtService;
use crate::config::Config;
use crate::models::company::CompanyRow;
use crate::state::AppState;
use crate::store::memory::MemoryStore;
use crate::store::{CareersStore, NewCompany};

pub const ASSET_BASE_URL: &str = "http://assets.test/careers";

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        jwt_secret: "test_secret_key".to_string(),
        jwt_issuer: "careers-test".to_string(),
        s3_bucket: "careers".to_string(),
        s3_endpoint: "http://assets.test".to_string(),
        aws_access_key_id: "test".to_string(),
        aws_secret_access_key: "test".to_string(),
        asset_base_url: ASSET_BASE_URL.to_string(),
        port: 0,
    }
}

/// App state over in-memory stores, keeping typed handles for assertions.
pub struct TestApp {
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub assets: Arc<MemoryAssetStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_assets(MemoryAssetStore::default())
    }

    pub fn with_assets(assets: MemoryAssetStore) -> Self {
        let config = test_config();
        let store = Arc::new(MemoryStore::new());
        let assets = Arc::new(assets);
        let state = AppState {
            store: store.clone(),
            assets: assets.clone(),
            jwt: JwtService::new(&config.jwt_secret, config.jwt_issuer.clone()),
            config,
        };
        Self {
            state,
            store,
            assets,
        }
    }

    /// Creates (or finds) a recruiter and returns its id with a bearer header value.
    pub async fn login(&self, username: &str) -> (Uuid, String) {
        let (recruiter, _) = self
            .store
            .get_or_create_recruiter(username, &format!("{username}@example.com"))
            .await
            .unwrap();
        let token = self
            .state
            .jwt
            .create_token(recruiter.id, username, chrono::Duration::hours(1))
            .unwrap();
        (recruiter.id, format!("Bearer {token}"))
    }
}

/// Inserts a company owned by `username`, creating the recruiter if needed.
pub async fn insert_company(store: &dyn CareersStore, username: &str, slug: &str) -> CompanyRow {
    let (recruiter, _) = store
        .get_or_create_recruiter(username, &format!("{username}@example.com"))
        .await
        .unwrap();
    store
        .insert_company(&NewCompany {
            slug: slug.to_string(),
            name: slug.to_uppercase(),
            recruiter_id: recruiter.id,
            primary_color: "#000000".to_string(),
            secondary_color: "#FFFFFF".to_string(),
            culture_video_url: None,
        })
        .await
        .unwrap()
}
