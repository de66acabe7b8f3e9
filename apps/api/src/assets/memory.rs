use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use bytes::Bytes;

use super::{AssetError, AssetStore};

/// Keeps uploaded objects in a map. `failing_deletes` makes every delete
/// error, for exercising best-effort cleanup.
#[derive(Default)]
pub struct MemoryAssetStore {
    objects: RwLock<HashMap<String, Bytes>>,
    pub failing_deletes: bool,
}

impl MemoryAssetStore {
    pub fn with_failing_deletes() -> Self {
        Self {
            failing_deletes: true,
            ..Self::default()
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.read().unwrap().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.objects.read().unwrap().len()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn put(&self, key: &str, body: Bytes, _content_type: &str) -> Result<(), AssetError> {
        self.objects.write().unwrap().insert(key.to_string(), body);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AssetError> {
        if self.failing_deletes {
            return Err(AssetError::Delete {
                key: key.to_string(),
                message: "simulated outage".to_string(),
            });
        }
        self.objects.write().unwrap().remove(key);
        Ok(())
    }
}
