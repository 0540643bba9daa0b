//! Profile Store: key-value persistence of `ProfileData` documents.
//!
//! `AppState` holds an `Arc<dyn ProfileStore>`: Redis when `REDIS_URL` is set,
//! otherwise the in-process map.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::AsyncCommands;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::profile::models::ProfileData;

const KEY_PREFIX: &str = "skillsync_profile_data";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn load(&self, id: Uuid) -> Result<Option<ProfileData>, StoreError>;
    async fn save(&self, id: Uuid, profile: &ProfileData) -> Result<(), StoreError>;
    async fn remove(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Loads the profile (or a fresh one), applies `update`, stamps
/// `last_updated`, and writes it back.
pub async fn update_profile<F>(
    store: &dyn ProfileStore,
    id: Uuid,
    update: F,
) -> Result<ProfileData, StoreError>
where
    F: FnOnce(&mut ProfileData) + Send,
{
    let mut profile = store.load(id).await?.unwrap_or_default();
    update(&mut profile);
    profile.touch();
    store.save(id, &profile).await?;
    Ok(profile)
}

fn profile_key(id: Uuid) -> String {
    format!("{KEY_PREFIX}:{id}")
}

// ────────────────────────────────────────────────────────────────────────────
// Redis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct RedisProfileStore {
    conn: redis::aio::MultiplexedConnection,
}

impl RedisProfileStore {
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        let conn = client.get_multiplexed_tokio_connection().await?;
        info!("Redis profile store connected");
        Ok(Self { conn })
    }
}

#[async_trait]
impl ProfileStore for RedisProfileStore {
    async fn load(&self, id: Uuid) -> Result<Option<ProfileData>, StoreError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(profile_key(id)).await?;
        Ok(raw.and_then(|json| decode_profile(id, &json)))
    }

    async fn save(&self, id: Uuid, profile: &ProfileData) -> Result<(), StoreError> {
        let json = serde_json::to_string(profile)?;
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(profile_key(id), json).await?;
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(profile_key(id)).await?;
        Ok(())
    }
}

/// A stored document that no longer deserializes is treated as absent.
fn decode_profile(id: Uuid, json: &str) -> Option<ProfileData> {
    match serde_json::from_str(json) {
        Ok(profile) => Some(profile),
        Err(e) => {
            warn!("Discarding unreadable profile {id}: {e}");
            None
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, ProfileData>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load(&self, id: Uuid) -> Result<Option<ProfileData>, StoreError> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }

    async fn save(&self, id: Uuid, profile: &ProfileData) -> Result<(), StoreError> {
        self.profiles.write().await.insert(id, profile.clone());
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        self.profiles.write().await.remove(&id);
        Ok(())
    }
}
