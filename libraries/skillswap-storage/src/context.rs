use crate::profiles;
use async_trait::async_trait;
use skillswap_core::{
    error::Result, DiscoveryPredicate, NewProfile, ProfileRepository, PublicProfile, UserId,
    UserProfile,
};
use sqlx::SqlitePool;

/// Profile repository backed by `SQLite`
#[derive(Clone)]
pub struct SqliteProfileStore {
    pool: SqlitePool,
}

impl SqliteProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Validate and store a new profile.
    pub async fn create_profile(&self, new: NewProfile) -> Result<UserProfile> {
        let profile = UserProfile::from_new(new)?;
        profiles::create(&self.pool, &profile).await?;
        Ok(profile)
    }

    /// Validate and store a batch of profiles in one transaction.
    pub async fn import_profiles(&self, batch: Vec<NewProfile>) -> Result<Vec<UserProfile>> {
        let batch = batch
            .into_iter()
            .map(UserProfile::from_new)
            .collect::<Result<Vec<_>>>()?;
        profiles::create_many(&self.pool, &batch).await?;
        Ok(batch)
    }

    pub async fn get_profile(&self, id: &UserId) -> Result<Option<UserProfile>> {
        Ok(profiles::get_by_id(&self.pool, id).await?)
    }

    pub async fn get_all_profiles(&self) -> Result<Vec<UserProfile>> {
        Ok(profiles::get_all(&self.pool).await?)
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileStore {
    async fn find_public_users(
        &self,
        predicate: &DiscoveryPredicate,
        limit: usize,
    ) -> Result<Vec<PublicProfile>> {
        Ok(profiles::find_public(&self.pool, predicate, limit).await?)
    }
}
