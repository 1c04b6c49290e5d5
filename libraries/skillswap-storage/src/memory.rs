//! In-memory profile repository

use async_trait::async_trait;
use skillswap_core::{
    error::Result, DiscoveryPredicate, ProfileRepository, PublicProfile, UserProfile,
};
use tokio::sync::RwLock;

/// Profile repository holding everything in a `Vec`.
///
/// Evaluates predicates with [`DiscoveryPredicate::matches`], so it is the
/// reference behaviour the `SQLite` store is tested against.
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<Vec<UserProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: Vec<UserProfile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }

    pub async fn insert(&self, profile: UserProfile) {
        self.profiles.write().await.push(profile);
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_public_users(
        &self,
        predicate: &DiscoveryPredicate,
        limit: usize,
    ) -> Result<Vec<PublicProfile>> {
        let profiles = self.profiles.read().await;

        Ok(profiles
            .iter()
            .filter(|p| predicate.matches(p))
            .take(limit)
            .map(UserProfile::to_public)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillswap_core::{NewProfile, TextClause};

    fn profile(new: NewProfile) -> UserProfile {
        UserProfile::from_new(new).unwrap()
    }

    #[tokio::test]
    async fn test_filters_and_limits() {
        let repo = InMemoryProfileRepository::new();
        for i in 0..30 {
            repo.insert(profile(NewProfile::new(format!("Dev {i}")).with_offered(["Rust"])))
                .await;
        }
        repo.insert(profile(NewProfile::new("Hidden").with_offered(["Rust"]).private()))
            .await;

        let predicate = DiscoveryPredicate::visible_only().and(TextClause::skill("rust"));
        let found = repo.find_public_users(&predicate, 20).await.unwrap();

        assert_eq!(found.len(), 20);
        assert!(found.iter().all(|p| p.name.starts_with("Dev")));
        assert_eq!(repo.len().await, 31);
    }
}
