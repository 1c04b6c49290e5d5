//! Repository port over the persisted user collection

use crate::error::Result;
use crate::filter::DiscoveryPredicate;
use crate::types::PublicProfile;
use async_trait::async_trait;

/// Read access to discoverable profiles.
///
/// Implementations must apply the visibility rule and every clause of the
/// predicate, project to [`PublicProfile`], and return at most `limit` rows.
/// Ordering is up to the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find public profiles matching `predicate`.
    async fn find_public_users(
        &self,
        predicate: &DiscoveryPredicate,
        limit: usize,
    ) -> Result<Vec<PublicProfile>>;
}
