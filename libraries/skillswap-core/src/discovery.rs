//! Discovery query service

use crate::error::Result;
use crate::filter::{DiscoveryFilter, DiscoveryPredicate, FilterPrecedence};
use crate::repository::ProfileRepository;
use crate::types::PublicProfile;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Maximum number of profiles a single discovery call returns by default.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Body of a successful discovery response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoverResponse {
    /// Matching profiles, at most the configured limit
    pub users: Vec<PublicProfile>,
}

/// Builds predicates from request filters and runs the bounded read.
#[derive(Clone)]
pub struct DiscoveryService {
    repository: Arc<dyn ProfileRepository>,
    precedence: FilterPrecedence,
    max_results: usize,
}

impl DiscoveryService {
    /// Service with default precedence and a limit of [`DEFAULT_MAX_RESULTS`].
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self {
            repository,
            precedence: FilterPrecedence::default(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set how `skill` and `search` combine.
    pub fn with_precedence(mut self, precedence: FilterPrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// Set the result limit.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Current precedence policy.
    pub fn precedence(&self) -> FilterPrecedence {
        self.precedence
    }

    /// Current result limit.
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Run a discovery query.
    ///
    /// Repository failures are returned as-is; there is no retry.
    pub async fn discover(&self, filter: &DiscoveryFilter) -> Result<DiscoverResponse> {
        if self.precedence == FilterPrecedence::SearchOverridesSkill
            && filter.skill().is_some()
            && filter.search().is_some()
        {
            debug!(
                skill = filter.skill(),
                search = filter.search(),
                "Both filters given, skill filter ignored"
            );
        }

        let predicate = DiscoveryPredicate::from_filter(filter, self.precedence);
        let mut users = self
            .repository
            .find_public_users(&predicate, self.max_results)
            .await?;

        // Bound holds whatever the repository returned.
        users.truncate(self.max_results);

        debug!(
            results = users.len(),
            clauses = predicate.clauses().len(),
            "Discovery query completed"
        );

        Ok(DiscoverResponse { users })
    }
}
