//! Common test utilities and fixtures
#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use skillswap_core::{
    DiscoveryPredicate, DiscoveryService, NewProfile, ProfileRepository, PublicProfile, SwapError,
};
use skillswap_server::{create_router, state::AppState};
use skillswap_storage::SqliteProfileStore;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Create a file-backed test store with migrations applied
pub async fn create_test_store() -> Result<(SqliteProfileStore, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = skillswap_storage::create_pool(&db_url).await?;
    skillswap_storage::run_migrations(&pool).await?;

    Ok((SqliteProfileStore::new(pool), temp_dir))
}

/// Router over a store seeded with [`fixtures::community`]
pub async fn create_test_app() -> (Router, SqliteProfileStore, TempDir) {
    let (store, temp_dir) = create_test_store().await.unwrap();
    store
        .import_profiles(fixtures::community())
        .await
        .unwrap();

    let discovery = DiscoveryService::new(Arc::new(store.clone()));
    let app = create_router(AppState::new(discovery));

    (app, store, temp_dir)
}

/// Router whose repository always fails
pub fn create_failing_app(expose_error_details: bool) -> Router {
    let discovery = DiscoveryService::new(Arc::new(FailingRepository));
    create_router(AppState::new(discovery).with_error_details(expose_error_details))
}

pub struct FailingRepository;

#[async_trait]
impl ProfileRepository for FailingRepository {
    async fn find_public_users(
        &self,
        _predicate: &DiscoveryPredicate,
        _limit: usize,
    ) -> skillswap_core::Result<Vec<PublicProfile>> {
        Err(SwapError::Database("connection refused".to_string()))
    }
}

/// Issue a GET and return status plus JSON body
pub async fn get_json(app: &Router, uri: &str) -> (axum::http::StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, body)
}

/// Sorted names from a discovery response body
pub fn names(body: &serde_json::Value) -> Vec<String> {
    let mut names: Vec<String> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    names
}

/// Test profiles
pub mod fixtures {
    use skillswap_core::NewProfile;

    pub fn community() -> Vec<NewProfile> {
        let mut marc = NewProfile::new("Marc Demo")
            .with_location("Lyon")
            .with_offered(["Excel", "Photoshop", "Public Speaking", "Cooking", "Chess"])
            .with_wanted(["Guitar"])
            .with_availability("weekends")
            .with_rating(4.5, 2);
        marc.email = Some("marc@example.com".to_string());

        vec![
            marc,
            NewProfile::new("Joe Wills")
                .with_offered(["Guitar", "Piano"])
                .with_wanted(["Excel"]),
            NewProfile::new("Michell")
                .with_offered(["Python"])
                .with_wanted(["Photography"])
                .with_rating(3.0, 0),
            NewProfile::new("Private Pat").with_offered(["Excel"]).private(),
            NewProfile::new("Banned Ben").with_offered(["Excel"]).banned(),
            NewProfile::new("Admin Ada").with_offered(["Excel"]).admin(),
        ]
    }
}

pub use fixtures::community;

/// Many matching public profiles
pub fn crowd(count: usize) -> Vec<NewProfile> {
    (0..count)
        .map(|i| NewProfile::new(format!("Learner {i}")).with_wanted(["Rust"]))
        .collect()
}
