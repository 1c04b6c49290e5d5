/// API integration tests
/// Tests complete HTTP request/response cycles with a real database
mod common;

use axum::http::StatusCode;
use common::{create_failing_app, create_test_app, crowd, get_json, names};

/// Test GET /api/public/health
#[tokio::test]
async fn test_health() {
    let (app, _store, _temp_dir) = create_test_app().await;

    let (status, body) = get_json(&app, "/api/public/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "Skill Swap Platform API is running");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());

    let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["message", "status", "timestamp"]);
}

/// No filters: every discoverable profile, nothing hidden
#[tokio::test]
async fn test_discover_without_filters() {
    let (app, _store, _temp_dir) = create_test_app().await;

    let (status, body) = get_json(&app, "/api/public/users/discover").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Joe Wills", "Marc Demo", "Michell"]);
}

/// The response only carries the public-safe projection
#[tokio::test]
async fn test_discover_projection() {
    let (app, _store, _temp_dir) = create_test_app().await;

    let (_, body) = get_json(&app, "/api/public/users/discover?search=marc").await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);

    let marc = users[0].as_object().unwrap();
    assert!(marc["id"].is_string());
    assert_eq!(marc["location"], "Lyon");
    assert_eq!(marc["availability"], "weekends");
    assert_eq!(marc["rating"], 4.5);
    assert_eq!(marc["totalRatings"], 2);
    assert_eq!(marc["skillsOffered"].as_array().unwrap().len(), 5);
    assert_eq!(marc["skillsWanted"][0], "Guitar");

    for private in ["email", "isPublic", "isBanned", "isAdmin", "createdAt"] {
        assert!(!marc.contains_key(private), "{private} leaked");
    }
}

/// Case-insensitive substring search over skills
#[tokio::test]
async fn test_search_matches_skill_substring() {
    let (app, _store, _temp_dir) = create_test_app().await;

    let (status, body) = get_json(&app, "/api/public/users/discover?search=exc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Joe Wills", "Marc Demo"]);
}

#[tokio::test]
async fn test_skill_filter() {
    let (app, _store, _temp_dir) = create_test_app().await;

    let (_, body) = get_json(&app, "/api/public/users/discover?skill=PHOTO").await;

    // Marc offers Photoshop, Michell wants Photography.
    assert_eq!(names(&body), vec!["Marc Demo", "Michell"]);
}

/// With both filters the search clause wins and skill is ignored
#[tokio::test]
async fn test_search_overrides_skill() {
    let (app, _store, _temp_dir) = create_test_app().await;

    let (_, both) =
        get_json(&app, "/api/public/users/discover?skill=python&search=guitar").await;
    let (_, search_only) = get_json(&app, "/api/public/users/discover?search=guitar").await;

    assert_eq!(names(&both), names(&search_only));
    assert_eq!(names(&both), vec!["Joe Wills", "Marc Demo"]);
}

/// Empty query values behave like absent ones
#[tokio::test]
async fn test_empty_params_are_ignored() {
    let (app, _store, _temp_dir) = create_test_app().await;

    let (status, body) = get_json(&app, "/api/public/users/discover?skill=&search=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body).len(), 3);
}

#[tokio::test]
async fn test_no_matches_is_empty_200() {
    let (app, _store, _temp_dir) = create_test_app().await;

    let (status, body) = get_json(&app, "/api/public/users/discover?search=zzz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "users": [] }));
}

#[tokio::test]
async fn test_results_capped_at_twenty() {
    let (app, store, _temp_dir) = create_test_app().await;
    store.import_profiles(crowd(40)).await.unwrap();

    let (_, body) = get_json(&app, "/api/public/users/discover?skill=rust").await;
    assert_eq!(body["users"].as_array().unwrap().len(), 20);

    let (_, body) = get_json(&app, "/api/public/users/discover").await;
    assert_eq!(body["users"].as_array().unwrap().len(), 20);
}

/// Percent-encoded metacharacters are matched literally
#[tokio::test]
async fn test_pattern_input_is_literal() {
    let (app, _store, _temp_dir) = create_test_app().await;

    let (status, body) = get_json(&app, "/api/public/users/discover?search=.%2A").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["users"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_repository_failure_is_500_with_detail() {
    let app = create_failing_app(true);

    let (status, body) = get_json(&app, "/api/public/users/discover?search=x").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Server error");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn test_repository_failure_detail_can_be_hidden() {
    let app = create_failing_app(false);

    let (status, body) = get_json(&app, "/api/public/users/discover").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["error"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (app, _store, _temp_dir) = create_test_app().await;

    let (status, _) = get_json(&app, "/api/public/users").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
