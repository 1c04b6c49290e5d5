//! Tests for the Skill Swap client library.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real server connection.

use skillswap_client::{
    ClientConfig, ClientError, DiscoveryClient, DiscoveryPage, PageView, ResponseOutcome,
};
use skillswap_core::DiscoveryFilter;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn users_body() -> serde_json::Value {
    serde_json::json!({
        "users": [
            {
                "_id": "64b1",
                "name": "Marc Demo",
                "location": "Lyon",
                "skillsOffered": ["Excel", "Photoshop", "Public Speaking", "Cooking", "Chess"],
                "skillsWanted": ["Guitar"],
                "availability": "weekends",
                "rating": 4.5,
                "totalRatings": 2
            },
            {
                "id": "64b2",
                "name": "Joe Wills",
                "skillsOffered": ["Guitar"],
                "skillsWanted": ["Excel"],
                "rating": 0,
                "totalRatings": 0
            }
        ]
    })
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_valid_http_url() {
        assert!(DiscoveryClient::new(ClientConfig::new("http://localhost:5000")).is_ok());
    }

    #[test]
    fn test_default_config_points_at_localhost() {
        let client = DiscoveryClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_empty_url_rejected() {
        match DiscoveryClient::new(ClientConfig::new("")).unwrap_err() {
            ClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        match DiscoveryClient::new(ClientConfig::new("example.com")).unwrap_err() {
            ClientError::InvalidUrl(msg) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn test_url_normalization_trailing_slashes() {
        let client = DiscoveryClient::new(ClientConfig::new("https://example.com///")).unwrap();
        assert_eq!(client.base_url(), "https://example.com");
    }
}

// =============================================================================
// Discover Tests
// =============================================================================

mod discover {
    use super::*;

    #[tokio::test]
    async fn test_discover_parses_users() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/public/users/discover"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .mount(&mock_server)
            .await;

        let client = DiscoveryClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let response = client.discover(&DiscoveryFilter::new()).await.unwrap();

        assert_eq!(response.users.len(), 2);
        assert_eq!(response.users[0].id.as_str(), "64b1");
        assert_eq!(response.users[0].skills_offered.len(), 5);
        assert_eq!(response.users[1].location, None);
    }

    #[tokio::test]
    async fn test_discover_sends_filters_as_query_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/public/users/discover"))
            .and(query_param("search", "exc"))
            .and(query_param("skill", "c++"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "users": [] })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = DiscoveryClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let filter = DiscoveryFilter::new().with_search("exc").with_skill("c++");
        let response = client.discover(&filter).await.unwrap();

        assert!(response.users.is_empty());
    }

    #[tokio::test]
    async fn test_discover_omits_empty_filters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/public/users/discover"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "users": [] })))
            .mount(&mock_server)
            .await;

        let client = DiscoveryClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let filter = DiscoveryFilter::new().with_search("").with_skill("");
        client.discover(&filter).await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.query().unwrap_or("").is_empty());
    }

    #[tokio::test]
    async fn test_discover_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/public/users/discover"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "message": "Server error",
                "error": "connection refused"
            })))
            .mount(&mock_server)
            .await;

        let client = DiscoveryClient::new(ClientConfig::new(mock_server.uri())).unwrap();

        match client.discover(&DiscoveryFilter::new()).await.unwrap_err() {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("connection refused"));
            }
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_discover_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/public/users/discover"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = DiscoveryClient::new(ClientConfig::new(mock_server.uri())).unwrap();

        assert!(matches!(
            client.discover(&DiscoveryFilter::new()).await,
            Err(ClientError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_discover_unreachable_server() {
        let client = DiscoveryClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();

        match client.discover(&DiscoveryFilter::new()).await.unwrap_err() {
            ClientError::ServerUnreachable(_) | ClientError::Request(_) => {}
            e => panic!("Expected ServerUnreachable or Request error, got: {:?}", e),
        }
    }
}

// =============================================================================
// Health Tests
// =============================================================================

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/public/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Skill Swap Platform API is running",
                "status": "healthy",
                "timestamp": "2025-07-12T10:00:00.000Z"
            })))
            .mount(&mock_server)
            .await;

        let client = DiscoveryClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let health = client.health().await.unwrap();

        assert_eq!(health.status, "healthy");
        assert_eq!(health.message, "Skill Swap Platform API is running");
    }
}

// =============================================================================
// Page Tests (page driven by the real client against a mock server)
// =============================================================================

mod page {
    use super::*;

    #[tokio::test]
    async fn test_page_renders_cards_after_load() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/public/users/discover"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .mount(&mock_server)
            .await;

        let client = DiscoveryClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let mut page = DiscoveryPage::new();
        assert_eq!(page.view(), PageView::Loading);

        let outcome = page.refresh(&client).await;
        assert_eq!(outcome, ResponseOutcome::Applied { count: 2 });

        let PageView::Cards(cards) = page.view() else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].rating_label, "4.5/5");
        assert_eq!(cards[0].skills_offered.shown.len(), 3);
        assert_eq!(cards[0].skills_offered.more_label().as_deref(), Some("+2 more"));
        assert_eq!(cards[1].rating_label, "No ratings");
    }

    #[tokio::test]
    async fn test_page_empty_results() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/public/users/discover"))
            .and(query_param("search", "zzz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "users": [] })))
            .mount(&mock_server)
            .await;

        let client = DiscoveryClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let mut page = DiscoveryPage::new();
        page.set_search_term("zzz");
        page.refresh(&client).await;

        assert!(matches!(page.view(), PageView::Empty { .. }));
    }

    #[tokio::test]
    async fn test_page_keeps_results_when_server_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/public/users/discover"))
            .and(query_param("search", "boom"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Server error"))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/public/users/discover"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .mount(&mock_server)
            .await;

        let client = DiscoveryClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let mut page = DiscoveryPage::new();
        page.refresh(&client).await;
        assert_eq!(page.results().len(), 2);

        page.set_search_term("boom");
        let outcome = page.refresh(&client).await;

        assert_eq!(outcome, ResponseOutcome::Failed);
        assert!(!page.is_loading());
        assert_eq!(page.results().len(), 2);
    }
}
