//! Skill Swap Client
//!
//! Client-side half of public discovery.
//!
//! # Features
//!
//! - **HTTP client**: `DiscoveryClient` for `/api/public/users/discover`
//!   and `/api/public/health`
//! - **Page model**: `DiscoveryPage` owns the search term, skill filter,
//!   loading flag and result list, and ignores responses to superseded
//!   requests
//! - **View**: `PageView` is what a front end renders (loading indicator,
//!   empty state or one card per profile)
//!
//! # Example
//!
//! ```ignore
//! use skillswap_client::{ClientConfig, DiscoveryClient, DiscoveryPage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DiscoveryClient::new(ClientConfig::new("http://localhost:5000"))?;
//!
//!     let mut page = DiscoveryPage::new();
//!     page.refresh(&client).await;
//!
//!     if let Some(request) = page.set_search_term("excel") {
//!         let result = client.discover_users(&request.filter).await;
//!         page.apply(request.generation, result);
//!     }
//!
//!     println!("{}", page.view());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod page;
mod types;
mod view;

pub use client::{DiscoveryClient, DiscoverySource};
pub use error::{ClientError, Result};
pub use page::{DiscoveryPage, PendingRequest, ResponseOutcome};
pub use types::{ClientConfig, HealthResponse, DEFAULT_SERVER_URL};
pub use view::{
    rating_label, CallToAction, PageView, ProfileCard, SkillList, EMPTY_STATE_MESSAGE,
    MAX_VISIBLE_SKILLS, SIGN_IN_CTA,
};
