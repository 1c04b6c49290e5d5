//! Skill Swap Core
//!
//! Platform-agnostic domain types, the discovery filter model and the
//! repository port shared by the server, the storage layer and the client.
//!
//! # Architecture
//!
//! - **Domain Types**: `UserProfile` (stored record) and `PublicProfile`
//!   (public-safe projection returned by discovery)
//! - **Filters**: `DiscoveryFilter` is what callers send, `DiscoveryPredicate`
//!   is what repositories evaluate
//! - **Ports**: `ProfileRepository` abstracts the persisted user collection
//! - **Service**: `DiscoveryService` turns a filter into a bounded read
//!
//! # Example
//!
//! ```rust
//! use skillswap_core::{DiscoveryFilter, DiscoveryPredicate, FilterPrecedence};
//!
//! let filter = DiscoveryFilter::new().with_search("exc");
//! let predicate = DiscoveryPredicate::from_filter(&filter, FilterPrecedence::default());
//! assert_eq!(predicate.clauses().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod discovery;
pub mod error;
pub mod filter;
pub mod repository;
pub mod types;

pub use discovery::{DiscoverResponse, DiscoveryService, DEFAULT_MAX_RESULTS};
pub use error::{Result, SwapError};
pub use filter::{
    fold_case, DiscoveryFilter, DiscoveryPredicate, FilterPrecedence, ProfileField, TextClause,
};
pub use repository::ProfileRepository;
pub use types::{NewProfile, PublicProfile, UserId, UserProfile};
