//! Skill Swap Storage
//!
//! `SQLite` persistence for user profiles, plus an in-memory repository with
//! identical matching semantics.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: `profiles` owns its queries
//! - **Ports**: `SqliteProfileStore` and `InMemoryProfileRepository` both
//!   implement `skillswap_core::ProfileRepository`
//! - **Literal matching**: text filters compile to `instr()` over folded
//!   columns, never to `LIKE` or a regex
//!
//! # Example
//!
//! ```rust,no_run
//! use skillswap_core::{DiscoveryPredicate, ProfileRepository};
//! use skillswap_storage::{create_pool, run_migrations, SqliteProfileStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://skillswap.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteProfileStore::new(pool);
//! let users = store
//!     .find_public_users(&DiscoveryPredicate::visible_only(), 20)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod memory;

// Vertical slices
pub mod profiles;

pub use context::SqliteProfileStore;
pub use error::{Result, StorageError};
pub use memory::InMemoryProfileRepository;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://skillswap.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating SQLite pool");

    let in_memory = database_url.contains(":memory:");

    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    // Every connection to ":memory:" is a separate database.
    let max_connections = if in_memory { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(max_connections, "SQLite pool created");

    Ok(pool)
}
