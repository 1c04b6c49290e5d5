/// Skill Swap Server - public discovery API
use anyhow::Context;
use clap::{Parser, Subcommand};
use skillswap_core::{DiscoveryService, NewProfile};
use skillswap_server::{config::ServerConfig, create_router, state::AppState};
use skillswap_storage::SqliteProfileStore;
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "skillswap-server")]
#[command(about = "Skill Swap Platform public discovery server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "SWAP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Import profiles from a JSON array file
    Seed {
        /// Path to the JSON file
        file: PathBuf,
    },
    /// List all stored profiles, including hidden ones
    ListProfiles,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skillswap_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load_from(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Seed { file } => seed(&config, &file).await?,
        Commands::ListProfiles => list_profiles(&config).await?,
    }

    Ok(())
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteProfileStore> {
    ensure_database_dir(&config.storage.database_url).await?;

    let pool = skillswap_storage::create_pool(&config.storage.database_url).await?;
    skillswap_storage::run_migrations(&pool).await?;

    Ok(SqliteProfileStore::new(pool))
}

/// Create the parent directory of a file-backed `SQLite` URL.
async fn ensure_database_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = database_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or(path);

    if path.contains(":memory:") {
        return Ok(());
    }

    if let Some(parent) = PathBuf::from(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Skill Swap Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = open_store(&config).await?;
    tracing::info!("Database connected");

    let discovery = DiscoveryService::new(Arc::new(store))
        .with_precedence(config.discovery.filter_precedence)
        .with_max_results(config.discovery.max_results);
    tracing::info!(
        max_results = config.discovery.max_results,
        precedence = ?config.discovery.filter_precedence,
        "Discovery service initialized"
    );

    let app_state =
        AppState::new(discovery).with_error_details(config.discovery.expose_error_details);

    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn seed(config: &ServerConfig, file: &Path) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("reading {}", file.display()))?;
    let batch: Vec<NewProfile> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", file.display()))?;

    let store = open_store(config).await?;
    let imported = store.import_profiles(batch).await?;

    tracing::info!("Imported {} profiles from {}", imported.len(), file.display());
    Ok(())
}

async fn list_profiles(config: &ServerConfig) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let profiles = store.get_all_profiles().await?;

    println!("Profiles:");
    for profile in profiles {
        let mut flags = Vec::new();
        if !profile.is_public {
            flags.push("private");
        }
        if profile.is_banned {
            flags.push("banned");
        }
        if profile.is_admin == Some(true) {
            flags.push("admin");
        }

        println!(
            "  {} - {}{}",
            profile.id,
            profile.name,
            if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            }
        );
    }

    Ok(())
}
