//! Codeshelf Server Entry Point
//!
//! Loads configuration from the environment, initializes tracing, builds
//! the application and serves it.

use codeshelf::server::config::ServerConfig;
use codeshelf::server::init::create_app;
use codeshelf::server::state::BuildInfo;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let info = BuildInfo::from_build_env();
    tracing::info!(
        "codeshelf {} starting, commit {}, built {}",
        info.version,
        info.commit,
        info.date
    );

    // Missing or malformed environment fails startup immediately.
    let config = ServerConfig::from_env()?;
    let bind_addr = config.bind_addr;

    let app = create_app(config).await?;

    tracing::info!("codeshelf-server listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
