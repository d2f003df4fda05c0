use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use workout_planner::api::create_routes;
use workout_planner::config::{AppConfig, DatabaseConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // RUST_LOG wins over LOG_LEVEL when both are set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if config.is_production() && config.jwt_secret == "your-secret-key-change-in-production" {
        anyhow::bail!("JWT_SECRET must be set in production");
    }

    let db = DatabaseConfig::from_env()?.connect().await?;
    let app = create_routes(db, &config);

    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Workout planner starting on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
