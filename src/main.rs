use std::{process, sync::Arc};

use produkty_api::{config::AppConfig, routes, AppState};
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,produkty_api=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    if let Err(e) = run().await {
        tracing::error!("Startup failed: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::from_env()?;

    // Connect to database
    tracing::info!("Connecting to database...");
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);
    let db = Database::connect(options).await?;
    tracing::info!("Connected (pool size {})", config.max_connections);

    if config.run_migrations {
        tracing::info!("Running migrations...");
        migration::Migrator::up(&db, None).await?;
    }

    let state = AppState {
        db: Arc::new(db),
        tokens: Arc::new(config.tokens),
    };

    let app = routes::app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
