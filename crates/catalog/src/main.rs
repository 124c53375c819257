use anyhow::{Context, Result};
use catalog::{
    config::{Config, StorageBackend},
    handler::AppRouter,
    repository::{MemoryStore, Repositories},
    state::AppState,
};
use dotenv::dotenv;
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::{Telemetry, init_logger},
};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let config = Config::init().context("Failed to load configuration")?;

    let mut telemetry = Telemetry::new("catalog", config.otel_endpoint.clone());
    let logger_provider = telemetry
        .init()
        .context("Failed to initialize telemetry exporters")?;

    init_logger(logger_provider.as_ref(), "catalog", is_dev, is_enable_file);

    info!("🚀 Starting catalog service with {:?}", config);

    let repositories = build_repositories(&config).await?;
    let state = AppState::new(&config, repositories);

    seed(&config, &state).await?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("🛑 Shutting down catalog service...");

    if let Err(e) = telemetry.shutdown().await {
        error!("Failed to shutdown telemetry: {}", e);
    }

    Ok(())
}

async fn build_repositories(config: &Config) -> Result<Repositories> {
    match config.storage_backend {
        StorageBackend::Memory => {
            warn!("🧪 Using the in-memory store; data is lost on restart");
            Ok(Repositories::memory(MemoryStore::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("Missing environment variable: DATABASE_URL")?;

            let pool = ConnectionManager::new_pool(
                database_url,
                config.db_min_conn,
                config.db_max_conn,
            )
            .await
            .context("Failed to initialize database pool")?;

            if config.run_migrations {
                run_migrations(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                info!("✅ Database migrations applied");
            }

            Ok(Repositories::postgres(pool))
        }
    }
}

async fn seed(config: &Config, state: &AppState) -> Result<()> {
    state
        .di_container
        .category_command
        .seed_defaults()
        .await
        .context("Failed to seed default categories")?;

    match (&config.admin_email, &config.admin_password) {
        (Some(email), Some(password)) => {
            let admin = state
                .di_container
                .auth_service
                .seed_admin(email, password)
                .await
                .context("Failed to seed admin user")?;
            info!("🌱 Admin account ready: {}", admin.email);
        }
        _ => warn!("⚠️ ADMIN_EMAIL / ADMIN_PASSWORD not set; no admin seeded"),
    }

    Ok(())
}

pub async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
