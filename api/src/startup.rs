//! Process bootstrap: logging, database, migrations and startup seeding.

use migration::runner;
use sea_orm::{DatabaseConnection, DbErr};
use seeder::{SeedConfig, Seeder};
use tracing_appender::rolling;
use util::config;

/// Installs the global tracing subscriber: a daily-rolling file under
/// `logs/`, plus stdout when `LOG_TO_STDOUT` is set. The returned guard must
/// live as long as the process or buffered lines are lost.
pub fn init_logging(log_file: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_thread_ids(true);

    let env_filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(config::log_level()));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if config::log_to_stdout() {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}

/// Applies every pending migration. A failure here stops startup.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    runner::run_pending_migrations(db).await?;
    tracing::info!("schema up to date");
    Ok(())
}

/// Runs the seeder when `SEED_ON_STARTUP` is enabled. A seeding failure is
/// logged and does not stop startup.
pub async fn seed_on_startup(db: &DatabaseConnection) {
    if !config::seed_on_startup() {
        tracing::info!("SEED_ON_STARTUP disabled, skipping seeding");
        return;
    }

    let seeder = Seeder::new(SeedConfig::from_app_config());
    match seeder.seed(db).await {
        Ok(report) => tracing::info!(inserted = report.total_inserted(), "startup seeding done"),
        Err(e) => tracing::error!(error = %e, "an error occurred while seeding the database"),
    }
}

/// Connects, migrates and seeds.
pub async fn prepare_database() -> Result<DatabaseConnection, DbErr> {
    let db = db::connect().await?;
    migrate(&db).await?;
    seed_on_startup(&db).await;
    Ok(db)
}
