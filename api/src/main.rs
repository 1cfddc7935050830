use api::{app, startup};
use std::net::SocketAddr;
use std::process;
use util::{config, state::AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let _log_guard = startup::init_logging(&config::log_file());

    let db = match startup::prepare_database().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "database startup failed");
            eprintln!("Database startup failed: {e}");
            process::exit(1);
        }
    };

    let app = app(AppState::new(db));

    let addr: SocketAddr = match format!("{}:{}", config::host(), config::port()).parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("Invalid HOST/PORT: {e}");
            process::exit(1);
        }
    };

    println!(
        "Starting {} on http://{}:{}",
        config::project_name(),
        config::host(),
        config::port()
    );
    tracing::info!(%addr, "listening");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {addr}: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        process::exit(1);
    }
}
