//! HTTP route entry point for `/api/...`.
//!
//! - `/health` → liveness probe
//! - `/{collection}` and `/{collection}/{id}` → read-only table listings
//! - `/debug` → inspection routes, outside production only

use crate::routes::{debug::debug_routes, health::health_routes, resources::resource_routes};
use axum::Router;
use util::{config, state::AppState};

pub mod common;
pub mod debug;
pub mod health;
pub mod resources;

/// Builds the router mounted under `/api`.
///
/// The `/debug` group is mounted here so the environment check lives next to
/// the rest of the route registration.
pub fn routes(app_state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new()
        .nest("/health", health_routes())
        .merge(resource_routes());

    if !config::is_production() {
        router = router.nest("/debug", debug_routes());
        tracing::info!("[dev] Mounted /debug routes (env = {})", config::env());
    } else {
        tracing::info!("[prod] Skipping /debug routes");
    }

    router.with_state(app_state)
}
