//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON props endpoints and stitches them with Leptos
//! SSR rendering under a single Axum router. Every SSR render gets the
//! current props record as context; static images are served from
//! `/assets` and the compiled client bundle from `/pkg`.

pub mod home;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON and health routes, plus `/assets`.
fn api_routes(state: AppState, assets_dir: &Path) -> Router {
    Router::new()
        .route("/api/home", get(home::home_props))
        .route("/api/home/reload", post(home::reload_home_props))
        .route("/healthz", get(healthz))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .with_state(state)
}

/// Full application: API routes + Leptos SSR home page + client bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn leptos_app(state: AppState, assets_dir: &Path) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let state = state.clone();
                move || provide_context(state.snapshot().as_ref().clone())
            },
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state, assets_dir)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
