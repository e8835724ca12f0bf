//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the host API and stitches it with Leptos SSR rendering
//! of the console under a single Axum router. Compiled WASM/CSS assets are
//! served from `/pkg`.

pub mod config;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use console::config::{CONFIG_ENDPOINT, ConsoleConfig};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Failure to assemble the host router.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Host API routes consumed by the hydrated console.
fn api_routes(shared: Arc<ConsoleConfig>) -> Router {
    Router::new()
        .route(CONFIG_ENDPOINT, get(config::console_config))
        .route("/healthz", get(healthz))
        .with_state(shared)
}

/// Full application: API routes, Leptos SSR for the console, static assets.
///
/// # Errors
///
/// Returns [`RouterError::LeptosConfig`] if the Leptos configuration cannot
/// be loaded (missing or malformed `[package.metadata.leptos]` section).
pub fn app(console_config: ConsoleConfig) -> Result<Router, RouterError> {
    let conf = get_configuration(None).map_err(|e| RouterError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(console::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || console::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(Arc::new(console_config))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
