//! `GET /api/console/config`: browser-facing deployment settings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use console::config::ConsoleConfig;

pub async fn console_config(State(config): State<Arc<ConsoleConfig>>) -> Json<ConsoleConfig> {
    Json(config.as_ref().clone())
}
