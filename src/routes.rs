use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Full application: routes, request tracing and state
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index).post(handlers::handle_form))
        // Health check
        .route("/api/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "mock_mode": state.config.mock_mode
    }))
}
