//! Axum router construction for the activities API.
//!
//! Assembles the REST routes and the static file service into a single
//! [`Router`] with CORS and request tracing enabled.

use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- redirect to `/static/index.html`
/// - `GET /activities` -- all activities
/// - `POST /activities/{name}/signup` -- register a student
/// - `POST /activities/{name}/unregister` -- remove a student
/// - `GET /static/*` -- files from `static_dir`
pub fn build_router(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/activities", get(handlers::list_activities))
        .route("/activities/{name}/signup", post(handlers::signup))
        .route("/activities/{name}/unregister", post(handlers::unregister))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
