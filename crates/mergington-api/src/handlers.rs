//! REST API endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Redirect to the browser UI |
//! | `GET` | `/activities` | All activities keyed by name |
//! | `POST` | `/activities/{name}/signup?email=` | Register a student |
//! | `POST` | `/activities/{name}/unregister?email=` | Remove a student |

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Where `GET /` sends browsers.
pub const INDEX_PATH: &str = "/static/index.html";

/// Query parameters for the signup and unregister endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct EmailQuery {
    /// The student's email address.
    pub email: String,
}

// ---------------------------------------------------------------------------
// GET / -- redirect to the UI
// ---------------------------------------------------------------------------

/// Redirect to the static front end with `307 Temporary Redirect`.
pub async fn index() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

// ---------------------------------------------------------------------------
// GET /activities
// ---------------------------------------------------------------------------

/// Return every activity keyed by its name.
pub async fn list_activities(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let registry = state.registry.read().await;
    debug!(count = registry.len(), "listing activities");
    Json(registry.list_activities().clone())
}

// ---------------------------------------------------------------------------
// POST /activities/{name}/signup
// ---------------------------------------------------------------------------

/// Sign a student up for an activity.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .registry
        .write()
        .await
        .signup(&activity_name, &query.email);

    match result {
        Ok(confirmation) => {
            info!(activity = %activity_name, email = %query.email, "student signed up");
            Ok(Json(confirmation))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, error = %e, "signup rejected");
            Err(e.into())
        }
    }
}

// ---------------------------------------------------------------------------
// POST /activities/{name}/unregister
// ---------------------------------------------------------------------------

/// Remove a student from an activity.
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .registry
        .write()
        .await
        .unregister(&activity_name, &query.email);

    match result {
        Ok(confirmation) => {
            info!(activity = %activity_name, email = %query.email, "student unregistered");
            Ok(Json(confirmation))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, error = %e, "unregister rejected");
            Err(e.into())
        }
    }
}
