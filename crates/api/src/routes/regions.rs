//! Route definitions for region reference data.

use axum::routing::get;
use axum::Router;

use crate::handlers::region;
use crate::state::AppState;

/// Routes mounted at `/regions`.
///
/// ```text
/// GET /                 -> list regions
/// GET /{id}/districts   -> districts of a region
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(region::list))
        .route("/{id}/districts", get(region::districts))
}
