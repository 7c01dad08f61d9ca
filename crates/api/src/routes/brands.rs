//! Route definitions for the `/brands` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::brand;
use crate::state::AppState;

/// Routes mounted at `/brands`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// GET    /{id}/schools      -> list_schools
/// POST   /{id}/schools      -> create_school (with field inheritance)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(brand::list).post(brand::create))
        .route("/{id}", get(brand::get_by_id))
        .route(
            "/{id}/schools",
            get(brand::list_schools).post(brand::create_school),
        )
}
