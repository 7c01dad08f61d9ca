pub mod brands;
pub mod health;
pub mod regions;
pub mod schools;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /schools                       listing, create
/// /schools/{...}                 profile, sections, children
/// /brands                        brand directory and brand-scoped schools
/// /regions                       reference data
/// /geocode/reverse               map-pin address resolution
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/schools", schools::router())
        .nest("/brands", brands::router())
        .nest("/regions", regions::router())
        .route("/geocode/reverse", get(handlers::geocode::reverse))
}
