//! Route definitions for the `/schools` resource.

use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use crate::handlers::{media, review, school, section, staff};
use crate::state::AppState;

/// Routes mounted at `/schools`.
///
/// ```text
/// GET    /                                  -> filtered listing
/// POST   /                                  -> create
/// GET    /slug/{slug}                       -> get_by_slug
/// GET    /{id}                              -> get_by_id
/// DELETE /{id}                              -> soft delete
/// POST   /{id}/restore                      -> restore
/// PUT    /{id}/status                       -> set_status
///
/// GET    /{id}/details                      -> school details
/// PUT    /{id}/details                      -> combined details upsert
///
/// GET    /{id}/sections                     -> per-section progress
/// PATCH  /{id}/sections/{section}           -> validated section save
///
/// GET    /{id}/reviews                      -> list reviews
/// POST   /{id}/reviews                      -> create review
/// POST   /{id}/reviews/{review_id}/response -> school response
/// DELETE /{id}/reviews/{review_id}          -> delete review
/// GET    /{id}/rating                       -> rating summary
///
/// GET    /{id}/media                        -> list media
/// POST   /{id}/media                        -> register media
/// PATCH  /{id}/media/{media_id}             -> update metadata
/// DELETE /{id}/media/{media_id}             -> delete
/// POST   /{id}/media/{media_id}/cover       -> set cover photo
///
/// GET    /{id}/staff                        -> list staff
/// POST   /{id}/staff                        -> create staff member
/// PUT    /{id}/staff/{staff_id}             -> update
/// DELETE /{id}/staff/{staff_id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(school::list).post(school::create))
        .route("/slug/{slug}", get(school::get_by_slug))
        .route("/{id}", get(school::get_by_id).delete(school::delete))
        .route("/{id}/restore", post(school::restore))
        .route("/{id}/status", put(school::set_status))
        .route(
            "/{id}/details",
            get(school::get_details).put(school::upsert_details),
        )
        .route("/{id}/sections", get(section::list_progress))
        .route("/{id}/sections/{section}", patch(section::save_section))
        .route("/{id}/reviews", get(review::list).post(review::create))
        .route("/{id}/reviews/{review_id}", delete(review::delete))
        .route("/{id}/reviews/{review_id}/response", post(review::respond))
        .route("/{id}/rating", get(review::rating))
        .route("/{id}/media", get(media::list).post(media::create))
        .route(
            "/{id}/media/{media_id}",
            patch(media::update).delete(media::delete),
        )
        .route("/{id}/media/{media_id}/cover", post(media::set_cover))
        .route("/{id}/staff", get(staff::list).post(staff::create))
        .route(
            "/{id}/staff/{staff_id}",
            put(staff::update).delete(staff::delete),
        )
}
