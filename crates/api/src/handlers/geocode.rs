//! Reverse-geocoding handler for the map-pin address picker.

use axum::extract::{Query, State};
use axum::Json;
use maktab_core::types::DbId;
use maktab_db::models::region::District;
use maktab_db::repositories::RegionRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::geocode::GeocodedAddress;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReverseQuery {
    pub lat: f64,
    pub lon: f64,
    /// When given, the geocoded district name is matched against this
    /// region's districts.
    pub region: Option<DbId>,
}

/// Both fields degrade to `null` independently; the client falls back to
/// manual entry for whatever could not be resolved.
#[derive(Debug, Serialize)]
pub struct ReverseResponse {
    pub address: Option<GeocodedAddress>,
    pub district: Option<District>,
}

/// GET /api/v1/geocode/reverse?lat=&lon=&region=
pub async fn reverse(
    State(state): State<AppState>,
    Query(query): Query<ReverseQuery>,
) -> AppResult<Json<ReverseResponse>> {
    let address = match &state.geocoder {
        Some(geocoder) => geocoder.reverse(query.lat, query.lon).await,
        None => None,
    };

    let district = match (&address, query.region) {
        (Some(addr), Some(region_id)) => match addr.district_name.as_deref() {
            Some(name) => RegionRepo::find_district_fuzzy(&state.pool, region_id, name).await?,
            None => None,
        },
        _ => None,
    };

    Ok(Json(ReverseResponse { address, district }))
}
