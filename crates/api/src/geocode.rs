//! Reverse geocoding for map-pin address entry.
//!
//! Wraps a Nominatim-compatible endpoint. Every failure here is soft:
//! a network error, a non-200 status or an unparseable body all degrade
//! to `None` and the editor falls back to manual address entry. Only
//! the save path decides what is an error.

use std::time::Duration;

use serde::Deserialize;

/// Address details as resolved from coordinates.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeocodedAddress {
    /// Full display address, suitable for prefilling the address field.
    pub display_name: String,
    /// District-level name when the geocoder reports one, used for the
    /// fuzzy district match against reference data.
    pub district_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    display_name: String,
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    city_district: Option<String>,
    suburb: Option<String>,
    county: Option<String>,
}

/// Reverse geocoder client.
pub struct Geocoder {
    client: reqwest::Client,
    base_url: String,
}

impl Geocoder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .user_agent(concat!("maktab/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Resolve coordinates to an address, `None` on any failure.
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> Option<GeocodedAddress> {
        let url = format!("{}/reverse", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("accept-language", "uz,ru".to_string()),
            ])
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "Reverse geocoding request failed");
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Reverse geocoder returned an error");
            return None;
        }

        match response.json::<NominatimResponse>().await {
            Ok(body) => {
                let district_name = body
                    .address
                    .city_district
                    .or(body.address.suburb)
                    .or(body.address.county);
                Some(GeocodedAddress {
                    display_name: body.display_name,
                    district_name,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Reverse geocoder response was not parseable");
                None
            }
        }
    }
}
