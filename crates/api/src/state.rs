use std::sync::Arc;

use crate::config::ServerConfig;
use crate::geocode::Geocoder;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: maktab_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Reverse geocoder; `None` when disabled by configuration.
    pub geocoder: Option<Arc<Geocoder>>,
}
