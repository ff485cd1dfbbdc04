//! Request and response types for the `/solar` endpoint.

use serde::{Deserialize, Serialize};

/// Raw query parameters for `GET /solar`.
///
/// Kept as optional strings so the missing-parameter check runs before
/// any numeric parsing; the two failure modes map to different HTTP
/// statuses.
#[derive(Debug, Deserialize)]
pub struct RawSolarQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Success envelope: `{"data": {...}}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SolarResponse {
    pub data: SolarData,
}

/// Per-site assessment figures. All irradiation and distance values are
/// rounded to 2 decimal places; latitude and longitude are echoed back
/// as received.
#[derive(Debug, Serialize, Deserialize)]
pub struct SolarData {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "annual_solar_irradiation_kWh_per_m2")]
    pub annual_solar_irradiation: f64,
    #[serde(rename = "average_monthly_kWh_per_m2")]
    pub average_monthly: f64,
    #[serde(rename = "average_daily_kWh_per_m2")]
    pub average_daily: f64,
    #[serde(rename = "monthly_values_kWh_per_m2")]
    pub monthly_values: [f64; 12],
    pub distance_to_coast_km: f64,
}

/// Error envelope: `{"error": "<message>"}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
