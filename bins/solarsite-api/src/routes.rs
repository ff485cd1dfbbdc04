//! The `/solar` endpoint: query validation, computation, response assembly.

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use solarsite_geo::{distance_to_coast, round2, Coordinate};
use solarsite_solar::{estimate, DAYS_PER_YEAR, MONTHS_PER_YEAR};

use crate::error::ApiError;
use crate::types::{RawSolarQuery, SolarData, SolarResponse};

/// Message returned when `lat` or `lon` is absent, preserved verbatim
/// for compatibility with existing clients.
const MISSING_PARAMS: &str = "Parámetros lat y lon son requeridos";

/// Builds the application router.
///
/// CORS is deliberately unrestricted; the service is a public read-only
/// query endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/solar", get(solar))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// `GET /solar?lat={float}&lon={float}`
///
/// Missing parameters produce 400 with a fixed message; a parameter
/// that fails to parse as a float produces 500, matching the historical
/// behavior where the missing check ran before parsing and parsing
/// errors fell through to the generic handler.
async fn solar(Query(query): Query<RawSolarQuery>) -> Result<Json<SolarResponse>, ApiError> {
    let (Some(lat_raw), Some(lon_raw)) = (query.lat, query.lon) else {
        return Err(ApiError::Validation(MISSING_PARAMS.to_string()));
    };

    let lat = parse_param("lat", &lat_raw)?;
    let lon = parse_param("lon", &lon_raw)?;

    let irradiation = estimate(lat);
    let coast_km = distance_to_coast(&Coordinate::new(lat, lon));

    let average_monthly = irradiation.annual_total / MONTHS_PER_YEAR as f64;
    let average_daily = irradiation.annual_total / DAYS_PER_YEAR;

    let data = SolarData {
        latitude: lat,
        longitude: lon,
        annual_solar_irradiation: round2(irradiation.annual_total),
        average_monthly: round2(average_monthly),
        average_daily: round2(average_daily),
        monthly_values: irradiation.monthly.map(round2),
        distance_to_coast_km: coast_km,
    };

    tracing::debug!(
        lat,
        lon,
        annual = data.annual_solar_irradiation,
        coast_km,
        "computed solar assessment"
    );

    Ok(Json(SolarResponse { data }))
}

fn parse_param(name: &str, raw: &str) -> Result<f64, ApiError> {
    raw.parse::<f64>()
        .map_err(|e| ApiError::Computation(format!("{name}: {e}")))
}
