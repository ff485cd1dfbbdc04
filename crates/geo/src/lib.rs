//! Geospatial primitives for Solarsite.
//!
//! This crate provides:
//! - Haversine great-circle distance calculations
//! - A fixed set of coastline reference points
//! - Minimum distance-to-coast lookup
//!
//! # Example
//!
//! ```
//! use solarsite_geo::{haversine_distance, Coordinate};
//!
//! let berlin = Coordinate::new(52.5200, 13.4050);
//! let paris = Coordinate::new(48.8566, 2.3522);
//!
//! let distance_km = haversine_distance(&berlin, &paris);
//! assert!((distance_km - 878.0).abs() < 10.0); // ~878 km
//! ```

mod coast;
mod haversine;

pub use coast::{distance_to_coast, COAST_REFERENCE_POINTS};
pub use haversine::{haversine_distance, EARTH_RADIUS_KM};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if the coordinate has valid values.
    ///
    /// Informational only: distance calculations accept any finite
    /// coordinate and never reject on range.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

/// Rounds a value to 2 decimal places, half away from zero.
///
/// All figures reported by the API (distances and irradiation values)
/// go through this helper.
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
