//! Latitude-based irradiation estimate.

use serde::{Deserialize, Serialize};

/// Nominal base irradiation at the equator, in kWh/m² per year.
pub const BASE_IRRADIATION: f64 = 1000.0;

/// Lower bound on the attenuation factor, so polar latitudes never
/// attenuate to zero.
pub const MIN_ATTENUATION: f64 = 0.2;

/// Months in a year, for spreading the annual total.
pub const MONTHS_PER_YEAR: usize = 12;

/// Days in a year, for deriving the daily average.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Estimated irradiation for a site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrradiationEstimate {
    /// Annual total in kWh/m² per year.
    pub annual_total: f64,
    /// Monthly values in kWh/m² per month. The model spreads the annual
    /// total evenly, so all twelve entries are equal.
    pub monthly: [f64; MONTHS_PER_YEAR],
}

/// Latitude attenuation factor in `[MIN_ATTENUATION, 1.0]`.
///
/// `max(0.2, cos(|lat|)^1.5)` — solar intensity falls off with the
/// cosine of absolute latitude, floored so extreme latitudes keep a
/// residual value. Longitude does not enter the model.
#[inline]
pub fn attenuation(latitude: f64) -> f64 {
    let cos_lat = latitude.abs().to_radians().cos();
    MIN_ATTENUATION.max(cos_lat.powf(1.5))
}

/// Estimates annual and monthly irradiation for a latitude.
///
/// Pure and deterministic: the same latitude always produces the same
/// estimate, and the result is finite and positive for finite input.
///
/// # Example
/// ```
/// use solarsite_solar::estimate;
///
/// let polar = estimate(90.0);
/// assert!((polar.annual_total - 200.0).abs() < 1e-9);
/// ```
pub fn estimate(latitude: f64) -> IrradiationEstimate {
    let monthly_value = BASE_IRRADIATION * attenuation(latitude) / MONTHS_PER_YEAR as f64;
    let monthly = [monthly_value; MONTHS_PER_YEAR];
    let annual_total = monthly.iter().sum();

    IrradiationEstimate {
        annual_total,
        monthly,
    }
}
