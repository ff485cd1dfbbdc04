//! Distance to the nearest coastline reference point.
//!
//! The coastline is approximated by a small fixed set of known coastal
//! locations; the distance to coast is the minimum haversine distance
//! to any of them.

use crate::{haversine_distance, round2, Coordinate};

/// Fixed coastal reference locations.
///
/// Ecuador (equator), the Ecuadorian Pacific coast, the Dutch coast,
/// northern Chile, Los Angeles, and the Namibian coast.
pub const COAST_REFERENCE_POINTS: [Coordinate; 6] = [
    Coordinate::new(0.0, 0.0),
    Coordinate::new(0.0, -78.5),
    Coordinate::new(52.0, 4.0),
    Coordinate::new(-24.5, -70.0),
    Coordinate::new(33.0, -118.0),
    Coordinate::new(-29.0, 17.0),
];

/// Returns the distance in kilometers from `coord` to the nearest
/// coastline reference point, rounded to 2 decimal places.
///
/// # Example
/// ```
/// use solarsite_geo::{distance_to_coast, Coordinate};
///
/// // The equator reference point itself
/// assert_eq!(distance_to_coast(&Coordinate::new(0.0, 0.0)), 0.0);
/// ```
pub fn distance_to_coast(coord: &Coordinate) -> f64 {
    let min = COAST_REFERENCE_POINTS
        .iter()
        .map(|point| haversine_distance(coord, point))
        .fold(f64::INFINITY, f64::min);

    round2(min)
}
