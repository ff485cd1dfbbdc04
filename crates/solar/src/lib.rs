//! Solar irradiation estimation for Solarsite.
//!
//! A deliberately simple model: irradiation depends on latitude only,
//! through a cosine attenuation factor, and is spread evenly across the
//! twelve months. It is a site-screening approximation, not a seasonal
//! irradiance simulation.
//!
//! # Example
//!
//! ```
//! use solarsite_solar::estimate;
//!
//! let equator = estimate(0.0);
//! assert!((equator.annual_total - 1000.0).abs() < 1e-9);
//! ```

mod irradiation;

pub use irradiation::{
    attenuation, estimate, IrradiationEstimate, BASE_IRRADIATION, DAYS_PER_YEAR,
    MIN_ATTENUATION, MONTHS_PER_YEAR,
};
