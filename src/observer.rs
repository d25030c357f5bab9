//! # Observer site
//!
//! An [`Observer`] is the place and civil clock the ephemeris is computed for:
//! geodetic latitude and longitude in **degrees** (east and north positive) and a
//! whole-hour **timezone offset** from UTC.
//!
//! The site also provides the two oblateness corrections consumed by the
//! diurnal parallax step of the position pipeline:
//!
//! ```text
//! φ' = φ − 0.1924° · sin(2φ)           (geocentric latitude)
//! ρ  = 0.99833 + 0.00167 · cos(2φ)      (geocentric radius, Earth radii)
//! ```
//!
//! ## Invariants
//!
//! - `latitude ∈ [−90, 90]`, `longitude ∈ [−180, 180]`, `timezone ∈ [−12, 14]`.
//! - Coordinates are stored as `NotNan<f64>`: a constructed observer can never feed
//!   NaN into the pipeline.

use ordered_float::NotNan;
use serde::Serialize;

use crate::constants::{
    Degree, GEOCENTRIC_LATITUDE_CORRECTION, RADEG, RHO_AMPLITUDE, RHO_MEAN,
};
use crate::ephem_errors::EphemError;

/// Geographic location and timezone of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Observer {
    /// Geodetic latitude in **degrees**, north positive.
    latitude: NotNan<f64>,

    /// Longitude in **degrees** east of Greenwich.
    longitude: NotNan<f64>,

    /// Offset of local civil time from UTC, in **hours**.
    timezone: i32,
}

impl Observer {
    /// Build a validated observer.
    ///
    /// Arguments
    /// -----------------
    /// * `latitude`: geodetic latitude in degrees, `[−90, 90]`
    /// * `longitude`: longitude in degrees east, `[−180, 180]`
    /// * `timezone`: local offset from UTC in whole hours, `[−12, 14]`
    ///
    /// Return
    /// ----------
    /// * The observer, or the [`EphemError`] naming the first invalid argument.
    ///
    /// Errors
    /// ----------
    /// * [`EphemError::NonFiniteInput`] for NaN or infinite coordinates.
    /// * [`EphemError::LatitudeOutOfRange`], [`EphemError::LongitudeOutOfRange`],
    ///   [`EphemError::TimezoneOutOfRange`] for values outside their domain.
    pub fn new(latitude: Degree, longitude: Degree, timezone: i32) -> Result<Self, EphemError> {
        let latitude = finite(latitude, "latitude")?;
        let longitude = finite(longitude, "longitude")?;

        if !(-90.0..=90.0).contains(&latitude.into_inner()) {
            return Err(EphemError::LatitudeOutOfRange(latitude.into_inner()));
        }
        if !(-180.0..=180.0).contains(&longitude.into_inner()) {
            return Err(EphemError::LongitudeOutOfRange(longitude.into_inner()));
        }
        if !(-12..=14).contains(&timezone) {
            return Err(EphemError::TimezoneOutOfRange(timezone));
        }

        Ok(Observer {
            latitude,
            longitude,
            timezone,
        })
    }

    pub fn latitude(&self) -> Degree {
        self.latitude.into_inner()
    }

    pub fn longitude(&self) -> Degree {
        self.longitude.into_inner()
    }

    pub fn timezone(&self) -> i32 {
        self.timezone
    }

    /// Geocentric latitude φ' in degrees, corrected for the flattening of the Earth.
    pub fn geocentric_latitude(&self) -> Degree {
        let lat = self.latitude();
        lat - GEOCENTRIC_LATITUDE_CORRECTION * (2.0 * lat * RADEG).sin()
    }

    /// Distance of the site from the centre of the Earth, in Earth radii.
    pub fn geocentric_radius(&self) -> f64 {
        RHO_MEAN + RHO_AMPLITUDE * (2.0 * self.latitude() * RADEG).cos()
    }
}

fn finite(value: f64, name: &'static str) -> Result<NotNan<f64>, EphemError> {
    if !value.is_finite() {
        return Err(EphemError::NonFiniteInput(name));
    }
    NotNan::new(value).map_err(|_| EphemError::NonFiniteInput(name))
}

#[cfg(test)]
mod observer_test {
    use super::*;

    #[test]
    fn test_new_observer() {
        let oslo = Observer::new(59.91, 10.75, 2).unwrap();
        assert_eq!(oslo.latitude(), 59.91);
        assert_eq!(oslo.longitude(), 10.75);
        assert_eq!(oslo.timezone(), 2);

        assert!(Observer::new(90.0, -180.0, -12).is_ok());
        assert!(Observer::new(-90.0, 180.0, 14).is_ok());
    }

    #[test]
    fn test_reject_invalid_observer() {
        assert_eq!(
            Observer::new(91.0, 0.0, 0),
            Err(EphemError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            Observer::new(0.0, -180.5, 0),
            Err(EphemError::LongitudeOutOfRange(-180.5))
        );
        assert_eq!(
            Observer::new(0.0, 0.0, 15),
            Err(EphemError::TimezoneOutOfRange(15))
        );
        assert_eq!(
            Observer::new(f64::NAN, 0.0, 0),
            Err(EphemError::NonFiniteInput("latitude"))
        );
        assert_eq!(
            Observer::new(0.0, f64::INFINITY, 0),
            Err(EphemError::NonFiniteInput("longitude"))
        );
    }

    #[test]
    fn test_geocentric_correction() {
        let equator = Observer::new(0.0, 0.0, 0).unwrap();
        assert_eq!(equator.geocentric_latitude(), 0.0);
        assert!((equator.geocentric_radius() - 1.0).abs() < 1e-12);

        let pole = Observer::new(90.0, 0.0, 0).unwrap();
        assert!((pole.geocentric_latitude() - 90.0).abs() < 1e-12);
        assert!((pole.geocentric_radius() - 0.99666).abs() < 1e-12);

        let mid = Observer::new(45.0, 0.0, 0).unwrap();
        assert!((mid.geocentric_latitude() - 44.8076).abs() < 1e-12);
    }
}
