//! # Constants and type definitions for the ephemeris engine
//!
//! This module centralizes the **conversion factors**, the **constants of the
//! low-precision orbital theory**, and the **unit type aliases** used throughout
//! the crate.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, hours ↔ degrees)
//! - Reference constants of the day count and of the obliquity of the ecliptic
//! - Convergence settings of the Kepler solver
//! - Geometry of the observer (Earth oblateness) and of the horizontal parallax
//!
//! All angles handled by the public API are expressed in **degrees**, all local
//! times in **decimal hours**, and all distances in **AU** (Earth radii for the Moon).

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

/// Number of degrees swept by one hour of right ascension or hour angle
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Hours in a civil day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Degrees in a full turn
pub const FULL_TURN: f64 = 360.0;

/// Arcseconds in one degree
pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

// -------------------------------------------------------------------------------------------------
// Day count and Earth orientation
// -------------------------------------------------------------------------------------------------

/// Offset of the integer day count so that 2000 Jan 0.0 UT (1999-12-31 00:00 UT) is day zero
pub const DAY_NUMBER_OFFSET: i64 = 730_530;

/// Mean obliquity of the ecliptic at day zero (degrees)
pub const OBLIQUITY_AT_EPOCH: f64 = 23.4393;

/// Secular drift of the obliquity of the ecliptic (degrees per day)
pub const OBLIQUITY_RATE: f64 = 3.563e-7;

/// Equatorial horizontal parallax of a body at 1 AU (arcseconds)
pub const SOLAR_PARALLAX: ArcSec = 8.794;

/// Amplitude of the geodetic → geocentric latitude correction (degrees)
pub const GEOCENTRIC_LATITUDE_CORRECTION: f64 = 0.1924;

/// Mean term of the geocentric radius of the observer (Earth radii)
pub const RHO_MEAN: f64 = 0.99833;

/// Latitude-dependent term of the geocentric radius of the observer (Earth radii)
pub const RHO_AMPLITUDE: f64 = 0.00167;

// -------------------------------------------------------------------------------------------------
// Kepler solver
// -------------------------------------------------------------------------------------------------

/// Absolute deviation between successive eccentric-anomaly iterates considered converged (degrees)
pub const KEPLER_TOLERANCE: f64 = 0.0005;

/// Upper bound on the number of Newton corrections before giving up
pub const KEPLER_MAX_ITERATIONS: usize = 50;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Local time or hour angle in decimal hours
pub type Hour = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
