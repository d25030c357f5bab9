//! # ephemeris
//!
//! Low-precision positions of the Sun, the Moon and the planets Mercury to
//! Neptune, for a calendar date and an observer on the Earth.
//!
//! For every body the crate computes the topocentric right ascension and
//! declination, the distance, and the local rise, transit and set times, from
//! mean Keplerian elements that vary linearly with time, corrected by the main
//! periodic perturbations of the Moon, Jupiter, Saturn and Uranus. Accuracy is
//! at the arcminute level, enough to point a small telescope or plan an
//! observing night.
//!
//! ## Modules
//!
//! - [`ephemeris`]: the [`Ephemeris`](crate::ephemeris::Ephemeris) aggregate, entry point of the crate
//! - [`orbital_elements`], [`kepler`], [`perturbation`], [`position`]: the position pipeline
//! - [`rise_set`], [`horizon`]: daily events and horizontal coordinates
//! - [`report`], [`forecast`]: planet table and multi-day forecasts
//! - [`time`], [`observer`], [`conversion`], [`constants`]: inputs, units and formatting
//! - [`ephem_errors`]: error type
//!
//! ## Example
//!
//! ```rust
//! use ephemeris::ephemeris::Ephemeris;
//! use ephemeris::orbital_elements::Body;
//! use ephemeris::rise_set::EventTime;
//!
//! // Longyearbyen around the June solstice: midnight sun.
//! let eph = Ephemeris::new("2024-06-21", 78.0, 15.0, 2)?;
//! assert_eq!(eph.body(Body::Sun).rise, EventTime::Always);
//! assert_eq!(eph.body(Body::Sun).set, EventTime::Never);
//! # Ok::<(), ephemeris::ephem_errors::EphemError>(())
//! ```

pub mod constants;
pub mod conversion;
pub mod ephem_errors;
pub mod ephemeris;
pub mod forecast;
pub mod horizon;
pub mod kepler;
pub mod observer;
pub mod orbital_elements;
pub mod perturbation;
pub mod position;
pub mod report;
pub mod rise_set;
pub mod time;
