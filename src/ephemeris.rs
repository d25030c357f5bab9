//! # Ephemeris of one day
//!
//! [`Ephemeris`] is the entry point of the crate: it validates the date and the
//! observer, computes the Sun context once, then the nine bodies, and keeps the
//! result immutable.
//!
//! ```rust
//! use ephemeris::ephemeris::Ephemeris;
//! use ephemeris::orbital_elements::Body;
//!
//! let eph = Ephemeris::new("2024-06-21", 59.91, 10.75, 2)?;
//! let mars = eph.body(Body::Mars);
//! assert!((0.0..360.0).contains(&mars.right_ascension));
//! print!("{}", eph.report());
//! # Ok::<(), ephemeris::ephem_errors::EphemError>(())
//! ```

use log::debug;
use serde::Serialize;

use crate::constants::{Degree, Hour};
use crate::ephem_errors::EphemError;
use crate::horizon::{alt_az, HorizontalCoordinates};
use crate::observer::Observer;
use crate::orbital_elements::Body;
use crate::position::{compute_body, BodyPosition, EpochContext, SunContext};
use crate::report::ReportTable;
use crate::time::{CalendarDate, DayNumber};

/// Positions of the Sun, the Moon and the seven planets for one day and one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ephemeris {
    date: Option<CalendarDate>,
    observer: Observer,
    context: EpochContext,
    positions: Vec<BodyPosition>,
}

impl Ephemeris {
    /// Compute the ephemeris from a `YYYY-MM-DD` date and raw observer coordinates.
    ///
    /// Arguments
    /// -----------------
    /// * `date`: calendar date, `YYYY-MM-DD`
    /// * `latitude`: degrees, `[−90, 90]`
    /// * `longitude`: degrees east, `[−180, 180]`
    /// * `timezone`: hours from UTC, `[−12, 14]`
    ///
    /// Errors
    /// ----------
    /// * [`EphemError::InvalidDate`] for a malformed or nonexistent date.
    /// * The observer validation errors of [`Observer::new`].
    pub fn new(
        date: &str,
        latitude: Degree,
        longitude: Degree,
        timezone: i32,
    ) -> Result<Self, EphemError> {
        let date: CalendarDate = date.parse()?;
        let observer = Observer::new(latitude, longitude, timezone)?;
        Self::for_date(date, observer)
    }

    pub fn for_date(date: CalendarDate, observer: Observer) -> Result<Self, EphemError> {
        let mut eph = Self::from_day_number(date.day_number(), observer)?;
        eph.date = Some(date);
        Ok(eph)
    }

    /// Compute the ephemeris at an arbitrary (possibly fractional) day number.
    pub fn from_day_number(day: DayNumber, observer: Observer) -> Result<Self, EphemError> {
        let context = EpochContext::new(day, &observer)?;
        debug!(
            "ephemeris for d = {}, observer {:?}, obliquity {:.6}°, LST {:.6} h",
            day.value(),
            observer,
            context.obliquity,
            context.local_sidereal_time
        );

        let positions = Body::ALL
            .into_iter()
            .map(|body| compute_body(body, &context, &observer))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Ephemeris {
            date: None,
            observer,
            context,
            positions,
        })
    }

    /// Calendar date, when the ephemeris was built from one.
    pub fn date(&self) -> Option<CalendarDate> {
        self.date
    }

    pub fn day_number(&self) -> DayNumber {
        self.context.day
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn sun_context(&self) -> &SunContext {
        &self.context.sun
    }

    /// Obliquity of the ecliptic, degrees.
    pub fn obliquity(&self) -> Degree {
        self.context.obliquity
    }

    /// Local sidereal time at 0h UT, hours.
    pub fn local_sidereal_time(&self) -> Hour {
        self.context.local_sidereal_time
    }

    /// All positions, in [`Body::ALL`] order.
    pub fn positions(&self) -> &[BodyPosition] {
        &self.positions
    }

    pub fn body(&self, body: Body) -> &BodyPosition {
        // positions are stored in Body::ALL order, which is the declaration order
        &self.positions[body as usize]
    }

    /// Altitude and azimuth of `body` at the local sidereal time `sidereal_time` (hours).
    pub fn alt_az(&self, body: Body, sidereal_time: Hour) -> HorizontalCoordinates {
        let p = self.body(body);
        alt_az(
            p.right_ascension,
            p.declination,
            sidereal_time,
            self.observer.latitude(),
        )
    }

    /// Altitude and azimuth of the Sun at the sidereal time of the ephemeris.
    pub fn sun_horizontal(&self) -> HorizontalCoordinates {
        self.alt_az(Body::Sun, self.local_sidereal_time())
    }

    /// Planet table of this ephemeris.
    pub fn report(&self) -> ReportTable<'_> {
        ReportTable::new(&self.positions)
    }
}

#[cfg(test)]
mod ephemeris_test {
    use super::*;

    #[test]
    fn test_body_lookup_order() {
        let eph = Ephemeris::new("2024-06-21", 59.91, 10.75, 2).unwrap();
        for body in Body::ALL {
            assert_eq!(eph.body(body).body, body);
        }
        assert_eq!(eph.positions().len(), 9);
        assert_eq!(eph.date().unwrap().to_string(), "2024-06-21");
    }

    #[test]
    fn test_invalid_inputs_fail_before_computation() {
        assert!(matches!(
            Ephemeris::new("2024-02-30", 0.0, 0.0, 0),
            Err(EphemError::InvalidDate(_))
        ));
        assert_eq!(
            Ephemeris::new("2024-02-03", 95.0, 0.0, 0),
            Err(EphemError::LatitudeOutOfRange(95.0))
        );
    }

    #[test]
    fn test_sun_horizontal() {
        let eph = Ephemeris::new("2024-06-21", 59.91, 10.75, 2).unwrap();
        let sun = eph.sun_horizontal();
        assert!((sun.altitude - -6.2276).abs() < 0.01);
        assert!((sun.azimuth - 9.5168).abs() < 0.01);
    }
}
