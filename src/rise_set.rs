//! # Rise, transit and set
//!
//! Local civil times at which a body crosses the meridian and the horizon.
//!
//! The transit time follows from the right ascension and the Sun's mean
//! longitude:
//!
//! ```text
//! transit = ((α − Ls − λ) / 15 + 12 + tz) mod 24
//! ```
//!
//! and the half-arc above the horizon from the hour angle `H` at which the
//! altitude is zero, `cos H = −tan φ · tan δ`. When `|cos H| > 1` the body does
//! not cross the horizon that day: it is either circumpolar or stays below the
//! horizon. Those two outcomes are regular results, carried by [`EventTime`].

use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::{Degree, Hour, DEGRAD, DEGREES_PER_HOUR, RADEG};
use crate::conversion::{normalize_hours, to_hms};
use crate::observer::Observer;

/// Time of a rise or set event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventTime {
    /// Local time of the event, in decimal hours `[0, 24)`.
    At(Hour),
    /// The body stays above the horizon all day.
    Always,
    /// The body stays below the horizon all day.
    Never,
}

impl EventTime {
    pub fn hours(&self) -> Option<Hour> {
        match self {
            EventTime::At(h) => Some(*h),
            _ => None,
        }
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTime::At(h) => f.write_str(&to_hms(*h)),
            EventTime::Always => f.write_str("always"),
            EventTime::Never => f.write_str("never"),
        }
    }
}

impl Serialize for EventTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub(crate) fn serialize_hms<S: Serializer>(time: &Hour, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&to_hms(*time))
}

/// How the diurnal circle of a body meets the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizonCrossing {
    /// The body rises and sets; half the time spent above the horizon, in degrees of hour angle.
    Crosses(Degree),
    /// Never sets.
    Circumpolar,
    /// Never rises.
    BelowHorizon,
}

impl HorizonCrossing {
    /// Classify from the cosine of the hour angle at which the altitude is zero.
    pub fn from_cos_hour_angle(cos_lha: f64) -> Self {
        if cos_lha < -1.0 {
            HorizonCrossing::Circumpolar
        } else if cos_lha > 1.0 {
            HorizonCrossing::BelowHorizon
        } else {
            HorizonCrossing::Crosses(cos_lha.acos() * DEGRAD)
        }
    }
}

/// Rise, transit and set of a body on one day, in local civil time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiseTransitSet {
    pub rise: EventTime,
    #[serde(serialize_with = "serialize_hms")]
    pub transit: Hour,
    pub set: EventTime,
}

/// Rise, transit and set times of a body.
///
/// Arguments
/// -----------------
/// * `ra`, `dec`: topocentric right ascension and declination, degrees
/// * `sun_mean_longitude`: mean longitude of the Sun on the day, degrees
/// * `observer`: site latitude, longitude and timezone
///
/// Return
/// ----------
/// * Local transit time and, when the body crosses the horizon, the rise and set
///   times. A circumpolar body yields `(Always, Never)`, a body that stays below
///   the horizon `(Never, Always)`.
pub fn rise_transit_set(
    ra: Degree,
    dec: Degree,
    sun_mean_longitude: Degree,
    observer: &Observer,
) -> RiseTransitSet {
    let transit = normalize_hours(
        (ra - sun_mean_longitude - observer.longitude()) / DEGREES_PER_HOUR
            + 12.0
            + f64::from(observer.timezone()),
    );

    let lat = observer.latitude() * RADEG;
    let dec = dec * RADEG;
    let cos_lha = (-lat.sin() * dec.sin()) / (lat.cos() * dec.cos());

    let (rise, set) = match HorizonCrossing::from_cos_hour_angle(cos_lha) {
        HorizonCrossing::Circumpolar => (EventTime::Always, EventTime::Never),
        HorizonCrossing::BelowHorizon => (EventTime::Never, EventTime::Always),
        HorizonCrossing::Crosses(lha) => {
            let half_arc = lha / DEGREES_PER_HOUR;
            (
                EventTime::At(normalize_hours(transit - half_arc)),
                EventTime::At(normalize_hours(transit + half_arc)),
            )
        }
    };

    RiseTransitSet { rise, transit, set }
}

#[cfg(test)]
mod rise_set_test {
    use super::*;

    #[test]
    fn test_event_time_display() {
        assert_eq!(EventTime::At(13.5).to_string(), "13:30:00");
        assert_eq!(EventTime::Always.to_string(), "always");
        assert_eq!(EventTime::Never.to_string(), "never");
        assert_eq!(EventTime::Never.hours(), None);
    }

    #[test]
    fn test_horizon_crossing() {
        assert_eq!(
            HorizonCrossing::from_cos_hour_angle(-1.2),
            HorizonCrossing::Circumpolar
        );
        assert_eq!(
            HorizonCrossing::from_cos_hour_angle(1.2),
            HorizonCrossing::BelowHorizon
        );
        assert_eq!(
            HorizonCrossing::from_cos_hour_angle(0.0),
            HorizonCrossing::Crosses(90.0)
        );
        assert_eq!(
            HorizonCrossing::from_cos_hour_angle(1.0),
            HorizonCrossing::Crosses(0.0)
        );
    }

    #[test]
    fn test_equator_twelve_hour_arc() {
        let observer = Observer::new(0.0, 0.0, 0).unwrap();
        let rts = rise_transit_set(90.0, 10.0, 0.0, &observer);
        assert!((rts.transit - 18.0).abs() < 1e-12);
        assert!((rts.rise.hours().unwrap() - 12.0).abs() < 1e-12);
        assert!((rts.set.hours().unwrap() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_circumpolar_states() {
        let arctic = Observer::new(78.0, 15.0, 2).unwrap();

        let summer_sun = rise_transit_set(89.67, 23.43, 89.24, &arctic);
        assert_eq!(summer_sun.rise, EventTime::Always);
        assert_eq!(summer_sun.set, EventTime::Never);

        let winter_sun = rise_transit_set(270.0, -23.43, 269.0, &arctic);
        assert_eq!(winter_sun.rise, EventTime::Never);
        assert_eq!(winter_sun.set, EventTime::Always);
    }

    #[test]
    fn test_transit_wraps_into_day() {
        let observer = Observer::new(45.0, 170.0, 14).unwrap();
        let rts = rise_transit_set(350.0, 0.0, 10.0, &observer);
        assert!((0.0..24.0).contains(&rts.transit));
    }
}
