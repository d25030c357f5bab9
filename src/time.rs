//! # Calendar dates and the day count of the orbital theory
//!
//! Every time-dependent quantity of the engine is a polynomial in a single scalar,
//! the **day number** `d`: the signed count of days since 2000 Jan 0.0 UT
//! (1999-12-31 00:00 UT).
//!
//! ```text
//! d = 367·Y − 7·(Y + (M + 9) / 12) / 4 + 275·M / 9 + D − 730530
//! ```
//!
//! where every division is an **integer floor division**. A fractional part
//! (UT / 24) is added when the day number is built from a full [`hifitime::Epoch`].
//!
//! Calendar validation (month lengths, leap years) and day stepping are delegated
//! to [`hifitime`]; the textual form accepted by [`CalendarDate::from_str`] is
//! strictly `YYYY-MM-DD`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use hifitime::{Epoch, Unit};
use regex::Regex;
use serde::Serialize;

use crate::constants::{Degree, DAY_NUMBER_OFFSET, OBLIQUITY_AT_EPOCH, OBLIQUITY_RATE};
use crate::ephem_errors::EphemError;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid calendar date pattern")
});

/// A validated Gregorian calendar date (UTC civil day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Build a calendar date, rejecting days that do not exist.
    ///
    /// Arguments
    /// ---------
    /// * `year`: Gregorian year, 1 to 9999
    /// * `month`: month of the year, 1 to 12
    /// * `day`: day of the month
    ///
    /// Return
    /// ------
    /// * the validated date, or [`EphemError::InvalidDate`]
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, EphemError> {
        if !(1..=9999).contains(&year) {
            return Err(EphemError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02}: year outside 1..=9999"
            )));
        }
        Epoch::maybe_from_gregorian_utc(year, month, day, 12, 0, 0, 0).map_err(|e| {
            EphemError::InvalidDate(format!("{year:04}-{month:02}-{day:02}: {e}"))
        })?;
        Ok(CalendarDate { year, month, day })
    }

    /// Current UTC date from the system clock.
    pub fn today() -> Result<Self, EphemError> {
        let now = Epoch::now().map_err(|e| EphemError::InvalidDate(e.to_string()))?;
        Ok(Self::from_epoch(&now))
    }

    /// UTC civil date of an epoch.
    pub fn from_epoch(epoch: &Epoch) -> Self {
        let (year, month, day, ..) = epoch.to_gregorian_utc();
        CalendarDate { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Noon UTC of this date.
    ///
    /// Noon keeps day stepping away from the leap seconds inserted at midnight.
    fn noon(&self) -> Epoch {
        Epoch::from_gregorian_utc_hms(self.year, self.month, self.day, 12, 0, 0)
    }

    /// The date `days` civil days later (earlier when negative).
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_epoch(&(self.noon() + Unit::Day * days as f64))
    }

    /// Integer day number of 0h UT of this date.
    pub fn day_number(&self) -> DayNumber {
        let y = i64::from(self.year);
        let m = i64::from(self.month);
        let d = i64::from(self.day);
        let days = 367 * y - (7 * (y + (m + 9).div_euclid(12))).div_euclid(4)
            + (275 * m).div_euclid(9)
            + d
            - DAY_NUMBER_OFFSET;
        DayNumber(days as f64)
    }
}

impl FromStr for CalendarDate {
    type Err = EphemError;

    /// Parse a `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DATE_PATTERN
            .captures(s.trim())
            .ok_or_else(|| EphemError::InvalidDate(s.to_string()))?;
        let field = |i: usize| caps[i].parse::<i32>();
        let (year, month, day) = match (field(1), field(2), field(3)) {
            (Ok(y), Ok(m), Ok(d)) => (y, m, d),
            _ => return Err(EphemError::InvalidDate(s.to_string())),
        };
        let month = u8::try_from(month).map_err(|_| EphemError::InvalidDate(s.to_string()))?;
        let day = u8::try_from(day).map_err(|_| EphemError::InvalidDate(s.to_string()))?;
        CalendarDate::new(year, month, day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Days since 2000 Jan 0.0 UT, the time argument of every orbital element.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct DayNumber(f64);

impl DayNumber {
    /// Day number of an arbitrary instant, including the fraction of the UT day.
    pub fn from_epoch(epoch: &Epoch) -> Self {
        let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
        let date = CalendarDate { year, month, day };
        let ut = f64::from(hour)
            + f64::from(minute) / 60.0
            + (f64::from(second) + f64::from(nanos) * 1e-9) / 3600.0;
        DayNumber(date.day_number().value() + ut / 24.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Mean obliquity of the ecliptic on this day, in degrees.
    pub fn obliquity(&self) -> Degree {
        OBLIQUITY_AT_EPOCH - OBLIQUITY_RATE * self.0
    }
}

impl From<CalendarDate> for DayNumber {
    fn from(date: CalendarDate) -> Self {
        date.day_number()
    }
}

#[cfg(test)]
mod time_test {
    use super::*;

    #[test]
    fn test_day_number() {
        let day = |y, m, d| CalendarDate::new(y, m, d).unwrap().day_number().value();
        assert_eq!(day(1999, 12, 31), 0.0);
        assert_eq!(day(2000, 1, 1), 1.0);
        assert_eq!(day(1990, 4, 19), -3543.0);
        assert_eq!(day(2024, 6, 21), 8939.0);
        assert_eq!(day(2024, 12, 21), 9122.0);
    }

    #[test]
    fn test_day_number_from_epoch() {
        let epoch = Epoch::from_gregorian_utc_hms(2024, 6, 21, 18, 0, 0);
        assert_eq!(DayNumber::from_epoch(&epoch).value(), 8939.75);
    }

    #[test]
    fn test_parse_date() {
        let date: CalendarDate = "2024-06-21".parse().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 6, 21));
        assert_eq!(date.to_string(), "2024-06-21");
        assert_eq!(" 2024-02-29 ".parse::<CalendarDate>().unwrap().day(), 29);
    }

    #[test]
    fn test_reject_malformed_dates() {
        for bad in ["2024-6-21", "21/06/2024", "2024-13-01", "2023-02-29", "tomorrow", ""] {
            assert!(
                matches!(bad.parse::<CalendarDate>(), Err(EphemError::InvalidDate(_))),
                "{bad} should be rejected"
            );
        }
        assert!(CalendarDate::new(0, 1, 1).is_err());
    }

    #[test]
    fn test_add_days() {
        let date = CalendarDate::new(2024, 2, 28).unwrap();
        assert_eq!(date.add_days(1).to_string(), "2024-02-29");
        assert_eq!(date.add_days(2).to_string(), "2024-03-01");
        assert_eq!(date.add_days(-59).to_string(), "2023-12-31");

        let leap_second_eve = CalendarDate::new(2016, 12, 31).unwrap();
        assert_eq!(leap_second_eve.add_days(1).to_string(), "2017-01-01");
    }

    #[test]
    fn test_obliquity() {
        let d = CalendarDate::new(2024, 6, 21).unwrap().day_number();
        assert!((d.obliquity() - (23.4393 - 3.563e-7 * 8939.0)).abs() < 1e-12);
    }
}
