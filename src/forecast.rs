use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::ephem_errors::EphemError;
use crate::ephemeris::Ephemeris;
use crate::observer::Observer;
use crate::orbital_elements::Body;
use crate::rise_set::EventTime;
use crate::time::CalendarDate;

/// Longest forecast accepted, in days.
pub const MAX_FORECAST_DAYS: u32 = 366;

/// Rise and set of one body on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyEvents {
    pub date: CalendarDate,
    pub rise: EventTime,
    pub set: EventTime,
}

/// One [`Ephemeris`] per consecutive date, all for the same observer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    days: Vec<(CalendarDate, Ephemeris)>,
}

impl Forecast {
    /// Compute `days` consecutive daily ephemerides starting at `start`.
    ///
    /// Errors
    /// ----------
    /// * [`EphemError::InvalidForecastLength`] unless `1 ≤ days ≤ 366`.
    pub fn new(start: CalendarDate, days: u32, observer: Observer) -> Result<Self, EphemError> {
        if !(1..=MAX_FORECAST_DAYS).contains(&days) {
            return Err(EphemError::InvalidForecastLength(days));
        }
        let days = (0..i64::from(days))
            .map(|offset| {
                let date = start.add_days(offset);
                Ephemeris::for_date(date, observer).map(|eph| (date, eph))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Forecast { days })
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.days.iter().map(|(date, _)| *date)
    }

    pub fn ephemerides(&self) -> impl Iterator<Item = &Ephemeris> {
        self.days.iter().map(|(_, eph)| eph)
    }

    /// Rise and set of `body` on every date of the forecast.
    pub fn events(&self, body: Body) -> Vec<DailyEvents> {
        self.days
            .iter()
            .map(|(date, eph)| {
                let p = eph.body(body);
                DailyEvents {
                    date: *date,
                    rise: p.rise,
                    set: p.set,
                }
            })
            .collect()
    }

    /// One line per date: `YYYY-MM-DD  rise → set`.
    pub fn summary(&self, body: Body) -> String {
        self.events(body)
            .iter()
            .map(|e| format!("{}  {} → {}", e.date, e.rise, e.set))
            .join("\n")
    }
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tables = self
            .days
            .iter()
            .map(|(date, eph)| format!("{date}\n{}", eph.report()))
            .join("\n");
        f.write_str(&tables)
    }
}
