use crate::constants::{
    AstronomicalUnit, Degree, Hour, DEGREES_PER_HOUR, FULL_TURN, HOURS_PER_DAY,
};

/// Reduce an angle in degrees to the principal range `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `360.0`, which is
/// folded back to `0.0` so the half-open interval always holds.
pub fn normalize_degrees(angle: Degree) -> Degree {
    let a = angle.rem_euclid(FULL_TURN);
    if a >= FULL_TURN {
        0.0
    } else {
        a
    }
}

/// Reduce a time in decimal hours to the principal range `[0, 24)`.
pub fn normalize_hours(time: Hour) -> Hour {
    let t = time.rem_euclid(HOURS_PER_DAY);
    if t >= HOURS_PER_DAY {
        0.0
    } else {
        t
    }
}

/// Round a value to four decimals, the precision at which positions are published.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 1e4).round() / 1e4
}

/// Sexagesimal decomposition of a decimal value (hours or degrees).
///
/// The whole part is truncated toward zero, minutes and seconds are truncated
/// (never rounded) and always non-negative. The sign is carried separately so
/// that values in `(-1, 0)` keep their sign once rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sexagesimal {
    pub negative: bool,
    pub whole: i64,
    pub minutes: u32,
    pub seconds: u32,
}

impl Sexagesimal {
    /// Split a decimal value into whole units, minutes and seconds.
    ///
    /// Arguments
    /// ---------
    /// * `value`: decimal hours or degrees
    ///
    /// Return
    /// ------
    /// * the truncated sexagesimal components of `value`
    pub fn from_decimal(value: f64) -> Self {
        let whole = value.trunc();
        let m = ((value - whole) * 60.0).abs();
        let minutes = m.trunc();
        let seconds = ((m - minutes) * 60.0).trunc().abs();
        Sexagesimal {
            negative: value < 0.0,
            whole: whole as i64,
            minutes: minutes as u32,
            seconds: seconds as u32,
        }
    }

    /// Whole part with its sign, `-0` included.
    fn signed_whole(&self) -> String {
        if self.negative && self.whole == 0 {
            "-0".to_string()
        } else {
            self.whole.to_string()
        }
    }
}

/// Render decimal hours as a zero-padded `HH:MM:SS` clock string.
pub fn to_hms(time: Hour) -> String {
    let s = Sexagesimal::from_decimal(time);
    format!("{:02}:{:02}:{:02}", s.whole, s.minutes, s.seconds)
}

/// Render a right ascension given in degrees as `HHh MMm SSs` (space padded, 11 characters).
pub fn ra_hms(ra: Degree) -> String {
    let s = Sexagesimal::from_decimal(ra / DEGREES_PER_HOUR);
    format!("{:>2}h {:>2}m {:>2}s", s.whole, s.minutes, s.seconds)
}

/// Render a declination given in degrees as `DDD° MM´ SS˝` (space padded, 12 characters).
pub fn dec_dms(dec: Degree) -> String {
    let s = Sexagesimal::from_decimal(dec);
    format!("{:>3}° {:>2}´ {:>2}˝", s.signed_whole(), s.minutes, s.seconds)
}

/// Render a distance with a two-character integer part and four fractional digits.
///
/// The fractional digits come from the rounded fractional part alone, so a
/// fraction that rounds up to one renders as `.0000` without carrying.
pub fn distance_string(distance: AstronomicalUnit) -> String {
    let fraction = format!("{:.4}", distance.fract().abs());
    format!("{:>2}{}", distance.trunc() as i64, &fraction[1..])
}
