//! # Planet table
//!
//! Fixed-column rendering of a set of [`BodyPosition`]s, borrowed without copying:
//!
//! ```text
//! Planet  │ RA          │ Dec          │ Dist. │ Rise  │ Trans │ Set
//! ────────┼─────────────┼──────────────┼───────┼───────┼───────┼──────
//! Mars    │  2h 25m  4s │  13° 16´ 37˝ │  1.77 │ 02:08 │ 09:45 │ 17:21
//! ```
//!
//! Every line ends with a space and a newline. Distances are cut to two
//! decimals and times to `HH:MM`, both by truncation. The Sun and the Moon are
//! left out unless [`ReportTable::with_luminaries`] is set.

use std::fmt;

use crate::conversion::{distance_string, to_hms};
use crate::position::BodyPosition;

pub const HEADER: &str = "Planet  │ RA          │ Dec          │ Dist. │ Rise  │ Trans │ Set   \n";
pub const SEPARATOR: &str = "────────┼─────────────┼──────────────┼───────┼───────┼───────┼────── \n";

/// Display adaptor printing positions as the planet table.
#[derive(Debug, Clone, Copy)]
pub struct ReportTable<'a> {
    positions: &'a [BodyPosition],
    luminaries: bool,
}

/// Drop the last `n` characters of a string.
fn cut(s: &str, n: usize) -> &str {
    match s.char_indices().rev().nth(n.saturating_sub(1)) {
        Some((idx, _)) if n > 0 => &s[..idx],
        Some(_) => s,
        None => "",
    }
}

impl<'a> ReportTable<'a> {
    pub fn new(positions: &'a [BodyPosition]) -> Self {
        ReportTable {
            positions,
            luminaries: false,
        }
    }

    /// Also print the Sun and the Moon.
    pub fn with_luminaries(mut self) -> Self {
        self.luminaries = true;
        self
    }

    fn rows(&self) -> impl Iterator<Item = &'a BodyPosition> {
        let luminaries = self.luminaries;
        self.positions
            .iter()
            .filter(move |p| luminaries || !p.body.is_luminary())
    }

    fn write_row(f: &mut fmt::Formatter<'_>, p: &BodyPosition) -> fmt::Result {
        let rise = p.rise.to_string();
        let transit = to_hms(p.transit);
        let set = p.set.to_string();
        let distance = distance_string(p.distance);
        writeln!(
            f,
            "{:<7} │ {:<11} │ {:<12} │ {} │ {:>5} │ {:>5} │ {:>5} ",
            p.body.label(),
            p.ra_hms,
            p.dec_dms,
            cut(&distance, 2),
            cut(&rise, 3),
            cut(&transit, 3),
            cut(&set, 3),
        )
    }
}

impl fmt::Display for ReportTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HEADER)?;
        f.write_str(SEPARATOR)?;
        for p in self.rows() {
            Self::write_row(f, p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod report_test {
    use super::*;
    use crate::orbital_elements::Body;
    use crate::rise_set::EventTime;

    fn mars() -> BodyPosition {
        BodyPosition::new(
            Body::Mars,
            36.2682,
            13.277,
            1.7798,
            EventTime::At(2.149_722),
            9.751_666_7,
            EventTime::At(17.353_888),
        )
    }

    #[test]
    fn test_cut() {
        assert_eq!(cut("09:45:06", 3), "09:45");
        assert_eq!(cut("always", 3), "alw");
        assert_eq!(cut("never", 3), "ne");
        assert_eq!(cut(" 1.7798", 2), " 1.77");
        assert_eq!(cut("ab", 3), "");
        assert_eq!(cut("ab", 0), "ab");
    }

    #[test]
    fn test_single_row() {
        let rows = [mars()];
        let table = ReportTable::new(&rows).to_string();
        let expected = format!(
            "{HEADER}{SEPARATOR}Mars    │  2h 25m  4s │  13° 16´ 37˝ │  1.77 │ 02:08 │ 09:45 │ 17:21 \n"
        );
        assert_eq!(table, expected);
    }

    #[test]
    fn test_sentinels_and_luminaries() {
        let sun = BodyPosition::new(
            Body::Sun,
            89.6704,
            23.4334,
            1.0162,
            EventTime::Always,
            13.3,
            EventTime::Never,
        );
        let rows = [sun, mars()];

        let planets_only = ReportTable::new(&rows).to_string();
        assert!(!planets_only.contains("Sun"));
        assert_eq!(planets_only.lines().count(), 3);

        let all = ReportTable::new(&rows).with_luminaries().to_string();
        let sun_line = all.lines().nth(2).unwrap();
        assert_eq!(
            sun_line,
            "Sun     │  5h 58m 40s │  23° 26´  0˝ │  1.01 │   alw │ 13:18 │    ne "
        );
    }
}
