//! # Mean orbital elements of the Sun, the Moon and the planets
//!
//! Each element is a linear function of the [`DayNumber`] `d`:
//! `value(d) = base + rate · d`. The coefficients are those of the classic
//! low-precision theory of P. Schlyter and are kept verbatim.
//!
//! Angles are in **degrees**, the semi-major axis in **AU**, except for the Moon
//! whose semi-major axis is expressed in **Earth radii**. The "Sun" elements
//! describe the apparent geocentric orbit of the Sun (equivalently the orbit of
//! the Earth rotated by 180°).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::Degree;
use crate::conversion::normalize_degrees;
use crate::ephem_errors::EphemError;
use crate::time::DayNumber;

/// The nine bodies handled by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    /// Every body, in computation order (the Sun comes first).
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// The seven planets, in order of distance from the Sun.
    pub const PLANETS: [Body; 7] = [
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// Lower-case identifier of the body.
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
        }
    }

    /// Capitalised name, as printed in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
        }
    }

    /// `true` for the Sun and the Moon.
    pub fn is_luminary(&self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }

    fn table(&self) -> &'static ElementTable {
        match self {
            Body::Sun => &SUN,
            Body::Moon => &MOON,
            Body::Mercury => &MERCURY,
            Body::Venus => &VENUS,
            Body::Mars => &MARS,
            Body::Jupiter => &JUPITER,
            Body::Saturn => &SATURN,
            Body::Uranus => &URANUS,
            Body::Neptune => &NEPTUNE,
        }
    }

    /// Mean orbital elements of the body on day `d`.
    ///
    /// The argument of perihelion and the mean anomaly are reduced to `[0, 360)`;
    /// the other angles are returned as evaluated.
    pub fn elements_at(&self, d: DayNumber) -> OrbitalElements {
        let t = self.table();
        let d = d.value();
        OrbitalElements {
            ascending_node: t.ascending_node.at(d),
            inclination: t.inclination.at(d),
            perihelion_argument: normalize_degrees(t.perihelion_argument.at(d)),
            semi_major_axis: t.semi_major_axis.at(d),
            eccentricity: t.eccentricity.at(d),
            mean_anomaly: normalize_degrees(t.mean_anomaly.at(d)),
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Body {
    type Err = EphemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Body::ALL
            .into_iter()
            .find(|body| body.name() == wanted)
            .ok_or_else(|| EphemError::UnknownBody(s.to_string()))
    }
}

/// Orbital elements of a body evaluated on a given day.
///
/// Units:
/// * `ascending_node`: degrees (N)
/// * `inclination`: degrees (i)
/// * `perihelion_argument`: degrees (w)
/// * `semi_major_axis`: AU, Earth radii for the Moon (a)
/// * `eccentricity`: unitless (e)
/// * `mean_anomaly`: degrees (M)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalElements {
    pub ascending_node: Degree,
    pub inclination: Degree,
    pub perihelion_argument: Degree,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub mean_anomaly: Degree,
}

impl OrbitalElements {
    /// Mean longitude `N + w + M`, not reduced.
    pub fn mean_longitude(&self) -> Degree {
        self.ascending_node + self.perihelion_argument + self.mean_anomaly
    }
}

#[derive(Debug, Clone, Copy)]
struct Linear {
    base: f64,
    rate: f64,
}

impl Linear {
    const fn new(base: f64, rate: f64) -> Self {
        Linear { base, rate }
    }

    const fn fixed(base: f64) -> Self {
        Linear { base, rate: 0.0 }
    }

    fn at(&self, d: f64) -> f64 {
        self.base + self.rate * d
    }
}

#[derive(Debug)]
struct ElementTable {
    ascending_node: Linear,
    inclination: Linear,
    perihelion_argument: Linear,
    semi_major_axis: Linear,
    eccentricity: Linear,
    mean_anomaly: Linear,
}

static SUN: ElementTable = ElementTable {
    ascending_node: Linear::fixed(0.0),
    inclination: Linear::fixed(0.0),
    perihelion_argument: Linear::new(282.9404, 4.70935e-5),
    semi_major_axis: Linear::fixed(1.0),
    eccentricity: Linear::new(0.016709, -1.151e-9),
    mean_anomaly: Linear::new(356.0470, 0.98555),
};

static MOON: ElementTable = ElementTable {
    ascending_node: Linear::new(125.1228, -0.0529538083),
    inclination: Linear::fixed(5.1454),
    perihelion_argument: Linear::new(318.0634, 0.1643573223),
    semi_major_axis: Linear::fixed(60.2666),
    eccentricity: Linear::fixed(0.054900),
    mean_anomaly: Linear::new(115.3654, 13.06478),
};

static MERCURY: ElementTable = ElementTable {
    ascending_node: Linear::new(48.3313, 3.24587e-5),
    inclination: Linear::new(7.0047, 5.00e-8),
    perihelion_argument: Linear::new(29.1241, 1.01444e-5),
    semi_major_axis: Linear::fixed(0.387098),
    eccentricity: Linear::new(0.205635, 5.59e-10),
    mean_anomaly: Linear::new(168.6562, 4.0923344368),
};

static VENUS: ElementTable = ElementTable {
    ascending_node: Linear::new(76.6799, 2.46590e-5),
    inclination: Linear::new(3.3946, 2.75e-8),
    perihelion_argument: Linear::new(54.8910, 1.38374e-5),
    semi_major_axis: Linear::fixed(0.723330),
    eccentricity: Linear::new(0.006773, -1.302e-9),
    mean_anomaly: Linear::new(48.0052, 1.6021302244),
};

static MARS: ElementTable = ElementTable {
    ascending_node: Linear::new(49.5574, 2.11081e-5),
    inclination: Linear::new(1.8497, -1.78e-8),
    perihelion_argument: Linear::new(286.5016, 2.92961e-5),
    semi_major_axis: Linear::fixed(1.523688),
    eccentricity: Linear::new(0.093405, 2.516e-9),
    mean_anomaly: Linear::new(18.6021, 0.52398),
};

static JUPITER: ElementTable = ElementTable {
    ascending_node: Linear::new(100.4542, 2.76854e-5),
    inclination: Linear::new(1.3030, -1.557e-7),
    perihelion_argument: Linear::new(273.8777, 1.64505e-5),
    semi_major_axis: Linear::fixed(5.20256),
    eccentricity: Linear::new(0.048498, 4.469e-9),
    mean_anomaly: Linear::new(19.8950, 0.083052),
};

static SATURN: ElementTable = ElementTable {
    ascending_node: Linear::new(113.6634, 2.38980e-5),
    inclination: Linear::new(2.4886, -1.081e-7),
    perihelion_argument: Linear::new(339.3939, 2.97661e-5),
    semi_major_axis: Linear::fixed(9.55475),
    eccentricity: Linear::new(0.055546, -9.499e-9),
    mean_anomaly: Linear::new(316.9670, 0.03339),
};

static URANUS: ElementTable = ElementTable {
    ascending_node: Linear::new(74.0005, 1.3978e-5),
    inclination: Linear::new(0.7733, 1.9e-8),
    perihelion_argument: Linear::new(96.6612, 3.0565e-5),
    semi_major_axis: Linear::new(19.18171, -1.55e-8),
    eccentricity: Linear::new(0.047318, 7.45e-9),
    mean_anomaly: Linear::new(142.5905, 0.01168),
};

static NEPTUNE: ElementTable = ElementTable {
    ascending_node: Linear::new(131.7806, 3.0173e-5),
    inclination: Linear::new(1.7700, -2.55e-7),
    perihelion_argument: Linear::new(272.8461, -6.027e-6),
    semi_major_axis: Linear::new(30.05826, 3.313e-8),
    eccentricity: Linear::new(0.008606, 2.15e-9),
    mean_anomaly: Linear::new(260.2471, 0.005953),
};

#[cfg(test)]
mod orbital_elements_test {
    use super::*;
    use crate::time::CalendarDate;

    #[test]
    fn test_elements_at_epoch() {
        let d0 = CalendarDate::new(1999, 12, 31).unwrap().day_number();
        let mars = Body::Mars.elements_at(d0);
        assert_eq!(mars.ascending_node, 49.5574);
        assert_eq!(mars.inclination, 1.8497);
        assert_eq!(mars.perihelion_argument, 286.5016);
        assert_eq!(mars.semi_major_axis, 1.523688);
        assert_eq!(mars.eccentricity, 0.093405);
        assert_eq!(mars.mean_anomaly, 18.6021);
    }

    #[test]
    fn test_angles_are_normalized() {
        let d = CalendarDate::new(2024, 6, 21).unwrap().day_number();
        for body in Body::ALL {
            let el = body.elements_at(d);
            assert!((0.0..360.0).contains(&el.mean_anomaly), "{body}");
            assert!((0.0..360.0).contains(&el.perihelion_argument), "{body}");
            assert!((0.0..1.0).contains(&el.eccentricity), "{body}");
        }

        let moon = Body::Moon.elements_at(d);
        let expected = (115.3654 + 13.06478 * 8939.0_f64).rem_euclid(360.0);
        assert!((moon.mean_anomaly - expected).abs() < 1e-9);
    }

    #[test]
    fn test_body_names() {
        assert_eq!("Jupiter".parse::<Body>().unwrap(), Body::Jupiter);
        assert_eq!(" moon ".parse::<Body>().unwrap(), Body::Moon);
        assert_eq!(
            "pluto".parse::<Body>(),
            Err(EphemError::UnknownBody("pluto".into()))
        );
        assert_eq!(Body::Neptune.to_string(), "Neptune");
        assert!(Body::PLANETS.iter().all(|b| !b.is_luminary()));
    }
}
