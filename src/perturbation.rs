//! # Periodic perturbations
//!
//! Corrections added to the unperturbed ecliptic longitude, latitude and
//! distance of the Moon, Jupiter, Saturn and Uranus. All series take their
//! arguments in degrees; longitude and latitude corrections are in degrees,
//! the lunar distance correction is in Earth radii.
//!
//! The lunar series uses the Moon's mean elongation `D = L − Ls` and argument of
//! latitude `F = L − N` (with `L = N + w + M` the Moon's mean longitude), and the
//! mean anomaly `Ms` and mean longitude `Ls` of the Sun. The giant-planet series
//! only depend on the mean anomalies of Jupiter, Saturn and Uranus.

use serde::Serialize;

use crate::constants::{Degree, RADEG};
use crate::conversion::normalize_degrees;
use crate::orbital_elements::{Body, OrbitalElements};
use crate::time::DayNumber;

/// Additive corrections to the ecliptic coordinates of a body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Perturbation {
    pub longitude: Degree,
    pub latitude: Degree,
    pub distance: f64,
}

/// Mean anomalies of the three giant planets whose mutual attraction is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GiantAnomalies {
    pub jupiter: Degree,
    pub saturn: Degree,
    pub uranus: Degree,
}

impl GiantAnomalies {
    pub fn at(d: DayNumber) -> Self {
        GiantAnomalies {
            jupiter: Body::Jupiter.elements_at(d).mean_anomaly,
            saturn: Body::Saturn.elements_at(d).mean_anomaly,
            uranus: Body::Uranus.elements_at(d).mean_anomaly,
        }
    }
}

fn sin(angle: Degree) -> f64 {
    (angle * RADEG).sin()
}

fn cos(angle: Degree) -> f64 {
    (angle * RADEG).cos()
}

/// Perturbation of `body`, zero for the bodies that have no series.
///
/// Arguments
/// -----------------
/// * `body`: the perturbed body
/// * `elements`: its mean elements on the day of computation
/// * `sun_mean_anomaly`, `sun_mean_longitude`: solar arguments of the lunar series
/// * `giants`: mean anomalies of Jupiter, Saturn and Uranus
pub fn perturbation(
    body: Body,
    elements: &OrbitalElements,
    sun_mean_anomaly: Degree,
    sun_mean_longitude: Degree,
    giants: &GiantAnomalies,
) -> Perturbation {
    match body {
        Body::Moon => lunar(elements, sun_mean_anomaly, sun_mean_longitude),
        Body::Jupiter => jupiter(giants),
        Body::Saturn => saturn(giants),
        Body::Uranus => uranus(giants),
        _ => Perturbation::default(),
    }
}

/// Main lunar inequalities (evection, variation, yearly equation, ...).
pub fn lunar(moon: &OrbitalElements, ms: Degree, ls: Degree) -> Perturbation {
    let m = moon.mean_anomaly;
    let lb = normalize_degrees(moon.mean_longitude());
    let db = normalize_degrees(lb - ls);
    let fb = normalize_degrees(lb - moon.ascending_node);

    let longitude = -1.274 * sin(m - 2.0 * db)
        + 0.658 * sin(2.0 * db)
        - 0.186 * sin(ms)
        - 0.059 * sin(2.0 * m - 2.0 * db)
        - 0.057 * sin(m - 2.0 * db + ms)
        + 0.053 * sin(m + 2.0 * db)
        + 0.046 * sin(2.0 * db - ms)
        + 0.041 * sin(m - ms)
        - 0.035 * sin(db)
        - 0.031 * sin(m + ms)
        - 0.015 * sin(2.0 * fb - 2.0 * db)
        + 0.011 * sin(m - 4.0 * db);

    let latitude = -0.173 * sin(fb - 2.0 * db)
        - 0.055 * sin(m - fb - 2.0 * db)
        - 0.046 * sin(m + fb - 2.0 * db)
        + 0.033 * sin(fb + 2.0 * db)
        + 0.017 * sin(2.0 * m + fb);

    let distance = -0.58 * cos(m - 2.0 * db) - 0.46 * cos(2.0 * db);

    Perturbation {
        longitude,
        latitude,
        distance,
    }
}

pub fn jupiter(g: &GiantAnomalies) -> Perturbation {
    let (mj, ms) = (g.jupiter, g.saturn);
    let longitude = -0.332 * sin(2.0 * mj - 5.0 * ms - 67.6)
        - 0.056 * sin(2.0 * mj - 2.0 * ms + 21.0)
        + 0.042 * sin(3.0 * mj - 5.0 * ms + 21.0)
        - 0.036 * sin(mj - 2.0 * ms)
        + 0.022 * cos(mj - ms)
        + 0.023 * sin(2.0 * mj - 3.0 * ms + 52.0)
        - 0.016 * sin(mj - 5.0 * ms - 69.0);
    Perturbation {
        longitude,
        ..Default::default()
    }
}

pub fn saturn(g: &GiantAnomalies) -> Perturbation {
    let (mj, ms) = (g.jupiter, g.saturn);
    let longitude = 0.812 * sin(2.0 * mj - 5.0 * ms - 67.6)
        - 0.229 * cos(2.0 * mj - 4.0 * ms - 2.0)
        + 0.119 * sin(mj - 2.0 * ms - 3.0)
        + 0.046 * sin(2.0 * mj - 6.0 * ms - 69.0)
        + 0.014 * sin(mj - 3.0 * ms + 32.0);
    let latitude = -0.020 * cos(2.0 * mj - 4.0 * ms - 2.0) + 0.018 * sin(2.0 * mj - 6.0 * ms - 49.0);
    Perturbation {
        longitude,
        latitude,
        distance: 0.0,
    }
}

pub fn uranus(g: &GiantAnomalies) -> Perturbation {
    let (mj, ms, mu) = (g.jupiter, g.saturn, g.uranus);
    let longitude = 0.040 * sin(ms - 2.0 * mu + 6.0)
        + 0.035 * sin(ms - 3.0 * mu + 33.0)
        - 0.015 * sin(mj - mu + 20.0);
    Perturbation {
        longitude,
        ..Default::default()
    }
}
