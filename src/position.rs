//! # Position pipeline
//!
//! Computes the topocentric equatorial position of a body on a given day.
//!
//! ## Steps
//!
//! 1. Evaluate the mean elements of the body and solve Kepler's equation.
//! 2. Position in the orbital plane, true anomaly `v` and radius `r`.
//! 3. Rotate into heliocentric (geocentric for the Moon) ecliptic coordinates:
//!    `Rz(N) · Rx(i) · Rz(v + w) · (r, 0, 0)`.
//! 4. Convert to ecliptic longitude, latitude and distance and add the periodic
//!    perturbations.
//! 5. Rebuild the Moon's rectangular vector from its corrected longitude and
//!    latitude. The other bodies are shifted to the geocenter by adding the
//!    Sun's ecliptic position to their heliocentric vector.
//! 6. Rotate into the equatorial frame by the obliquity of the ecliptic, then
//!    read right ascension and declination.
//! 7. Correct for the diurnal parallax of the observer.
//!
//! The Sun is computed first: its [`SunContext`] supplies the geocentric shift
//! (step 5), the solar arguments of the lunar perturbations and the local
//! sidereal time. It is built once per day and shared by reference with every
//! other body.

use log::{trace, warn};
use nalgebra::{Rotation3, Vector3};
use serde::Serialize;

use crate::constants::{
    AstronomicalUnit, Degree, Hour, ARCSEC_PER_DEGREE, DEGRAD, DEGREES_PER_HOUR, RADEG,
    SOLAR_PARALLAX,
};
use crate::conversion::{dec_dms, normalize_degrees, normalize_hours, ra_hms, round4};
use crate::ephem_errors::EphemError;
use crate::kepler::solve_kepler;
use crate::observer::Observer;
use crate::orbital_elements::{Body, OrbitalElements};
use crate::perturbation::{perturbation, GiantAnomalies};
use crate::rise_set::{rise_transit_set, serialize_hms, EventTime};
use crate::time::DayNumber;

/// Below this value of `|sin g|` the parallax in declination uses its limit form.
const SIN_G_EPSILON: f64 = 1e-12;

/// Apparent geocentric orbit of the Sun on one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunContext {
    /// Ecliptic rectangular position of the Sun, AU.
    pub xs: AstronomicalUnit,
    pub ys: AstronomicalUnit,
    /// Mean anomaly Ms, degrees `[0, 360)`.
    pub mean_anomaly: Degree,
    /// Mean longitude Ls = w + Ms, degrees `[0, 360)`.
    pub mean_longitude: Degree,
    /// Earth–Sun distance, AU.
    pub distance: AstronomicalUnit,
}

impl SunContext {
    pub fn compute(d: DayNumber) -> Result<Self, EphemError> {
        let el = Body::Sun.elements_at(d);
        let (v, r) = orbital_plane(&el)?;
        let true_longitude = (v + el.perihelion_argument) * RADEG;

        Ok(SunContext {
            xs: r * true_longitude.cos(),
            ys: r * true_longitude.sin(),
            mean_anomaly: el.mean_anomaly,
            mean_longitude: normalize_degrees(el.perihelion_argument + el.mean_anomaly),
            distance: r,
        })
    }

    /// Greenwich mean sidereal time at 0h UT, hours.
    pub fn gmst0(&self) -> Hour {
        normalize_hours((self.mean_longitude + 180.0) / DEGREES_PER_HOUR)
    }
}

/// Everything shared by the bodies computed for one day and one site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpochContext {
    pub day: DayNumber,
    /// Obliquity of the ecliptic, degrees.
    pub obliquity: Degree,
    pub sun: SunContext,
    pub giants: GiantAnomalies,
    /// Local sidereal time at 0h UT, hours. Not reduced modulo 24.
    pub local_sidereal_time: Hour,
}

impl EpochContext {
    pub fn new(day: DayNumber, observer: &Observer) -> Result<Self, EphemError> {
        if uses_parallax_limit(observer) {
            warn!(
                "observer on the equator (latitude {}), declination parallax uses its limit form",
                observer.latitude()
            );
        }
        let sun = SunContext::compute(day)?;
        Ok(EpochContext {
            day,
            obliquity: day.obliquity(),
            sun,
            giants: GiantAnomalies::at(day),
            local_sidereal_time: sun.gmst0() + observer.longitude() / DEGREES_PER_HOUR,
        })
    }
}

/// Topocentric position and daily events of one body.
///
/// Right ascension and declination are rounded to four decimals, as is the
/// distance (AU, Earth radii for the Moon).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyPosition {
    pub body: Body,
    pub right_ascension: Degree,
    pub declination: Degree,
    pub distance: f64,
    pub ra_hms: String,
    pub dec_dms: String,
    pub rise: EventTime,
    #[serde(serialize_with = "serialize_hms")]
    pub transit: Hour,
    pub set: EventTime,
}

impl BodyPosition {
    pub fn new(
        body: Body,
        right_ascension: Degree,
        declination: Degree,
        distance: f64,
        rise: EventTime,
        transit: Hour,
        set: EventTime,
    ) -> Self {
        BodyPosition {
            body,
            right_ascension,
            declination,
            distance,
            ra_hms: ra_hms(right_ascension),
            dec_dms: dec_dms(declination),
            rise,
            transit,
            set,
        }
    }
}

/// True anomaly (degrees) and radius of the body in its orbital plane.
fn orbital_plane(el: &OrbitalElements) -> Result<(Degree, f64), EphemError> {
    let e = el.eccentricity;
    let ecc_anomaly = solve_kepler(el.mean_anomaly, e)? * RADEG;
    let x = el.semi_major_axis * (ecc_anomaly.cos() - e);
    let y = el.semi_major_axis * (1.0 - e * e).sqrt() * ecc_anomaly.sin();
    Ok((y.atan2(x) * DEGRAD, x.hypot(y)))
}

/// Rectangular ecliptic position from the orbital elements, before perturbation.
fn ecliptic_position(el: &OrbitalElements) -> Result<Vector3<f64>, EphemError> {
    let (v, r) = orbital_plane(el)?;
    let orientation = Rotation3::from_axis_angle(&Vector3::z_axis(), el.ascending_node * RADEG)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), el.inclination * RADEG)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), (v + el.perihelion_argument) * RADEG);
    Ok(orientation * Vector3::new(r, 0.0, 0.0))
}

fn spherical(v: &Vector3<f64>) -> (Degree, Degree, f64) {
    let lon = normalize_degrees(v.y.atan2(v.x) * DEGRAD);
    let lat = v.z.atan2(v.x.hypot(v.y)) * DEGRAD;
    (lon, lat, v.norm())
}

fn rectangular(lon: Degree, lat: Degree, r: f64) -> Vector3<f64> {
    let (lon, lat) = (lon * RADEG, lat * RADEG);
    Vector3::new(
        r * lon.cos() * lat.cos(),
        r * lon.sin() * lat.cos(),
        r * lat.sin(),
    )
}

/// Horizontal parallax of a body at distance `r`, degrees.
fn parallax(body: Body, r: f64) -> Degree {
    if body == Body::Moon {
        (1.0 / r).asin() * DEGRAD
    } else {
        SOLAR_PARALLAX / ARCSEC_PER_DEGREE / r
    }
}

/// `true` when `sin g` vanishes for every hour angle, i.e. the geocentric
/// latitude of the observer is zero.
pub(crate) fn uses_parallax_limit(observer: &Observer) -> bool {
    (observer.geocentric_latitude() * RADEG).sin().abs() < SIN_G_EPSILON
}

/// Shift geocentric equatorial coordinates to the observer's position on the surface.
///
/// Arguments
/// -----------------
/// * `ra`, `dec`: geocentric right ascension and declination, degrees
/// * `par`: horizontal parallax, degrees
/// * `local_sidereal_time`: hours
/// * `observer`: the site
///
/// Return
/// ----------
/// * Topocentric `(ra, dec)` in degrees.
///
/// Note
/// ----------
/// The declination term divides by `sin g`, with
/// `g = atan(tan φ' / cos HA)`. For an observer on the equator `g = 0` and the
/// quotient `sin φ' / sin g` is replaced by its limit `cos HA`.
pub fn topocentric(
    ra: Degree,
    dec: Degree,
    par: Degree,
    local_sidereal_time: Hour,
    observer: &Observer,
) -> (Degree, Degree) {
    let gclat = observer.geocentric_latitude() * RADEG;
    let rho = observer.geocentric_radius();
    let ha = normalize_degrees(local_sidereal_time * DEGREES_PER_HOUR - ra) * RADEG;
    let g = (gclat.tan() / ha.cos()).atan();
    let dec_rad = dec * RADEG;

    let top_ra = ra - par * rho * gclat.cos() * ha.sin() / dec_rad.cos();

    let ratio = if g.sin().abs() < SIN_G_EPSILON {
        ha.cos()
    } else {
        gclat.sin() / g.sin()
    };
    let top_dec = dec - par * rho * ratio * (g - dec_rad).sin();

    (top_ra, top_dec)
}

/// Compute the position, distance and rise/transit/set of `body`.
///
/// Errors
/// ----------
/// * Propagates [`EphemError::KeplerNoConvergence`] from the Kepler solver.
pub fn compute_body(
    body: Body,
    ctx: &EpochContext,
    observer: &Observer,
) -> Result<BodyPosition, EphemError> {
    let (ecliptic, radius) = if body == Body::Sun {
        (Vector3::new(ctx.sun.xs, ctx.sun.ys, 0.0), ctx.sun.distance)
    } else {
        let el = body.elements_at(ctx.day);
        let heliocentric = ecliptic_position(&el)?;
        let (lon, lat, r) = spherical(&heliocentric);
        let p = perturbation(
            body,
            &el,
            ctx.sun.mean_anomaly,
            ctx.sun.mean_longitude,
            &ctx.giants,
        );
        let r = r + p.distance;
        let v = if body == Body::Moon {
            rectangular(lon + p.longitude, lat + p.latitude, r)
        } else {
            // The planets move to the geocenter from the unperturbed vector.
            heliocentric + Vector3::new(ctx.sun.xs, ctx.sun.ys, 0.0)
        };
        (v, r)
    };

    let equatorial = Rotation3::from_axis_angle(&Vector3::x_axis(), ctx.obliquity * RADEG) * ecliptic;
    let ra = normalize_degrees(equatorial.y.atan2(equatorial.x) * DEGRAD);
    let dec = equatorial.z.atan2(equatorial.x.hypot(equatorial.y)) * DEGRAD;

    let (top_ra, top_dec) = topocentric(
        ra,
        dec,
        parallax(body, radius),
        ctx.local_sidereal_time,
        observer,
    );
    // Rounding can land on 360, so normalize again afterwards.
    let ra = normalize_degrees(round4(normalize_degrees(top_ra)));
    let dec = round4(top_dec.clamp(-90.0, 90.0));
    let distance = round4(equatorial.norm());

    let events = rise_transit_set(ra, dec, ctx.sun.mean_longitude, observer);
    trace!("{body}: ra {ra}, dec {dec}, distance {distance}, {events:?}");

    Ok(BodyPosition::new(
        body,
        ra,
        dec,
        distance,
        events.rise,
        events.transit,
        events.set,
    ))
}
