use serde::Serialize;

use crate::constants::{Degree, Hour, DEGRAD, DEGREES_PER_HOUR, RADEG};
use crate::conversion::normalize_degrees;

/// Altitude above the horizon and azimuth of a body, in degrees.
///
/// The azimuth is counted from north through east, in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalCoordinates {
    pub altitude: Degree,
    pub azimuth: Degree,
}

/// Convert equatorial coordinates to the horizontal frame of an observer.
///
/// Arguments
/// -----------------
/// * `ra`, `dec`: right ascension and declination, degrees
/// * `sidereal_time`: local sidereal time, hours
/// * `latitude`: observer latitude, degrees
///
/// Return
/// ----------
/// * The altitude in `[−90, 90]` and the azimuth in `[0, 360)`.
pub fn alt_az(ra: Degree, dec: Degree, sidereal_time: Hour, latitude: Degree) -> HorizontalCoordinates {
    let ha = (sidereal_time - ra / DEGREES_PER_HOUR) * DEGREES_PER_HOUR * RADEG;
    let dec = dec * RADEG;
    let lat = latitude * RADEG;

    let x = ha.cos() * dec.cos();
    let y = ha.sin() * dec.cos();
    let z = dec.sin();

    let x_hor = x * lat.sin() - z * lat.cos();
    let z_hor = (x * lat.cos() + z * lat.sin()).clamp(-1.0, 1.0);

    HorizontalCoordinates {
        altitude: z_hor.asin() * DEGRAD,
        azimuth: normalize_degrees(y.atan2(x_hor) * DEGRAD + 180.0),
    }
}
