#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use ephemeris::observer::Observer;
use ephemeris::position::BodyPosition;

pub fn oslo() -> Observer {
    Observer::new(59.91, 10.75, 2).unwrap()
}

pub fn longyearbyen(timezone: i32) -> Observer {
    Observer::new(78.0, 15.0, timezone).unwrap()
}

/// Compare a position with published (4-decimal) right ascension, declination and distance.
pub fn assert_position_close(
    actual: &BodyPosition,
    ra: f64,
    dec: f64,
    distance: f64,
    epsilon: f64,
) {
    assert_abs_diff_eq!(actual.right_ascension, ra, epsilon = epsilon);
    assert_abs_diff_eq!(actual.declination, dec, epsilon = epsilon);
    assert_abs_diff_eq!(actual.distance, distance, epsilon = epsilon);
}

/// Check the value ranges every position must satisfy.
pub fn assert_position_in_range(p: &BodyPosition) {
    assert!(
        (0.0..360.0).contains(&p.right_ascension),
        "{}: ra {}",
        p.body,
        p.right_ascension
    );
    assert!(
        (-90.0..=90.0).contains(&p.declination),
        "{}: dec {}",
        p.body,
        p.declination
    );
    assert!(p.distance > 0.0, "{}: distance {}", p.body, p.distance);
    assert!((0.0..24.0).contains(&p.transit), "{}: transit {}", p.body, p.transit);
    for event in [p.rise, p.set] {
        if let Some(h) = event.hours() {
            assert!((0.0..24.0).contains(&h), "{}: event {h}", p.body);
        }
    }
}
