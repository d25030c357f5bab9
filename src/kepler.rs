use crate::constants::{Degree, DEGRAD, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE, RADEG};
use crate::ephem_errors::EphemError;

/// Solve Kepler's equation `M = E − e·sin(E)` for the eccentric anomaly, in degrees.
///
/// The first guess is the second-order series
/// `E0 = M + (180/π)·e·sin(M)·(1 + e·cos(M))`, refined with Newton steps
/// `E1 = E0 − (E0 − (180/π)·e·sin(E0) − M) / (1 − e·cos(E0))`
/// until two successive iterates differ by at most [`KEPLER_TOLERANCE`] degrees.
///
/// Arguments
/// -----------------
/// * `mean_anomaly`: mean anomaly M in degrees (any range)
/// * `eccentricity`: orbital eccentricity, `0 ≤ e < 1`
///
/// Return
/// ----------
/// * The eccentric anomaly E in degrees, on the same turn as `mean_anomaly`.
///
/// Errors
/// ----------
/// * [`EphemError::NonFiniteInput`] if an argument is NaN or infinite.
/// * [`EphemError::InvalidEccentricity`] if `e` is outside `[0, 1)`.
/// * [`EphemError::KeplerNoConvergence`] if the tolerance is not met within
///   [`KEPLER_MAX_ITERATIONS`] steps.
pub fn solve_kepler(mean_anomaly: Degree, eccentricity: f64) -> Result<Degree, EphemError> {
    if !mean_anomaly.is_finite() {
        return Err(EphemError::NonFiniteInput("mean anomaly"));
    }
    if !eccentricity.is_finite() {
        return Err(EphemError::NonFiniteInput("eccentricity"));
    }
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(EphemError::InvalidEccentricity(eccentricity));
    }

    let e = eccentricity;
    let m_rad = mean_anomaly * RADEG;
    let mut e0 = mean_anomaly + DEGRAD * e * m_rad.sin() * (1.0 + e * m_rad.cos());

    for _ in 0..KEPLER_MAX_ITERATIONS {
        let e0_rad = e0 * RADEG;
        let e1 = e0 - (e0 - DEGRAD * e * e0_rad.sin() - mean_anomaly) / (1.0 - e * e0_rad.cos());
        if (e1 - e0).abs() <= KEPLER_TOLERANCE {
            return Ok(e1);
        }
        e0 = e1;
    }

    Err(EphemError::KeplerNoConvergence {
        mean_anomaly,
        eccentricity,
    })
}

/// Residual `E − (180/π)·e·sin(E) − M` of Kepler's equation, in degrees.
pub fn kepler_residual(eccentric_anomaly: Degree, mean_anomaly: Degree, eccentricity: f64) -> f64 {
    eccentric_anomaly - DEGRAD * eccentricity * (eccentric_anomaly * RADEG).sin() - mean_anomaly
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_circular_orbit() {
        assert_eq!(solve_kepler(123.4, 0.0).unwrap(), 123.4);
    }

    #[test]
    fn test_solve_kepler_mars() {
        // Mars on 2024-06-21
        let m = (18.6021 + 0.52398 * 8939.0_f64).rem_euclid(360.0);
        let e = 0.093405 + 2.516e-9 * 8939.0;
        let ecc_anomaly = solve_kepler(m, e).unwrap();
        assert!(kepler_residual(ecc_anomaly, m, e).abs() < 1e-6);
        assert!((ecc_anomaly - m).abs() <= DEGRAD * e);
    }

    #[test]
    fn test_invalid_eccentricity() {
        assert_eq!(
            solve_kepler(10.0, 1.0),
            Err(EphemError::InvalidEccentricity(1.0))
        );
        assert_eq!(
            solve_kepler(10.0, -0.1),
            Err(EphemError::InvalidEccentricity(-0.1))
        );
        assert_eq!(
            solve_kepler(f64::NAN, 0.1),
            Err(EphemError::NonFiniteInput("mean anomaly"))
        );
    }

    #[test]
    fn test_random_convergence() {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

        // Mean anomalies are not reduced before the call, so sample forty turns either way.
        for _ in 0..10_000 {
            let m = rng.random_range(-14_600.0..14_600.0);
            let e = rng.random_range(0.0..0.9);
            let ecc_anomaly = solve_kepler(m, e).unwrap();
            assert!(
                kepler_residual(ecc_anomaly, m, e).abs() < 1e-6,
                "M = {m}, e = {e}, E = {ecc_anomaly}"
            );
        }
    }
}
