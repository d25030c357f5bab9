use thiserror::Error;

use crate::constants::Degree;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemError {
    #[error("Invalid calendar date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(Degree),

    #[error("Longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(Degree),

    #[error("Timezone offset out of range [-12, 14]: {0}")]
    TimezoneOutOfRange(i32),

    #[error("Non-finite value supplied for {0}")]
    NonFiniteInput(&'static str),

    #[error("Eccentricity must lie in [0, 1): {0}")]
    InvalidEccentricity(f64),

    #[error(
        "Kepler's equation did not converge (mean anomaly {mean_anomaly}°, eccentricity {eccentricity})"
    )]
    KeplerNoConvergence {
        mean_anomaly: Degree,
        eccentricity: f64,
    },

    #[error("Unknown solar system body: {0}")]
    UnknownBody(String),

    #[error("Forecast length must be between 1 and 366 days: {0}")]
    InvalidForecastLength(u32),
}

