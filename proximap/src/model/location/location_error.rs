use super::TimePeriod;

#[derive(thiserror::Error, Debug)]
pub enum LocationError {
    #[error("location name is empty")]
    EmptyName,
    #[error("latitude {0} outside valid range [-90, 90] or non-finite")]
    InvalidLatitude(f64),
    #[error("longitude {0} outside valid range [-180, 180] or non-finite")]
    InvalidLongitude(f64),
    #[error("distance {0} must be a non-negative finite number of kilometers")]
    InvalidDistance(f64),
    #[error("travel time for period '{period}' must be non-negative and finite, found {minutes}")]
    InvalidTravelTime { period: TimePeriod, minutes: f64 },
    #[error("traffic factor {0} must be non-negative and finite")]
    InvalidTrafficFactor(f64),
    #[error("accessibility score {0} outside valid range [0, 5]")]
    InvalidAccessibilityScore(f64),
}
