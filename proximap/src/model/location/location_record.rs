use super::{LocationError, TravelTimes};
use serde::{Deserialize, Serialize};

/// one residence or point of interest near the area of interest. optional
/// fields default to absent, never zero, so downstream rendering must treat
/// absence explicitly rather than conflating it with "no data".
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct LocationRecord {
    pub name: String,
    pub position: geo::Point<f64>,
    pub distance_km: f64,
    pub travel_times: TravelTimes,
    pub traffic_factor: Option<f64>,
    pub accessibility_score: Option<f64>,
    pub public_transport_score: Option<u32>,
}

impl LocationRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        latitude: f64,
        longitude: f64,
        distance_km: f64,
        travel_times: TravelTimes,
        traffic_factor: Option<f64>,
        accessibility_score: Option<f64>,
        public_transport_score: Option<u32>,
    ) -> Result<Self, LocationError> {
        if name.trim().is_empty() {
            return Err(LocationError::EmptyName);
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::InvalidLongitude(longitude));
        }
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(LocationError::InvalidDistance(distance_km));
        }
        if let Some(factor) = traffic_factor {
            if !factor.is_finite() || factor < 0.0 {
                return Err(LocationError::InvalidTrafficFactor(factor));
            }
        }
        if let Some(score) = accessibility_score {
            if !score.is_finite() || !(0.0..=5.0).contains(&score) {
                return Err(LocationError::InvalidAccessibilityScore(score));
            }
        }
        Ok(LocationRecord {
            name,
            position: geo::Point::new(longitude, latitude),
            distance_km,
            travel_times,
            traffic_factor,
            accessibility_score,
            public_transport_score,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.position.y()
    }

    pub fn longitude(&self) -> f64 {
        self.position.x()
    }
}
