use super::{LocationError, TimePeriod};
use serde::{Deserialize, Serialize};

/// travel time in minutes for each period of the closed period set. a record
/// missing any one of the four values is invalid, so lookup is total.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct TravelTimes {
    pub overall: f64,
    pub morning: f64,
    pub midday: f64,
    pub evening: f64,
}

impl TravelTimes {
    pub fn new(overall: f64, morning: f64, midday: f64, evening: f64) -> Result<Self, LocationError> {
        let times = TravelTimes {
            overall,
            morning,
            midday,
            evening,
        };
        for period in TimePeriod::ALL.iter() {
            let minutes = times.get(*period);
            if !minutes.is_finite() || minutes < 0.0 {
                return Err(LocationError::InvalidTravelTime {
                    period: *period,
                    minutes,
                });
            }
        }
        Ok(times)
    }

    /// grab the travel time in minutes for one period
    pub fn get(&self, period: TimePeriod) -> f64 {
        match period {
            TimePeriod::Overall => self.overall,
            TimePeriod::Morning => self.morning,
            TimePeriod::Midday => self.midday,
            TimePeriod::Evening => self.evening,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TravelTimes;
    use crate::model::location::TimePeriod;

    #[test]
    fn test_lookup_by_period() {
        let times = TravelTimes::new(6.97, 8.42, 6.5, 6.0).unwrap();
        assert_eq!(times.get(TimePeriod::Overall), 6.97);
        assert_eq!(times.get(TimePeriod::Morning), 8.42);
        assert_eq!(times.get(TimePeriod::Midday), 6.5);
        assert_eq!(times.get(TimePeriod::Evening), 6.0);
    }

    #[test]
    fn test_rejects_negative_minutes() {
        let result = TravelTimes::new(6.97, -1.0, 6.5, 6.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_finite_minutes() {
        let result = TravelTimes::new(6.97, 8.42, f64::NAN, 6.0);
        assert!(result.is_err());
    }
}
