use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// discrete travel-time severity class used to pick a marker color. a step
/// function with two break points, inclusive on the lower side: minutes of
/// exactly 5.0 are `Low` and exactly 10.0 are `Mid`.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColorBucket {
    Low,
    Mid,
    High,
}

impl ColorBucket {
    pub fn from_minutes(minutes: f64) -> ColorBucket {
        if minutes <= 5.0 {
            ColorBucket::Low
        } else if minutes <= 10.0 {
            ColorBucket::Mid
        } else {
            ColorBucket::High
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ColorBucket::Low => "low",
            ColorBucket::Mid => "mid",
            ColorBucket::High => "high",
        }
    }
}

impl Display for ColorBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::ColorBucket;

    #[test]
    fn test_boundaries_are_inclusive_below() {
        assert_eq!(ColorBucket::from_minutes(5.0), ColorBucket::Low);
        assert_eq!(ColorBucket::from_minutes(5.01), ColorBucket::Mid);
        assert_eq!(ColorBucket::from_minutes(10.0), ColorBucket::Mid);
        assert_eq!(ColorBucket::from_minutes(10.01), ColorBucket::High);
    }

    #[test]
    fn test_zero_minutes_is_low() {
        assert_eq!(ColorBucket::from_minutes(0.0), ColorBucket::Low);
    }
}
