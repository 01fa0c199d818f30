use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// selects which travel-time value drives the current map view. the set of
/// periods is closed: every location record carries all four values.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    Overall,
    Morning,
    Midday,
    Evening,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Overall,
        TimePeriod::Morning,
        TimePeriod::Midday,
        TimePeriod::Evening,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TimePeriod::Overall => "overall",
            TimePeriod::Morning => "morning",
            TimePeriod::Midday => "midday",
            TimePeriod::Evening => "evening",
        }
    }
}

impl Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for TimePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overall" => Ok(TimePeriod::Overall),
            "morning" => Ok(TimePeriod::Morning),
            "midday" => Ok(TimePeriod::Midday),
            "evening" => Ok(TimePeriod::Evening),
            other => Err(format!(
                "unknown time period '{}', expected one of: overall, morning, midday, evening",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimePeriod;
    use std::str::FromStr;

    #[test]
    fn test_from_str_round_trip() {
        for period in TimePeriod::ALL.iter() {
            let parsed = TimePeriod::from_str(period.key()).unwrap();
            assert_eq!(&parsed, period);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_key() {
        assert!(TimePeriod::from_str("rush_hour").is_err());
    }
}
