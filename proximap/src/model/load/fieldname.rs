//! canonical column names for the delimited location dataset. the 11-column
//! schema is canonical; a 10-column variant without [`PUBLIC_TRANSPORT`] is
//! accepted as a compatibility mode.

pub const NAME: &str = "name";
pub const LAT: &str = "lat";
pub const LNG: &str = "lng";

/// straight-line or road distance to the reference point, in kilometers
pub const DISTANCE_KM: &str = "distance_km";

pub const OVERALL_MIN: &str = "overall_min";
pub const MORNING_MIN: &str = "morning_min";
pub const MIDDAY_MIN: &str = "midday_min";
pub const EVENING_MIN: &str = "evening_min";

/// optional congestion multiplier applied by upstream data producers
pub const TRAFFIC_FACTOR: &str = "traffic_factor";

/// optional walkability/accessibility score in the range [0, 5]
pub const ACCESSIBILITY: &str = "accessibility";

/// optional count of nearby public transport connections
pub const PUBLIC_TRANSPORT: &str = "public_transport";

/// columns every schema variant must declare in its header row
pub const REQUIRED: [&str; 10] = [
    NAME,
    LAT,
    LNG,
    DISTANCE_KM,
    OVERALL_MIN,
    MORNING_MIN,
    MIDDAY_MIN,
    EVENING_MIN,
    TRAFFIC_FACTOR,
    ACCESSIBILITY,
];
