pub mod dataset;
pub mod location_error;
pub mod location_record;
pub mod time_period;
pub mod travel_times;

pub use dataset::Dataset;
pub use location_error::LocationError;
pub use location_record::LocationRecord;
pub use time_period::TimePeriod;
pub use travel_times::TravelTimes;
