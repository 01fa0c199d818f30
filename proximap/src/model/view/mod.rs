pub mod color_bucket;
pub mod view_datum;
pub mod view_ops;

pub use color_bucket::ColorBucket;
pub use view_datum::ViewDatum;
