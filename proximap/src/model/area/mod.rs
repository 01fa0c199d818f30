pub mod area_error;
pub mod area_polygon;
pub mod geometry_output_format;

pub use area_error::AreaError;
pub use geometry_output_format::GeometryOutputFormat;
