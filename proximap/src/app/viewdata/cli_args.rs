use crate::model::area::GeometryOutputFormat;
use crate::model::location::TimePeriod;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "proximap",
    about = "derives travel-time map view data for residential locations around an area of interest"
)]
pub struct CliArgs {
    /// delimited-text dataset to load; the builtin record set is used as a
    /// fallback when absent or unreadable
    #[arg(short, long)]
    pub file: Option<String>,

    /// time period driving the view: overall, morning, midday, or evening
    #[arg(short, long, default_value = "overall")]
    pub period: TimePeriod,

    /// area-of-interest center as "lat,lng"; when set, an obscuring polygon
    /// is included in the output
    #[arg(long)]
    pub center: Option<String>,

    /// obscuring polygon radius in meters
    #[arg(long, default_value_t = 500.0)]
    pub radius_meters: f64,

    /// number of vertices in the obscuring polygon
    #[arg(long, default_value_t = 24)]
    pub polygon_points: usize,

    /// serialization format for the obscuring polygon
    #[arg(long, default_value = "geojson")]
    pub polygon_format: GeometryOutputFormat,

    /// output path for the view document; stdout when absent
    #[arg(short, long)]
    pub output: Option<String>,
}
