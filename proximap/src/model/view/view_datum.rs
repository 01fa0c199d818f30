use super::ColorBucket;
use serde::{Deserialize, Serialize};

/// per-record visual attributes derived for one selected time period. these
/// are recomputed on demand at every period switch and never cached; the map
/// renderer consumes them as marker, label, and heat-layer inputs.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ViewDatum {
    /// raw coordinates passed through for the renderer
    pub position: geo::Point<f64>,
    pub color_bucket: ColorBucket,
    /// nearest-integer minutes for compact on-marker display
    pub rounded_label: u32,
    /// the raw, unrounded travel time used directly as heatmap intensity
    pub heat_weight: f64,
    pub popup_text: String,
}
