use super::{ColorBucket, ViewDatum};
use crate::model::location::{Dataset, LocationRecord, TimePeriod};
use itertools::Itertools;

/// glyph repeated once per public transport connection in popup text
const TRANSIT_GLYPH: &str = "🚌";

/// derives the full view layer for one selected period. pure function of its
/// two inputs: re-run wholesale over the dataset on every period switch, with
/// no incremental diffing. datasets are tens of records, so O(n)
/// recomputation is fine.
pub fn project(dataset: &Dataset, period: TimePeriod) -> Vec<ViewDatum> {
    dataset
        .iter()
        .map(|record| project_record(record, period))
        .collect_vec()
}

fn project_record(record: &LocationRecord, period: TimePeriod) -> ViewDatum {
    let minutes = record.travel_times.get(period);
    // marker color reflects congestion-adjusted severity; the label and heat
    // intensity stay on the raw travel time
    let adjusted = minutes * record.traffic_factor.unwrap_or(1.0);
    ViewDatum {
        position: record.position,
        color_bucket: ColorBucket::from_minutes(adjusted),
        rounded_label: minutes.round() as u32,
        heat_weight: minutes,
        popup_text: popup_text(record, minutes),
    }
}

/// composes the marker popup description: name, travel time at one decimal,
/// distance as given, then the optional attributes only when present.
fn popup_text(record: &LocationRecord, minutes: f64) -> String {
    let mut parts = vec![format!(
        "{}: {:.1} min, {} km",
        record.name, minutes, record.distance_km
    )];
    if let Some(factor) = record.traffic_factor {
        parts.push(format!("traffic x{}", factor));
    }
    if let Some(score) = record.accessibility_score {
        parts.push(format!("access {}/5", score));
    }
    if let Some(count) = record.public_transport_score {
        if count > 0 {
            parts.push(TRANSIT_GLYPH.repeat(count as usize));
        }
    }
    parts.iter().join(" | ")
}
