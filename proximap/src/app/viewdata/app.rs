use super::{CliArgs, MapViewState};
use crate::model::area::area_polygon;
use crate::model::load::DatasetLoader;
use geo::Point;
use std::fs;
use std::io::Write;

/// loads the dataset through the fallback cascade, projects the view for the
/// selected period, and writes a single JSON document for the map renderer.
pub fn run(args: &CliArgs) -> Result<(), String> {
    let loader = DatasetLoader::standard(args.file.clone());
    let state = MapViewState::new(loader.load(), args.period);
    let view = state.view();
    log::info!(
        "projected {} view data for period '{}'",
        view.len(),
        state.period()
    );

    let polygon = match &args.center {
        None => None,
        Some(center_str) => {
            let center = parse_center(center_str)?;
            let polygon =
                area_polygon::obscuring_polygon(center, args.radius_meters, args.polygon_points)
                    .map_err(|e| format!("failure building area-of-interest polygon: {}", e))?;
            let serialized = args
                .polygon_format
                .serialize_polygon(&polygon)
                .map_err(|e| format!("failure serializing area-of-interest polygon: {}", e))?;
            Some(serialized)
        }
    };

    let document = serde_json::json!({
        "period": state.period().key(),
        "count": view.len(),
        "view": view,
        "area_of_interest": polygon,
    });
    let rendered = serde_json::to_string_pretty(&document)
        .map_err(|e| format!("failure serializing view document: {}", e))?;

    match &args.output {
        None => {
            let mut stdout = std::io::stdout();
            writeln!(stdout, "{}", rendered).map_err(|e| format!("failure writing stdout: {}", e))
        }
        Some(path) => {
            fs::write(path, rendered).map_err(|e| format!("failure writing '{}': {}", path, e))?;
            log::info!("wrote view document to '{}'", path);
            Ok(())
        }
    }
}

/// parses an area-of-interest center supplied as "lat,lng"
fn parse_center(center: &str) -> Result<Point<f64>, String> {
    let parts = center.split(',').map(str::trim).collect::<Vec<_>>();
    match parts.as_slice() {
        [lat_str, lng_str] => {
            let lat = lat_str
                .parse::<f64>()
                .map_err(|_| format!("center latitude '{}' is not numeric", lat_str))?;
            let lng = lng_str
                .parse::<f64>()
                .map_err(|_| format!("center longitude '{}' is not numeric", lng_str))?;
            if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
                return Err(format!("center latitude {} outside valid range", lat));
            }
            if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
                return Err(format!("center longitude {} outside valid range", lng));
            }
            Ok(Point::new(lng, lat))
        }
        _ => Err(format!(
            "expected center as 'lat,lng', found '{}'",
            center
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_center;

    #[test]
    fn test_parse_center_accepts_lat_lng_pair() {
        let point = parse_center("14.56, -90.46").unwrap();
        assert_eq!(point.y(), 14.56);
        assert_eq!(point.x(), -90.46);
    }

    #[test]
    fn test_parse_center_rejects_malformed_input() {
        assert!(parse_center("14.56").is_err());
        assert!(parse_center("abc,-90.46").is_err());
        assert!(parse_center("91.0,-90.46").is_err());
    }
}
