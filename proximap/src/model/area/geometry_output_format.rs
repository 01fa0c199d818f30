use super::AreaError;
use geo::Polygon;
use serde::{Deserialize, Serialize};
use wkt::ToWkt;

/// renderer handoff format for area-of-interest geometry
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GeometryOutputFormat {
    Wkt,
    GeoJson,
}

impl GeometryOutputFormat {
    pub fn serialize_polygon(&self, polygon: &Polygon<f64>) -> Result<String, AreaError> {
        match self {
            GeometryOutputFormat::Wkt => Ok(polygon.wkt_string()),
            GeometryOutputFormat::GeoJson => {
                let geometry = geojson::Geometry::new(geojson::Value::from(polygon));
                let feature = geojson::Feature {
                    bbox: None,
                    geometry: Some(geometry),
                    id: None,
                    properties: None,
                    foreign_members: None,
                };
                let result = serde_json::to_value(feature)?;
                Ok(result.to_string())
            }
        }
    }
}

impl std::fmt::Display for GeometryOutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryOutputFormat::Wkt => write!(f, "wkt"),
            GeometryOutputFormat::GeoJson => write!(f, "geojson"),
        }
    }
}

impl std::str::FromStr for GeometryOutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wkt" => Ok(GeometryOutputFormat::Wkt),
            "geojson" => Ok(GeometryOutputFormat::GeoJson),
            other => Err(format!(
                "unknown geometry output format '{}', expected 'wkt' or 'geojson'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GeometryOutputFormat;
    use crate::model::area::area_polygon::obscuring_polygon;
    use geo::Point;

    #[test]
    fn test_wkt_output_is_a_polygon() {
        let polygon = obscuring_polygon(Point::new(-90.46, 14.56), 500.0, 8).unwrap();
        let wkt = GeometryOutputFormat::Wkt.serialize_polygon(&polygon).unwrap();
        assert!(wkt.starts_with("POLYGON"));
    }

    #[test]
    fn test_geojson_output_is_a_feature() {
        let polygon = obscuring_polygon(Point::new(-90.46, 14.56), 500.0, 8).unwrap();
        let out = GeometryOutputFormat::GeoJson
            .serialize_polygon(&polygon)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "Polygon");
    }
}
