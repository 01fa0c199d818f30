use geo::Point;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// great-circle distance in meters between two WGS84 points (x = longitude,
/// y = latitude), via the haversine formula.
pub fn haversine_meters(a: &Point<f64>, b: &Point<f64>) -> f64 {
    let lat_a = a.y().to_radians();
    let lat_b = b.y().to_radians();
    let d_lat = (b.y() - a.y()).to_radians();
    let d_lng = (b.x() - a.x()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::haversine_meters;
    use geo::Point;

    #[test]
    fn test_identical_points_have_zero_distance() {
        let p = Point::new(-90.46, 14.56);
        assert_eq!(haversine_meters(&p, &p), 0.0);
    }

    #[test]
    fn test_one_degree_of_latitude_is_about_111km() {
        let a = Point::new(-90.46, 14.0);
        let b = Point::new(-90.46, 15.0);
        let distance = haversine_meters(&a, &b);
        assert!((distance - 111_195.0).abs() < 200.0, "found {}", distance);
    }
}
