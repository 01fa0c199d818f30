use super::AreaError;
use geo::{Coord, LineString, Point, Polygon};
use std::f64::consts::PI;

/// approximate meters per degree of latitude, also used to scale longitude
/// by the cosine of the center latitude
const METERS_PER_DEGREE: f64 = 111_300.0;

/// maximum radius before the equirectangular approximation drifts enough to
/// matter for display purposes
const APPROXIMATION_LIMIT_METERS: f64 = 5_000.0;

/// generates an n-point closed ring approximating a circle around `center`,
/// used to obscure an exact location while indicating its neighborhood.
///
/// this is an equirectangular approximation: latitude offsets are uniform and
/// longitude offsets are scaled by cos(latitude). it is not geodesically
/// exact and is only intended for radii of a few hundred meters.
pub fn obscuring_polygon(
    center: Point<f64>,
    radius_meters: f64,
    n_points: usize,
) -> Result<Polygon<f64>, AreaError> {
    if n_points < 3 {
        return Err(AreaError::TooFewPoints(n_points));
    }
    if !radius_meters.is_finite() || radius_meters <= 0.0 {
        return Err(AreaError::InvalidRadius(radius_meters));
    }
    if radius_meters > APPROXIMATION_LIMIT_METERS {
        log::warn!(
            "obscuring polygon radius {}m exceeds the {}m approximation limit, vertex distances will drift",
            radius_meters,
            APPROXIMATION_LIMIT_METERS
        );
    }

    let lat_scale = radius_meters / METERS_PER_DEGREE;
    let lng_scale = radius_meters / (METERS_PER_DEGREE * (center.y() * PI / 180.0).cos());

    let ring = (0..n_points)
        .map(|i| {
            let angle = 2.0 * PI * (i as f64) / (n_points as f64);
            Coord {
                x: center.x() + lng_scale * angle.sin(),
                y: center.y() + lat_scale * angle.cos(),
            }
        })
        .collect::<Vec<_>>();

    Ok(Polygon::new(LineString::from(ring), vec![]))
}
