use crate::model::location::{Dataset, LocationRecord, TravelTimes};
use geo::Point;

/// the fixed literal dataset used when every configured source has failed.
/// this is the floor of the fallback cascade: the host always has something
/// to render. constructed directly from known-valid literals, so no
/// validation pass is needed here.
pub fn dataset() -> Dataset {
    let records = vec![
        record(
            "Apartamentos Monet",
            14.565411,
            -90.442502,
            3.30,
            (6.97, 8.42, 6.50, 6.00),
            Some(1.21),
            Some(3.5),
            Some(2),
        ),
        record(
            "Residencial Los Eucaliptos",
            14.571203,
            -90.451087,
            2.10,
            (4.80, 6.10, 5.20, 5.40),
            Some(1.27),
            Some(4.0),
            Some(3),
        ),
        record(
            "Condominio Vista Hermosa",
            14.559870,
            -90.435611,
            4.60,
            (9.50, 12.80, 10.10, 11.30),
            Some(1.35),
            Some(2.5),
            Some(1),
        ),
        record(
            "Torre Altavista",
            14.552344,
            -90.446120,
            5.20,
            (11.40, 14.90, 12.00, 13.60),
            Some(1.31),
            Some(3.0),
            Some(0),
        ),
    ];
    Dataset::new(records)
}

#[allow(clippy::too_many_arguments)]
fn record(
    name: &str,
    lat: f64,
    lng: f64,
    distance_km: f64,
    (overall, morning, midday, evening): (f64, f64, f64, f64),
    traffic_factor: Option<f64>,
    accessibility_score: Option<f64>,
    public_transport_score: Option<u32>,
) -> LocationRecord {
    LocationRecord {
        name: String::from(name),
        position: Point::new(lng, lat),
        distance_km,
        travel_times: TravelTimes {
            overall,
            morning,
            midday,
            evening,
        },
        traffic_factor,
        accessibility_score,
        public_transport_score,
    }
}
