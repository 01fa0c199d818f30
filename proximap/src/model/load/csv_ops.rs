use super::fieldname;
use super::load_error::LoadError;
use crate::model::location::{Dataset, LocationRecord, TravelTimes};
use csv::StringRecord;
use std::collections::HashMap;
use std::io::Read;

/// column indices resolved from the header row. the schema is matched by
/// column name, not position, so a reordered source file still loads; a
/// header missing a required column fails the whole source before any row
/// is read.
struct ColumnIndices {
    name: usize,
    lat: usize,
    lng: usize,
    distance_km: usize,
    overall_min: usize,
    morning_min: usize,
    midday_min: usize,
    evening_min: usize,
    traffic_factor: usize,
    accessibility: usize,
    /// absent in the 10-column compatibility schema
    public_transport: Option<usize>,
}

/// reads an entire delimited-text dataset from a reader. row-level problems
/// (short rows, non-numeric coordinates, validation failures) are logged and
/// skip only that row; header-level problems abandon the whole source.
pub fn read_dataset<R: Read>(reader: R, source_name: &str) -> Result<Dataset, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header_record = csv_reader.headers()?.clone();
    let columns = resolve_columns(&header_record)?;

    let mut records: Vec<LocationRecord> = vec![];
    for (idx, row) in csv_reader.records().enumerate() {
        // header is line 1, first data row is line 2
        let row_number = idx + 2;
        let record = match row {
            Ok(r) => r,
            Err(e) => {
                log::warn!("skipping row {} of '{}': {}", row_number, source_name, e);
                continue;
            }
        };
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        match parse_row(&record, &columns, row_number) {
            Ok(location) => records.push(location),
            Err(e) => {
                log::warn!("skipping row {} of '{}': {}", row_number, source_name, e);
            }
        }
    }

    Ok(Dataset::new(records))
}

fn resolve_columns(headers: &StringRecord) -> Result<ColumnIndices, LoadError> {
    let lookup: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, col)| (col, idx))
        .collect::<HashMap<_, _>>();
    let require = |column: &str| -> Result<usize, LoadError> {
        lookup
            .get(column)
            .copied()
            .ok_or_else(|| LoadError::MissingColumn(String::from(column)))
    };
    Ok(ColumnIndices {
        name: require(fieldname::NAME)?,
        lat: require(fieldname::LAT)?,
        lng: require(fieldname::LNG)?,
        distance_km: require(fieldname::DISTANCE_KM)?,
        overall_min: require(fieldname::OVERALL_MIN)?,
        morning_min: require(fieldname::MORNING_MIN)?,
        midday_min: require(fieldname::MIDDAY_MIN)?,
        evening_min: require(fieldname::EVENING_MIN)?,
        traffic_factor: require(fieldname::TRAFFIC_FACTOR)?,
        accessibility: require(fieldname::ACCESSIBILITY)?,
        public_transport: lookup.get(fieldname::PUBLIC_TRANSPORT).copied(),
    })
}

fn parse_row(
    record: &StringRecord,
    columns: &ColumnIndices,
    row: usize,
) -> Result<LocationRecord, LoadError> {
    let name = get_field(record, columns.name, fieldname::NAME, row)?;
    let lat = required_f64(record, columns.lat, fieldname::LAT, row)?;
    let lng = required_f64(record, columns.lng, fieldname::LNG, row)?;
    let distance_km = required_f64(record, columns.distance_km, fieldname::DISTANCE_KM, row)?;
    let travel_times = TravelTimes::new(
        required_f64(record, columns.overall_min, fieldname::OVERALL_MIN, row)?,
        required_f64(record, columns.morning_min, fieldname::MORNING_MIN, row)?,
        required_f64(record, columns.midday_min, fieldname::MIDDAY_MIN, row)?,
        required_f64(record, columns.evening_min, fieldname::EVENING_MIN, row)?,
    )
    .map_err(|source| LoadError::Validation { row, source })?;
    let traffic_factor =
        optional_f64(record, columns.traffic_factor, fieldname::TRAFFIC_FACTOR, row)?;
    let accessibility_score =
        optional_f64(record, columns.accessibility, fieldname::ACCESSIBILITY, row)?;
    let public_transport_score = match columns.public_transport {
        Some(idx) => optional_u32(record, idx, fieldname::PUBLIC_TRANSPORT, row)?,
        None => None,
    };

    LocationRecord::new(
        String::from(name),
        lat,
        lng,
        distance_km,
        travel_times,
        traffic_factor,
        accessibility_score,
        public_transport_score,
    )
    .map_err(|source| LoadError::Validation { row, source })
}

fn get_field<'a>(
    record: &'a StringRecord,
    idx: usize,
    column: &str,
    row: usize,
) -> Result<&'a str, LoadError> {
    record.get(idx).ok_or_else(|| LoadError::ShortRow {
        row,
        column: String::from(column),
    })
}

fn required_f64(
    record: &StringRecord,
    idx: usize,
    column: &str,
    row: usize,
) -> Result<f64, LoadError> {
    let field = get_field(record, idx, column, row)?;
    field.parse::<f64>().map_err(|_| LoadError::NonNumeric {
        row,
        column: String::from(column),
        value: String::from(field),
    })
}

fn optional_f64(
    record: &StringRecord,
    idx: usize,
    column: &str,
    row: usize,
) -> Result<Option<f64>, LoadError> {
    match record.get(idx) {
        None => Ok(None),
        Some("") => Ok(None),
        Some(field) => {
            let value = field.parse::<f64>().map_err(|_| LoadError::NonNumeric {
                row,
                column: String::from(column),
                value: String::from(field),
            })?;
            Ok(Some(value))
        }
    }
}

fn optional_u32(
    record: &StringRecord,
    idx: usize,
    column: &str,
    row: usize,
) -> Result<Option<u32>, LoadError> {
    match record.get(idx) {
        None => Ok(None),
        Some("") => Ok(None),
        Some(field) => {
            let value = field.parse::<u32>().map_err(|_| LoadError::NonNumeric {
                row,
                column: String::from(column),
                value: String::from(field),
            })?;
            Ok(Some(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::read_dataset;

    const HEADER_11: &str = "name,lat,lng,distance_km,overall_min,morning_min,midday_min,evening_min,traffic_factor,accessibility,public_transport";
    const HEADER_10: &str = "name,lat,lng,distance_km,overall_min,morning_min,midday_min,evening_min,traffic_factor,accessibility";

    #[test]
    fn test_well_formed_row_produces_one_record() {
        let body = format!(
            "{}\nApartamentos Monet,14.565411,-90.442502,3.30,6.97,8.42,6.50,6.00,1.21,3.5,2\n",
            HEADER_11
        );
        let dataset = read_dataset(body.as_bytes(), "test").unwrap();
        assert_eq!(dataset.len(), 1);
        let record = &dataset.records()[0];
        assert_eq!(record.name, "Apartamentos Monet");
        assert_eq!(record.latitude(), 14.565411);
        assert_eq!(record.longitude(), -90.442502);
        assert_eq!(record.distance_km, 3.3);
        assert_eq!(record.travel_times.morning, 8.42);
        assert_eq!(record.traffic_factor, Some(1.21));
        assert_eq!(record.accessibility_score, Some(3.5));
        assert_eq!(record.public_transport_score, Some(2));
    }

    #[test]
    fn test_ten_column_schema_loads_without_public_transport() {
        let body = format!(
            "{}\nResidencial Lirios,14.571,-90.451,2.1,5.0,6.2,5.5,5.8,1.05,4.0\n",
            HEADER_10
        );
        let dataset = read_dataset(body.as_bytes(), "test").unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].public_transport_score, None);
    }

    #[test]
    fn test_short_row_is_skipped_not_raised() {
        let body = format!(
            "{}\nApartamentos Monet,14.565411,-90.442502\nResidencial Lirios,14.571,-90.451,2.1,5.0,6.2,5.5,5.8,1.05,4.0,1\n",
            HEADER_11
        );
        let dataset = read_dataset(body.as_bytes(), "test").unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].name, "Residencial Lirios");
    }

    #[test]
    fn test_non_numeric_coordinate_drops_row() {
        let body = format!(
            "{}\nX,abc,-90.1,1.0,5.0,6.0,5.5,5.8,1.0,4.0,1\n",
            HEADER_11
        );
        let dataset = read_dataset(body.as_bytes(), "test").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_out_of_range_latitude_drops_row() {
        let body = format!(
            "{}\nX,-90.1,0.0,1.0,5.0,6.0,5.5,5.8,1.0,4.0,1\n",
            HEADER_11
        );
        let dataset = read_dataset(body.as_bytes(), "test").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_empty_optional_fields_parse_to_absent() {
        let body = format!("{}\nX,14.5,-90.4,1.0,5.0,6.0,5.5,5.8,,,\n", HEADER_11);
        let dataset = read_dataset(body.as_bytes(), "test").unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.traffic_factor, None);
        assert_eq!(record.accessibility_score, None);
        assert_eq!(record.public_transport_score, None);
    }

    #[test]
    fn test_missing_required_column_fails_the_source() {
        let body = "name,lat\nX,14.5\n";
        let result = read_dataset(body.as_bytes(), "test");
        assert!(result.is_err());
    }

    #[test]
    fn test_row_order_and_duplicates_preserved() {
        let body = format!(
            "{}\nA,14.5,-90.4,1.0,5.0,6.0,5.5,5.8,1.0,4.0,1\nB,14.6,-90.5,2.0,7.0,8.0,7.5,7.8,1.1,3.0,2\nA,14.5,-90.4,1.0,5.0,6.0,5.5,5.8,1.0,4.0,1\n",
            HEADER_11
        );
        let dataset = read_dataset(body.as_bytes(), "test").unwrap();
        let names = dataset
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "B", "A"]);
    }
}
