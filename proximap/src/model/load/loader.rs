use super::{builtin, DatasetSource};
use crate::model::location::Dataset;

/// loads a dataset through an explicit ordered fallback cascade. each source
/// is tried once, in order; a failed source is logged and never retried. the
/// builtin record set is the implicit final stage, so `load` always returns
/// a usable dataset and never surfaces an error to the caller.
pub struct DatasetLoader {
    sources: Vec<DatasetSource>,
}

impl DatasetLoader {
    pub fn new(sources: Vec<DatasetSource>) -> Self {
        DatasetLoader { sources }
    }

    /// the cascade the host uses by default: an optional file source backed
    /// by the builtin record set.
    pub fn standard(file: Option<String>) -> Self {
        let mut sources = vec![];
        if let Some(path) = file {
            sources.push(DatasetSource::File { path });
        }
        sources.push(DatasetSource::Builtin);
        DatasetLoader::new(sources)
    }

    pub fn load(&self) -> Dataset {
        for source in self.sources.iter() {
            match source.read() {
                Ok(dataset) => {
                    log::info!(
                        "loaded {} location records from source '{}'",
                        dataset.len(),
                        source.label()
                    );
                    return dataset;
                }
                Err(e) => {
                    log::warn!(
                        "dataset source '{}' failed, trying next in cascade: {}",
                        source.label(),
                        e
                    );
                }
            }
        }
        log::warn!("all configured dataset sources failed, using builtin records");
        builtin::dataset()
    }
}

#[cfg(test)]
mod tests {
    use super::{DatasetLoader, DatasetSource};

    const HEADER: &str = "name,lat,lng,distance_km,overall_min,morning_min,midday_min,evening_min,traffic_factor,accessibility,public_transport";

    #[test]
    fn test_first_healthy_source_wins() {
        let loader = DatasetLoader::new(vec![
            DatasetSource::File {
                path: String::from("/nonexistent/locations.csv"),
            },
            DatasetSource::Text {
                name: String::from("embedded"),
                body: format!("{}\nA,14.5,-90.4,1.0,5.0,6.0,5.5,5.8,1.0,4.0,1\n", HEADER),
            },
            DatasetSource::Builtin,
        ]);
        let dataset = loader.load();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].name, "A");
    }

    #[test]
    fn test_all_sources_failing_yields_builtin_records() {
        let loader = DatasetLoader::new(vec![
            DatasetSource::File {
                path: String::from("/nonexistent/locations.csv"),
            },
            DatasetSource::Text {
                name: String::from("corrupt"),
                body: String::from("not,a,valid,header\n1,2,3,4\n"),
            },
        ]);
        let dataset = loader.load();
        assert_eq!(dataset, crate::model::load::builtin::dataset());
    }

    #[test]
    fn test_empty_cascade_yields_builtin_records() {
        let loader = DatasetLoader::new(vec![]);
        let dataset = loader.load();
        assert!(!dataset.is_empty());
    }
}
