use super::load_error::LoadError;
use super::{builtin, csv_ops};
use crate::model::location::Dataset;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// one stage of the dataset fallback cascade. sources are tried in order by
/// the loader; the `Builtin` stage never fails.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DatasetSource {
    /// reads location records from a delimited-text file on disk
    File { path: String },
    /// parses an embedded or pre-fetched text blob supplied by the host
    Text { name: String, body: String },
    /// the fixed literal record set, the floor of the cascade
    Builtin,
}

impl DatasetSource {
    /// a short label for logging which cascade stage produced the dataset
    pub fn label(&self) -> String {
        match self {
            DatasetSource::File { path } => format!("file:{}", path),
            DatasetSource::Text { name, .. } => format!("text:{}", name),
            DatasetSource::Builtin => String::from("builtin"),
        }
    }

    /// attempts to build a dataset from this source. a source that reads
    /// successfully but yields zero records is treated as a failure so the
    /// cascade can move on.
    pub fn read(&self) -> Result<Dataset, LoadError> {
        let dataset = match self {
            DatasetSource::File { path } => {
                let file = File::open(Path::new(path))
                    .map_err(|e| LoadError::Retrieval(self.label(), e.to_string()))?;
                csv_ops::read_dataset(file, path)?
            }
            DatasetSource::Text { name, body } => csv_ops::read_dataset(body.as_bytes(), name)?,
            DatasetSource::Builtin => builtin::dataset(),
        };
        if dataset.is_empty() && !matches!(self, DatasetSource::Builtin) {
            return Err(LoadError::EmptySource(self.label()));
        }
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::DatasetSource;

    #[test]
    fn test_unreadable_file_is_a_retrieval_failure() {
        let source = DatasetSource::File {
            path: String::from("/nonexistent/locations.csv"),
        };
        assert!(source.read().is_err());
    }

    #[test]
    fn test_builtin_source_never_fails() {
        let dataset = DatasetSource::Builtin.read().unwrap();
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_empty_text_source_is_abandoned() {
        let source = DatasetSource::Text {
            name: String::from("empty"),
            body: String::from(
                "name,lat,lng,distance_km,overall_min,morning_min,midday_min,evening_min,traffic_factor,accessibility\n",
            ),
        };
        assert!(source.read().is_err());
    }
}
