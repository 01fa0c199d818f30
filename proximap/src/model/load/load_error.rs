use crate::model::location::LocationError;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed reading dataset source '{0}': {1}")]
    Retrieval(String, String),
    #[error("dataset header missing required column '{0}'")]
    MissingColumn(String),
    #[error("failure reading CSV record: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} is missing column '{column}'")]
    ShortRow { row: usize, column: String },
    #[error("row {row} column '{column}' has non-numeric value '{value}'")]
    NonNumeric {
        row: usize,
        column: String,
        value: String,
    },
    #[error("row {row} failed validation: {source}")]
    Validation { row: usize, source: LocationError },
    #[error("dataset source '{0}' produced no records")]
    EmptySource(String),
}
