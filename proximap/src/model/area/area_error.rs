#[derive(thiserror::Error, Debug)]
pub enum AreaError {
    #[error("obscuring polygon requires at least 3 points, found {0}")]
    TooFewPoints(usize),
    #[error("obscuring polygon radius must be positive and finite, found {0}")]
    InvalidRadius(f64),
    #[error("failure serializing polygon geometry: {0}")]
    Serialization(#[from] serde_json::Error),
}
