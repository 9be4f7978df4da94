use thiserror::Error;

pub type SelectorResult<T> = Result<T, SelectorError>;

#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("invalid track geometry: {field}={value} (must be finite and > 0)")]
    InvalidGeometry { field: &'static str, value: f64 },

    #[error("invalid snap unit: {0} (must be finite and > 0)")]
    InvalidSnap(f64),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
