use karobar_core_types::KarobarError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid catalog: {0}")]
    Invalid(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("unsupported catalog path: {0}")]
    UnsupportedPath(String),
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl From<PolicyError> for KarobarError {
    fn from(value: PolicyError) -> Self {
        KarobarError::new(value.to_string())
    }
}
