use karobar_core_types::KarobarError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TaxError {
    /// A configured rate is negative or not a finite number.
    #[error("invalid {field}: {rate}")]
    InvalidRate { field: &'static str, rate: f64 },
}

impl From<TaxError> for KarobarError {
    fn from(value: TaxError) -> Self {
        KarobarError::new(value.to_string())
    }
}
