pub mod criteria;
pub mod models;
pub mod session;
pub mod supplier;
pub mod traveler;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Request already in flight: {0}")]
    InFlightError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
