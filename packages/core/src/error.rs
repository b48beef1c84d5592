use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImprintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ImprintError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the error came from a rejected value rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

pub type ImprintResult<T> = Result<T, ImprintError>;

/// Reject NaN and infinities, then clamp into `[min, max]`.
pub(crate) fn clamp_finite(value: f32, min: f32, max: f32, field: &str) -> ImprintResult<f32> {
    if !value.is_finite() {
        return Err(ImprintError::invalid_input(format!(
            "{} must be a finite number, got {}",
            field, value
        )));
    }
    Ok(value.clamp(min, max))
}
