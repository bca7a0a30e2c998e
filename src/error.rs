use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid boundaries: min={min}, max={max}")]
    InvalidBoundaries { min: f64, max: f64 },
}
