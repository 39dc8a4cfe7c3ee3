use thiserror::Error;

pub type EvmResult<T> = Result<T, EvmError>;

#[derive(Debug, Error)]
pub enum EvmError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Render(String),

    #[error("jpeg encoding failure: {0}")]
    Encode(#[from] image::ImageError),
}
