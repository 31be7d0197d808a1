//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and ImageMagick errors, and provides semantic variants
//! for argument validation and precondition failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ImageMagick error: {0}")]
    Magick(#[from] crate::io::MagickError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Logical size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Input image must be square, got: {width}x{height}")]
    NotSquare { width: u32, height: u32 },
}
