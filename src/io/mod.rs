//! I/O layer for the external ImageMagick tools.
//! Provides the `ImageBackend` trait, the `MagickBackend` subprocess
//! implementation, and `identify`-output dimension parsing.
pub mod magick;
pub use magick::{ImageBackend, MagickBackend, MagickError, parse_dimensions};
