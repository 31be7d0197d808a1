//! High-level, ergonomic library API: generate density-bucketed drawables
//! from a source image. Prefer these entrypoints over the low-level core
//! modules when embedding DPRES in another application.
use std::path::Path;

use crate::core::dispatch::{DispatchReport, dispatch};
use crate::core::params::ResizeParams;
use crate::error::Result;
use crate::io::{ImageBackend, MagickBackend};

/// Resize `input` into every existing density bucket directory under
/// `params.projdir`, shelling out to ImageMagick.
pub fn generate_densities(input: &Path, params: &ResizeParams) -> Result<DispatchReport> {
    generate_densities_with_backend(input, params, &MagickBackend::new())
}

/// Same as [`generate_densities`] but with a caller-supplied backend,
/// e.g. alternate tool names or a test double.
pub fn generate_densities_with_backend(
    input: &Path,
    params: &ResizeParams,
    backend: &dyn ImageBackend,
) -> Result<DispatchReport> {
    dispatch(input, params, backend)
}
