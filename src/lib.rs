#![doc = r#"
DPRES — density-bucketed drawable generation for Android resource trees.

This crate turns a single square source image into one resized PNG per
supported pixel-density bucket (ldpi/mdpi/hdpi/xhdpi/xxhdpi), writing each
into the matching `res/drawable-<suffix>/` directory of a project. Actual
decoding and resizing are delegated to the external ImageMagick tools
(`identify` and `convert`); DPRES contributes the density table, the dp-to-
pixel scaling rule, option validation, and the sequential fail-fast dispatch.
It powers the DPRES CLI and can be embedded in your own Rust applications.

Requirements
------------
- ImageMagick (`identify` and `convert`) available on PATH.
- Rust 2024 edition toolchain.

Quick start: populate a project's drawable directories
------------------------------------------------------
```rust,no_run
use std::path::Path;
use dpres::{ResizeParams, generate_densities};

fn main() -> dpres::Result<()> {
    let params = ResizeParams::new(
        48,             // logical size in dp
        "/work/app",    // project root containing res/
        "drawable-%s",  // bucket directory template
        "icon.png",     // output name shared across buckets
    )?;

    let report = generate_densities(Path::new("/art/icon.svg"), &params)?;
    println!("wrote {:?}, skipped {:?}", report.written, report.skipped);
    Ok(())
}
```

Only bucket directories that already exist receive output; missing ones are
skipped silently, since sparse resource trees are normal. A non-square input
or any ImageMagick failure aborts the run before or mid-way with no retries.

Custom backends
---------------
The external tool boundary is the [`io::ImageBackend`] trait. Supply your own
implementation (alternate tool names, test doubles) via
[`api::generate_densities_with_backend`].

Error handling
--------------
All public functions return `dpres::Result<T>`; match on `dpres::Error` to
handle specific cases, e.g. validation versus external-tool failures.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — the density table and scaling rule.
- [`core`] — validated parameters and the dispatcher.
- [`io`] — the ImageMagick subprocess backend.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::dispatch::DispatchReport;
pub use core::params::{OUTPUT_EXT, ResizeParams, default_outname};
pub use error::{Error, Result};
pub use types::{BASELINE_DPI, DENSITY_BUCKETS, DensityBucket};

pub use io::{ImageBackend, MagickBackend, MagickError};

// High-level API re-exports
pub use api::{generate_densities, generate_densities_with_backend};
