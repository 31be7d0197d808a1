use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed extension every output file carries.
pub const OUTPUT_EXT: &str = ".png";

/// Validated invocation parameters, immutable after construction.
/// Suitable for config files and presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResizeParams {
    /// Logical size in density-independent pixels
    pub dp: u32,
    /// Project root containing a `res` subdirectory
    pub projdir: PathBuf,
    /// Drawable directory template with exactly one `%s` placeholder
    pub subdirfmt: String,
    /// Output file name, shared across all buckets
    pub outname: String,
}

impl ResizeParams {
    /// Validate and freeze the invocation parameters.
    pub fn new(
        dp: u32,
        projdir: impl Into<PathBuf>,
        subdirfmt: impl Into<String>,
        outname: impl Into<String>,
    ) -> Result<Self> {
        if dp == 0 {
            return Err(Error::ZeroSize { size: dp });
        }
        let subdirfmt = subdirfmt.into();
        validate_subdirfmt(&subdirfmt)?;
        let outname = outname.into();
        validate_outname(&outname)?;
        Ok(Self {
            dp,
            projdir: projdir.into(),
            subdirfmt,
            outname,
        })
    }

    /// The resource root all bucket directories live under.
    pub fn res_dir(&self) -> PathBuf {
        self.projdir.join("res")
    }

    /// Candidate output directory for a bucket suffix.
    pub fn bucket_dir(&self, suffix: &str) -> PathBuf {
        self.res_dir().join(render_subdir(&self.subdirfmt, suffix))
    }
}

/// Derive the default output name from the input file: its base name with
/// the `.png` extension substituted. None if the input has no base name.
pub fn default_outname(input: &Path) -> Option<String> {
    let stem = input.file_stem()?.to_string_lossy();
    if stem.is_empty() {
        return None;
    }
    Some(format!("{stem}{OUTPUT_EXT}"))
}

/// The output name must end in `.png` with a non-empty stem.
pub fn validate_outname(outname: &str) -> Result<()> {
    if outname.len() > OUTPUT_EXT.len() && outname.ends_with(OUTPUT_EXT) {
        Ok(())
    } else {
        Err(Error::InvalidArgument {
            arg: "outname",
            value: outname.to_string(),
        })
    }
}

/// The template must contain exactly one `%s` placeholder; `%%` is the only
/// other permitted escape. Anything else after a `%` is rejected.
pub fn validate_subdirfmt(subdirfmt: &str) -> Result<()> {
    let invalid = || Error::InvalidArgument {
        arg: "subdirfmt",
        value: subdirfmt.to_string(),
    };
    let mut placeholders = 0;
    let mut chars = subdirfmt.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            continue;
        }
        match chars.next() {
            Some('s') => placeholders += 1,
            Some('%') => {}
            _ => return Err(invalid()),
        }
    }
    if placeholders == 1 { Ok(()) } else { Err(invalid()) }
}

/// Substitute the bucket suffix into a validated template.
pub fn render_subdir(subdirfmt: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(subdirfmt.len() + suffix.len());
    let mut chars = subdirfmt.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => out.push_str(suffix),
            Some('%') => out.push('%'),
            // Unreachable for validated templates; keep the literal otherwise.
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }
    out
}
