use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::{debug, info};

/// Errors encountered when invoking the external ImageMagick tools
#[derive(Debug, Error)]
pub enum MagickError {
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("Could not find a WxH dimension token in identify output: {output:?}")]
    ParseDimensions { output: String },
}

/// Abstraction over the external image operations: dimension probing and
/// square resizing. The dispatcher only talks to this trait, so tests can
/// substitute a fake backend without ImageMagick installed.
pub trait ImageBackend {
    /// Probe the pixel dimensions (width, height) of the image at `path`.
    fn probe_dimensions(&self, path: &Path) -> Result<(u32, u32), MagickError>;

    /// Resize `src` to a `size`x`size` PNG at `dest`, overwriting any
    /// existing file there.
    fn resize(&self, src: &Path, size: u32, dest: &Path) -> Result<(), MagickError>;
}

/// Backend shelling out to ImageMagick's `identify` and `convert`.
#[derive(Debug, Clone)]
pub struct MagickBackend {
    identify: String,
    convert: String,
}

impl Default for MagickBackend {
    fn default() -> Self {
        Self {
            identify: "identify".to_string(),
            convert: "convert".to_string(),
        }
    }
}

impl MagickBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tool names, e.g. `magick identify` shims or absolute paths.
    pub fn with_programs(identify: impl Into<String>, convert: impl Into<String>) -> Self {
        Self {
            identify: identify.into(),
            convert: convert.into(),
        }
    }

    fn run(&self, program: &str, args: &[&std::ffi::OsStr]) -> Result<Vec<u8>, MagickError> {
        debug!("exec: {} {:?}", program, args);
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| MagickError::Launch {
                program: program.to_string(),
                source: e,
            })?;
        if !output.status.success() {
            return Err(MagickError::Failed {
                program: program.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(output.stdout)
    }
}

impl ImageBackend for MagickBackend {
    fn probe_dimensions(&self, path: &Path) -> Result<(u32, u32), MagickError> {
        let stdout = self.run(&self.identify, &[path.as_os_str()])?;
        parse_dimensions(&String::from_utf8_lossy(&stdout))
    }

    fn resize(&self, src: &Path, size: u32, dest: &Path) -> Result<(), MagickError> {
        let geometry = format!("{size}x{size}!");
        info!("resize: {:?} -> {:?} ({})", src, dest, geometry);
        self.run(
            &self.convert,
            &[
                src.as_os_str(),
                "-resize".as_ref(),
                geometry.as_str().as_ref(),
                "-colorspace".as_ref(),
                "sRGB".as_ref(),
                dest.as_os_str(),
            ],
        )?;
        Ok(())
    }
}

/// Extract the first `WxH` token with numeric halves from `identify` output,
/// e.g. `icon.png PNG 100x50 100x50+0+0 8-bit sRGB 2989B ...` -> (100, 50).
pub fn parse_dimensions(output: &str) -> Result<(u32, u32), MagickError> {
    for token in output.split_whitespace() {
        if let Some((w, h)) = token.split_once('x') {
            if let (Ok(w), Ok(h)) = (w.parse::<u32>(), h.parse::<u32>()) {
                return Ok((w, h));
            }
        }
    }
    Err(MagickError::ParseDimensions {
        output: output.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identify_geometry_token() {
        let out = "icon.png PNG 100x50 100x50+0+0 8-bit sRGB 2989B 0.000u 0:00.000";
        assert_eq!(parse_dimensions(out).unwrap(), (100, 50));
    }

    #[test]
    fn parses_square_image() {
        let out = "logo.svg SVG 512x512 512x512+0+0 16-bit sRGB 12105B";
        assert_eq!(parse_dimensions(out).unwrap(), (512, 512));
    }

    #[test]
    fn skips_non_numeric_x_tokens() {
        // "8x-bit" style junk before the real geometry must not match.
        let out = "weird.png PNG 12ax9 64x64 64x64+0+0";
        assert_eq!(parse_dimensions(out).unwrap(), (64, 64));
    }

    #[test]
    fn rejects_output_without_dimensions() {
        let err = parse_dimensions("identify: no decode delegate").unwrap_err();
        assert!(matches!(err, MagickError::ParseDimensions { .. }));
    }

    #[test]
    fn launch_failure_reports_program_name() {
        let backend =
            MagickBackend::with_programs("definitely-not-a-real-identify", "convert");
        let err = backend
            .probe_dimensions(Path::new("whatever.png"))
            .unwrap_err();
        match err {
            MagickError::Launch { program, .. } => {
                assert_eq!(program, "definitely-not-a-real-identify")
            }
            other => panic!("expected Launch error, got {other}"),
        }
    }
}
