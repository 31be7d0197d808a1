use std::path::Path;

use tracing::{debug, info};

use crate::core::params::ResizeParams;
use crate::error::{Error, Result};
use crate::io::ImageBackend;
use crate::types::DENSITY_BUCKETS;

/// Outcome of a dispatch run: which bucket suffixes were written and which
/// were skipped because their directory does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub written: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

/// Validate the input is square, then walk the density table in order,
/// resizing into every bucket directory that exists. Sequential and
/// fail-fast: the first backend failure aborts the remaining buckets.
pub fn dispatch(
    input: &Path,
    params: &ResizeParams,
    backend: &dyn ImageBackend,
) -> Result<DispatchReport> {
    let (width, height) = backend.probe_dimensions(input)?;
    if width != height {
        return Err(Error::NotSquare { width, height });
    }
    info!("input {:?} is {}x{}", input, width, height);

    let mut report = DispatchReport::default();
    for bucket in DENSITY_BUCKETS {
        let dir = params.bucket_dir(bucket.suffix);
        if !dir.is_dir() {
            // Sparse resource trees are expected; not an error.
            debug!("skipping {}: {:?} does not exist", bucket.suffix, dir);
            report.skipped.push(bucket.suffix);
            continue;
        }
        let target = bucket.target_px(params.dp);
        let dest = dir.join(&params.outname);
        info!("{}: {} dp -> {} px, {:?}", bucket.suffix, params.dp, target, dest);
        backend.resize(input, target, &dest)?;
        report.written.push(bucket.suffix);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MagickError;
    use std::cell::RefCell;
    use std::fs;
    use std::path::PathBuf;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct ResizeCall {
        size: u32,
        dest: PathBuf,
    }

    /// Records resize invocations instead of shelling out.
    struct FakeBackend {
        dims: (u32, u32),
        fail_on_call: Option<usize>,
        calls: RefCell<Vec<ResizeCall>>,
    }

    impl FakeBackend {
        fn square(side: u32) -> Self {
            Self {
                dims: (side, side),
                fail_on_call: None,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ImageBackend for FakeBackend {
        fn probe_dimensions(&self, _path: &Path) -> std::result::Result<(u32, u32), MagickError> {
            Ok(self.dims)
        }

        fn resize(
            &self,
            _src: &Path,
            size: u32,
            dest: &Path,
        ) -> std::result::Result<(), MagickError> {
            let n = self.calls.borrow().len();
            if self.fail_on_call == Some(n) {
                return Err(MagickError::ParseDimensions {
                    output: "injected failure".to_string(),
                });
            }
            self.calls.borrow_mut().push(ResizeCall {
                size,
                dest: dest.to_path_buf(),
            });
            Ok(())
        }
    }

    fn project_with_dirs(dirs: &[&str]) -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for d in dirs {
            fs::create_dir_all(tmp.path().join("res").join(d)).unwrap();
        }
        tmp
    }

    fn params(dp: u32, projdir: &Path) -> ResizeParams {
        ResizeParams::new(dp, projdir, "drawable-%s", "icon.png").unwrap()
    }

    #[test]
    fn writes_only_existing_buckets_in_table_order() {
        let tmp = project_with_dirs(&["drawable-mdpi", "drawable-xhdpi"]);
        let backend = FakeBackend::square(100);
        let report =
            dispatch(Path::new("in.png"), &params(48, tmp.path()), &backend).unwrap();

        assert_eq!(report.written, ["mdpi", "xhdpi"]);
        assert_eq!(report.skipped, ["ldpi", "hdpi", "xxhdpi"]);

        let calls = backend.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].size, 48);
        assert_eq!(
            calls[0].dest,
            tmp.path().join("res/drawable-mdpi/icon.png")
        );
        assert_eq!(calls[1].size, 96);
        assert_eq!(
            calls[1].dest,
            tmp.path().join("res/drawable-xhdpi/icon.png")
        );
    }

    #[test]
    fn empty_res_tree_writes_nothing() {
        let tmp = project_with_dirs(&[]);
        let backend = FakeBackend::square(64);
        let report =
            dispatch(Path::new("in.png"), &params(24, tmp.path()), &backend).unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.skipped.len(), 5);
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn non_square_input_aborts_before_any_resize() {
        let tmp = project_with_dirs(&["drawable-mdpi"]);
        let backend = FakeBackend {
            dims: (100, 50),
            fail_on_call: None,
            calls: RefCell::new(Vec::new()),
        };
        let err =
            dispatch(Path::new("in.png"), &params(48, tmp.path()), &backend).unwrap_err();
        assert!(matches!(
            err,
            Error::NotSquare {
                width: 100,
                height: 50
            }
        ));
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn resize_failure_aborts_remaining_buckets() {
        let tmp = project_with_dirs(&["drawable-ldpi", "drawable-mdpi", "drawable-hdpi"]);
        let backend = FakeBackend {
            dims: (32, 32),
            fail_on_call: Some(1),
            calls: RefCell::new(Vec::new()),
        };
        let err =
            dispatch(Path::new("in.png"), &params(16, tmp.path()), &backend).unwrap_err();
        assert!(matches!(err, Error::Magick(_)));
        // ldpi succeeded, mdpi failed, hdpi never attempted.
        assert_eq!(backend.calls.borrow().len(), 1);
    }

    #[test]
    fn custom_template_targets_matching_dirs() {
        let tmp = project_with_dirs(&["mipmap-hdpi-v4"]);
        let p = ResizeParams::new(48, tmp.path(), "mipmap-%s-v4", "ic_launcher.png").unwrap();
        let backend = FakeBackend::square(256);
        let report = dispatch(Path::new("in.png"), &p, &backend).unwrap();
        assert_eq!(report.written, ["hdpi"]);
        assert_eq!(
            backend.calls.borrow()[0].dest,
            tmp.path().join("res/mipmap-hdpi-v4/ic_launcher.png")
        );
    }

    #[test]
    fn rerun_targets_identical_paths() {
        let tmp = project_with_dirs(&["drawable-mdpi"]);
        let p = params(48, tmp.path());
        let first = FakeBackend::square(100);
        let second = FakeBackend::square(100);
        dispatch(Path::new("in.png"), &p, &first).unwrap();
        dispatch(Path::new("in.png"), &p, &second).unwrap();
        assert_eq!(*first.calls.borrow(), *second.calls.borrow());
    }
}
