use tracing::info;

use dpres::api::generate_densities;
use dpres::core::params::{self, ResizeParams};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let level = if args.log {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if !args.infile.is_file() {
        return Err(AppError::InputNotFound { path: args.infile }.into());
    }

    let outname = match args.outname {
        Some(name) => name,
        None => params::default_outname(&args.infile).ok_or(AppError::NoOutputName {
            path: args.infile.clone(),
        })?,
    };

    let params = ResizeParams::new(args.dp, args.projdir, args.subdirfmt, outname)
        .map_err(AppError::from)?;

    let report = generate_densities(&args.infile, &params).map_err(AppError::from)?;

    info!(
        "Done: wrote {:?}, skipped {:?} (no directory)",
        report.written, report.skipped
    );

    Ok(())
}
