use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dpres", version, about = "DPRES CLI")]
pub struct CliArgs {
    /// Logical size in density-independent pixels (dp)
    #[arg(long)]
    pub dp: u32,

    /// Project root containing a res/ subdirectory
    #[arg(long, default_value = ".")]
    pub projdir: PathBuf,

    /// Drawable directory template with exactly one %s placeholder
    #[arg(long, default_value = "drawable-%s")]
    pub subdirfmt: String,

    /// Output file name (default: input base name with .png extension);
    /// must end in .png
    #[arg(long)]
    pub outname: Option<String>,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Input image (must be square)
    pub infile: PathBuf,
}
