//! Command Line Interface (CLI) layer for DPRES.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) wiring user-provided options to
//! the underlying library functionality exposed via `dpres::api`.
//!
//! If you are embedding DPRES into another application, prefer using the
//! high-level `dpres::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
