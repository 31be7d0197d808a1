//! Core logic: validated invocation parameters and the density dispatcher.
pub mod dispatch;
pub mod params;
