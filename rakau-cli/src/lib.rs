//! Support library for the rakau CLI binary.
//!
//! Exposes the command, logging and suite modules so doctests and integration
//! tests can drive the pipeline without forking a subprocess.

pub mod cli;
pub mod logging;
pub mod suite;
