//! devkit library
//!
//! Bootstrap (tracing, configuration, dependency wiring) and the command line
//! shell over the tool crates.

pub mod bootstrap;
pub mod cli;
