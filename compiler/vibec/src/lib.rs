//! vibescript front-end driver.
//!
//! The binary is a thin argument dispatcher; the commands live here so they
//! can be exercised from tests.

pub mod commands;
mod options;
mod tracing_setup;

pub use options::{CliError, CliOptions};
pub use tracing_setup::init_tracing;
