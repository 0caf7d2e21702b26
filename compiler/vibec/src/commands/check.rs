//! `vibec check`: parse a file and report every diagnostic.

use tracing::info;
use vibe_parse::parse_with_options;

use super::{read_file, report};
use crate::{CliError, CliOptions};

/// Returns `Ok(false)` when the file has errors.
pub fn check_file(options: &CliOptions) -> Result<bool, CliError> {
    let path = options.path()?;
    let source = read_file(path)?;
    let output = parse_with_options(&source, options.parse);
    info!(
        path,
        errors = output.errors.len(),
        error_nodes = output.tree.error_count(),
        "checked"
    );
    report(path, &source, options.color, &output.diagnostics());
    Ok(!output.has_errors())
}
