//! Helpers for rendering command output.

use std::io::Write;
use std::path::Path;

use eyre::{Context, Result};
use serde::Serialize;
use sitespec::SiteSpec;

use crate::error::CliError;

pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
    compact: bool,
) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .wrap_err("failed to serialise output")?;
    writeln!(writer, "{rendered}").wrap_err("failed to write output")
}

pub(crate) fn write_check_result(
    writer: &mut dyn Write,
    path: &Path,
    result: &Result<SiteSpec, CliError>,
) -> Result<()> {
    let written = match result {
        Ok(spec) => writeln!(
            writer,
            "ok: {} ({} rules, {} test cases)",
            path.display(),
            spec.rules.len(),
            spec.testcases.len()
        ),
        Err(err) => writeln!(writer, "invalid: {err}"),
    };
    written.wrap_err_with(|| format!("failed to write check result for {}", path.display()))
}
