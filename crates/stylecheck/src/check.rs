//! Check a single file and print its report.

use anyhow::Context;
use camino::Utf8Path;
use tracing::{debug, instrument, warn};

use stylecheck_core::{Report, lines, run_checks};

use crate::presenter;

/// Read a file and validate its size against the configured limit.
///
/// Fails before any check runs if the file is missing, unreadable, or larger
/// than `max_bytes`. Bytes that are not valid UTF-8 (a Latin-1 comment, say)
/// decode to U+FFFD so the file is still checked.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let bytes =
        std::fs::read(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    let content = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(file = %path, "input is not valid UTF-8; decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    Ok(content)
}

/// Read `path` and run every check over its lines.
pub fn check_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<Report> {
    let content = read_input_file(path, max_bytes)?;
    let lines = lines::split_lines(&content);
    debug!(file = %path, lines = lines.len(), "read input file");
    Ok(run_checks(&lines))
}

/// Check a file and print the report to stdout.
#[instrument(name = "cmd_check", skip_all, fields(file = %path))]
pub fn cmd_check(path: &Utf8Path, max_bytes: Option<usize>, color: bool) -> anyhow::Result<()> {
    let report = check_file(path, max_bytes)?;
    debug!(
        errors = report.errors.len(),
        stats = report.stats.len(),
        "checks complete"
    );
    print!("{}", presenter::render(&report, color));
    Ok(())
}
