//! CLI output formatting.
//!
//! A successful run prints exactly one line to stdout:
//!
//! ```text
//! ✅ Wrote assets/photos/manifest.json
//! ```
//!
//! Diagnostics go through `tracing` to stderr and never mix with this line.
//! As elsewhere, `format_*` functions are pure and `print_*` wrappers do the
//! writing.

use std::path::Path;

/// Confirmation line for a written manifest.
pub fn format_written(path: &Path) -> String {
    format!("✅ Wrote {}", path.display())
}

pub fn print_written(path: &Path) {
    println!("{}", format_written(path));
}
