//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const CALENDAR: &str = include_str!("../assets/calendar.css");

/// Writes the bundled calendar stylesheet to a directory
///
/// The emitted HTML fragment references the stylesheet by href only; this
/// writes the actual file for hosting setups that do not already carry one.
///
/// # Errors
///
/// Returns error if the file cannot be written.
pub fn write_css_asset(dir: &Path) -> Result<()> {
    fs::write(dir.join("calendar.css"), CALENDAR)
        .with_context(|| format!("Failed to write CSS asset to {}", dir.display()))?;
    Ok(())
}
