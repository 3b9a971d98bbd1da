//! Publication date registry and flat-file format.
//!
//! The registry maps each publication date to a tag that becomes a CSS class
//! on the rendered day cell. Canonical tags are `issue` and `special`, but
//! any non-empty string is passed through. The flat file holds one
//! `YYYY-M-D/tag` entry per line; a missing `/tag` suffix means `issue`.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::grid;

/// Tag applied when a flat-file line carries no `/tag` suffix.
pub const DEFAULT_TAG: &str = "issue";

/// Mapping from publication date to tag.
///
/// Loading from a file never replaces an existing entry (first write wins),
/// which makes re-loading a hand-edited file idempotent. The weekday
/// auto-add step assigns directly and does overwrite.
#[derive(Debug, Clone, Default)]
pub struct DateRegistry {
    dates: BTreeMap<NaiveDate, String>,
}

impl DateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tag for a date, if the date is flagged.
    pub fn tag(&self, date: NaiveDate) -> Option<&str> {
        self.dates.get(&date).map(String::as_str)
    }

    /// Number of flagged dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true when no dates are flagged.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Flags a date unless it is already flagged.
    ///
    /// Returns true when the entry was inserted, false when an earlier entry
    /// for the same date took precedence.
    pub fn insert_if_absent(&mut self, date: NaiveDate, tag: impl Into<String>) -> bool {
        if self.dates.contains_key(&date) {
            false
        } else {
            self.dates.insert(date, tag.into());
            true
        }
    }

    /// Flags a date, replacing any existing entry.
    pub fn set(&mut self, date: NaiveDate, tag: impl Into<String>) {
        self.dates.insert(date, tag.into());
    }

    /// Loads a flat date-list file into the registry.
    ///
    /// Blank lines are skipped. Dates already present keep their existing
    /// tag, so a file can safely repeat or shadow earlier entries.
    ///
    /// # Arguments
    ///
    /// * `path`: Flat file with one `YYYY-M-D[/tag]` entry per line
    ///
    /// # Returns
    ///
    /// Number of entries added
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or a line is malformed.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read date file: {}", path.display()))?;

        let mut added = 0;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (date, tag) = parse_entry(line)
                .with_context(|| format!("Malformed entry in {}: {:?}", path.display(), line))?;
            if self.insert_if_absent(date, tag) {
                added += 1;
            }
        }

        Ok(added)
    }

    /// Adds every occurrence of the given weekdays in a month.
    ///
    /// Each matching date is assigned the default `issue` tag, replacing any
    /// existing entry. Used by the reverse mode to generate a candidate list
    /// for manual curation.
    ///
    /// # Errors
    ///
    /// Returns error if `month` is outside 1 through 12.
    pub fn add_weekdays(&mut self, year: i32, month: u32, weekdays: &[Weekday]) -> Result<()> {
        for week in grid::month_weeks(year, month)? {
            for cell in week {
                if let Some(date) = cell.date(year, month)
                    && weekdays.contains(&date.weekday())
                {
                    self.set(date, DEFAULT_TAG);
                }
            }
        }
        Ok(())
    }

    /// Formats the registry in the flat-file format it is loaded from.
    ///
    /// One `Y-M-D/tag` line per entry, dates ascending, each line
    /// newline-terminated. Writing this string to a file and re-loading it
    /// reproduces the same mapping.
    pub fn date_list(&self) -> String {
        let mut out = String::new();
        for (date, tag) in &self.dates {
            out.push_str(&format!(
                "{}-{}-{}/{}\n",
                date.year(),
                date.month(),
                date.day(),
                tag
            ));
        }
        out
    }
}

/// Parses a single `YYYY-M-D[/tag]` entry.
///
/// # Errors
///
/// Returns error if the date is not three dash-separated integers forming a
/// valid calendar date, or if the tag after `/` is empty.
pub fn parse_entry(line: &str) -> Result<(NaiveDate, String)> {
    let (date_str, tag) = match line.split_once('/') {
        Some((date_str, tag)) => {
            if tag.is_empty() {
                bail!("Empty tag");
            }
            (date_str, tag)
        }
        None => (line, DEFAULT_TAG),
    };

    let mut parts = date_str.splitn(3, '-');
    let year: i32 = parts
        .next()
        .unwrap_or_default()
        .parse()
        .context("Invalid year")?;
    let month: u32 = parts
        .next()
        .context("Missing month")?
        .parse()
        .context("Invalid month")?;
    let day: u32 = parts
        .next()
        .context("Missing day")?
        .parse()
        .context("Invalid day")?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("No such date: {}-{}-{}", year, month, day))?;

    Ok((date, tag.to_string()))
}
