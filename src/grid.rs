//! Month grid computation.
//!
//! Produces the week-by-week layout of a calendar month with Monday as the
//! first weekday, padded with empty cells so every week spans exactly seven
//! slots. This is the only piece of date arithmetic in the crate; everything
//! downstream (month, year, and range tables) consumes these grids.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

/// CSS classes for weekday columns, Monday first.
pub const WEEKDAY_CLASSES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Single-letter weekday abbreviations for the header row, Monday first.
pub const DAY_ABBREVS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// One slot in a month grid.
///
/// `day` is the day-of-month number, or 0 for a padding slot that belongs to
/// an adjacent month. `weekday` is the Monday-first column index (0=Mon …
/// 6=Sun).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub weekday: usize,
}

impl DayCell {
    /// Returns true for padding slots outside the month.
    pub fn is_padding(&self) -> bool {
        self.day == 0
    }

    /// Resolves this cell to a concrete date within the given month.
    ///
    /// Returns `None` for padding slots.
    pub fn date(&self, year: i32, month: u32) -> Option<NaiveDate> {
        if self.is_padding() {
            None
        } else {
            NaiveDate::from_ymd_opt(year, month, self.day)
        }
    }
}

/// Computes the Monday-first week grid for a month.
///
/// Returns one array of seven cells per calendar week covering the month.
/// Slots before the first and after the last day of the month carry day
/// number 0.
///
/// # Arguments
///
/// * `year`: Calendar year
/// * `month`: Month number, 1 through 12
///
/// # Errors
///
/// Returns error if `month` is outside 1 through 12.
pub fn month_weeks(year: i32, month: u32) -> Result<Vec<[DayCell; 7]>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .with_context(|| format!("Invalid month: {}-{}", year, month))?;

    let lead = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(year, month)?;
    let week_count = (lead + days as usize).div_ceil(7);

    let mut weeks = Vec::with_capacity(week_count);
    for w in 0..week_count {
        let mut cells = [DayCell { day: 0, weekday: 0 }; 7];
        for (weekday, cell) in cells.iter_mut().enumerate() {
            let slot = w * 7 + weekday;
            let day = if slot >= lead && slot < lead + days as usize {
                (slot - lead + 1) as u32
            } else {
                0
            };
            *cell = DayCell { day, weekday };
        }
        weeks.push(cells);
    }

    Ok(weeks)
}

/// Returns the number of days in a month.
///
/// # Errors
///
/// Returns error if `month` is outside 1 through 12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .with_context(|| format!("Invalid month: {}-{}", year, month))?;

    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .with_context(|| format!("Invalid month: {}-{}", year, month))?;

    Ok(next.signed_duration_since(first).num_days() as u32)
}
