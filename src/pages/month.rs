//! Single month table

use anyhow::{Context, Result};
use chrono::Month;
use maud::{Markup, html};

use crate::components::day::{day_cell, weekday_header};
use crate::grid;
use crate::registry::DateRegistry;

/// Renders one month as a `<table class="month">`.
///
/// The table carries a month-name header spanning all seven columns, the
/// weekday abbreviation row, then one row per calendar week. Days flagged in
/// the registry get their tag appended to the cell's CSS classes.
///
/// # Arguments
///
/// * `registry`: Flagged publication dates
/// * `year`: Calendar year
/// * `month`: Month number, 1 through 12
/// * `with_year`: Include the year in the month-name header
///
/// # Errors
///
/// Returns error if `month` is outside 1 through 12.
pub fn render_month(
    registry: &DateRegistry,
    year: i32,
    month: u32,
    with_year: bool,
) -> Result<Markup> {
    let name = month_name(month)?;
    let heading = if with_year {
        format!("{} {}", name, year)
    } else {
        name.to_string()
    };

    let weeks = grid::month_weeks(year, month)?;

    Ok(html! {
        table class="month" {
            tr { th colspan="7" class="month" { (heading) } }
            (weekday_header())
            @for week in &weeks {
                tr class="month" {
                    @for cell in week {
                        @let tag = cell.date(year, month).and_then(|d| registry.tag(d));
                        (day_cell(cell, tag))
                    }
                }
            }
        }
    })
}

/// Returns the English month name.
///
/// # Errors
///
/// Returns error if `month` is outside 1 through 12.
pub fn month_name(month: u32) -> Result<&'static str> {
    Month::try_from(month as u8)
        .ok()
        .map(|m| m.name())
        .with_context(|| format!("Invalid month: {}", month))
}
