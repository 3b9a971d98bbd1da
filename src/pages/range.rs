//! Multi-year range table

use anyhow::Result;
use maud::{Markup, html};

use crate::pages::year::month_rows;
use crate::registry::DateRegistry;

/// Renders an inclusive month range as one `<table class="year">`.
///
/// Each year in the range contributes a header row with the year number
/// followed by its months laid out `width` per row. Boundary years honor the
/// requested start and end months; interior years cover January through
/// December. The legend key cell occupies the very first cell of the first
/// year only, and each year's final row is padded with empty cells so every
/// row spans exactly `width` columns.
///
/// # Arguments
///
/// * `registry`: Flagged publication dates
/// * `start_year`, `start_month`: First month of the range
/// * `end_year`, `end_month`: Last month of the range, inclusive
/// * `width`: Months per row; values below 1 are clamped to 1
///
/// # Errors
///
/// Returns error if a boundary month is outside 1 through 12.
pub fn render_range(
    registry: &DateRegistry,
    start_year: i32,
    start_month: u32,
    end_year: i32,
    end_month: u32,
    width: usize,
) -> Result<Markup> {
    let width = width.max(1);

    Ok(html! {
        table class="year" {
            @for year in start_year..=end_year {
                @let first = if year == start_year { start_month } else { 1 };
                @let last = if year == end_year { end_month } else { 12 };
                tr { th colspan=(width) class="year" { (year) } }
                (month_rows(registry, year, first, last, width, year == start_year)?)
            }
        }
    })
}
