//! Single year table

use anyhow::Result;
use maud::{Markup, html};

use crate::components::legend::key_cell;
use crate::pages::month::render_month;
use crate::registry::DateRegistry;

/// Renders months of a single year as a `<table class="year">`.
///
/// Months are laid out `width` per row, each wrapped in a `<td
/// class="year">` cell. The first cell of the first row holds the legend key
/// instead of a month, and a short final row is padded with empty cells so
/// every row spans exactly `width` columns.
///
/// # Arguments
///
/// * `registry`: Flagged publication dates
/// * `year`: Calendar year
/// * `start_month`: First month to render, 1 through 12
/// * `end_month`: Last month to render, inclusive
/// * `width`: Months per row; values below 1 are clamped to 1
///
/// # Errors
///
/// Returns error if a month is outside 1 through 12.
pub fn render_year(
    registry: &DateRegistry,
    year: i32,
    start_month: u32,
    end_month: u32,
    width: usize,
) -> Result<Markup> {
    let width = width.max(1);

    Ok(html! {
        table class="year" {
            tr { th colspan=(width) class="year" { (year) } }
            (month_rows(registry, year, start_month, end_month, width, true)?)
        }
    })
}

/// Lays out one year's months into rows of `width` cells.
///
/// Emits `<tr class="year">` rows. When `with_legend` is set the legend key
/// cell occupies the first slot before any month. The final row is padded
/// with empty `<td>` cells up to `width`, keeping the table rectangular.
pub(crate) fn month_rows(
    registry: &DateRegistry,
    year: i32,
    start_month: u32,
    end_month: u32,
    width: usize,
    with_legend: bool,
) -> Result<Markup> {
    let mut cells = Vec::new();
    if with_legend {
        cells.push(key_cell());
    }
    for month in start_month..=end_month {
        let table = render_month(registry, year, month, false)?;
        cells.push(html! { td class="year" { (table) } });
    }

    let padding = cells.len().next_multiple_of(width) - cells.len();
    for _ in 0..padding {
        cells.push(html! { td {} });
    }

    Ok(html! {
        @for row in cells.chunks(width) {
            tr class="year" {
                @for cell in row { (cell) }
            }
        }
    })
}
