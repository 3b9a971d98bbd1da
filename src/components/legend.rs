//! Legend key cell component

use maud::{Markup, PreEscaped, html};

/// Renders the legend key cell placed in the first row of a year table.
///
/// A small two-row table mapping a colored square marker to "issue dates"
/// and another to "special issues". The `#issuekey` and `#specialkey` spans
/// pick up their colors from the stylesheet.
pub fn key_cell() -> Markup {
    html! {
        td id="keycell" {
            table id="key" {
                tr {
                    td {
                        span id="issuekey" { (PreEscaped("&#9632;")) }
                        (PreEscaped("&nbsp;"))
                        "issue dates"
                    }
                }
                tr {
                    td {
                        span id="specialkey" { (PreEscaped("&#9632;")) }
                        (PreEscaped("&nbsp;"))
                        "special issues"
                    }
                }
            }
        }
    }
}
