//! Day cell and weekday header components

use maud::{Markup, PreEscaped, html};

use crate::grid::{DAY_ABBREVS, DayCell, WEEKDAY_CLASSES};

/// Renders a single day cell.
///
/// Padding slots become empty cells with the `noday` class; real days get
/// the weekday column class plus, when the date is flagged, its tag as an
/// extra class the stylesheet colors.
///
/// # Arguments
///
/// * `cell`: Grid slot to render
/// * `tag`: Tag for this date when flagged, `None` otherwise
pub fn day_cell(cell: &DayCell, tag: Option<&str>) -> Markup {
    if cell.is_padding() {
        return html! {
            td class="month noday" { (PreEscaped("&nbsp;")) }
        };
    }

    let mut class = format!("month {}", WEEKDAY_CLASSES[cell.weekday]);
    if let Some(tag) = tag {
        class.push(' ');
        class.push_str(tag);
    }

    html! {
        td class=(class) { (cell.day) }
    }
}

/// Renders the weekday abbreviation header row.
///
/// One cell per column, `M T W T F S S`, each carrying the `dayname` class
/// and its weekday column class.
pub fn weekday_header() -> Markup {
    html! {
        tr {
            @for (abbrev, weekday) in DAY_ABBREVS.iter().zip(WEEKDAY_CLASSES.iter()) {
                td class=(format!("month dayname {}", weekday)) { (abbrev) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_cell_padding() {
        // Act
        let html = day_cell(&DayCell { day: 0, weekday: 2 }, None).into_string();

        // Assert
        assert!(html.contains("month noday"), "Padding uses noday class");
        assert!(html.contains("&nbsp;"), "Padding renders a blank");
    }

    #[test]
    fn test_day_cell_plain_day() {
        let html = day_cell(&DayCell { day: 15, weekday: 4 }, None).into_string();
        assert_eq!(html, "<td class=\"month fri\">15</td>");
    }

    #[test]
    fn test_day_cell_flagged_day() {
        // Act: Thursday the 10th flagged as a special issue
        let html = day_cell(&DayCell { day: 10, weekday: 3 }, Some("special")).into_string();

        // Assert
        assert_eq!(html, "<td class=\"month thu special\">10</td>");
    }

    #[test]
    fn test_weekday_header_columns() {
        // Act
        let html = weekday_header().into_string();

        // Assert: seven cells, Monday first, weekend columns styled apart
        assert_eq!(html.matches("<td").count(), 7);
        assert!(html.contains("month dayname mon"));
        assert!(html.contains("month dayname sat"));
        assert!(html.contains("month dayname sun"));
        assert!(html.starts_with("<tr>"));
        assert!(html.ends_with("</tr>"));
    }
}
