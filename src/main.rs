use anyhow::{Context, Result};
use pubcal::{Config, DateRegistry};
use std::fs;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    if let Some(dir) = &config.css_out {
        fs::create_dir_all(dir).context("Failed to create CSS output directory")?;
        pubcal::write_css_asset(dir)?;
        eprintln!("Wrote stylesheet: {}", dir.join("calendar.css").display());
    }

    let output = if config.print_dates {
        candidate_dates(&config)?
    } else {
        calendar_html(&config)?
    };

    print!("{}", output);

    Ok(())
}

/// Builds the flat candidate date list for the configured range.
///
/// Every occurrence of the configured publication weekdays between the start
/// and end month becomes one `Y-M-D/issue` line, dates ascending. Interior
/// years cover all twelve months; boundary years honor the start and end
/// months. The output is meant to be hand-edited and fed back through
/// `--dates-file`.
fn candidate_dates(config: &Config) -> Result<String> {
    let mut registry = DateRegistry::new();
    let end_year = config.end_year();

    for year in config.start_year..=end_year {
        let first = if year == config.start_year {
            config.start_month
        } else {
            1
        };
        let last = if year == end_year { config.end_month } else { 12 };
        for month in first..=last {
            registry.add_weekdays(year, month, &config.weekday)?;
        }
    }

    Ok(registry.date_list())
}

/// Renders the calendar fragment for the configured range.
///
/// A stylesheet `<link>` line followed by one `<table class="year">`,
/// intended for embedding into a larger page. Dates come from the flat date
/// file; a missing file renders an unflagged calendar with a warning.
fn calendar_html(config: &Config) -> Result<String> {
    let mut registry = DateRegistry::new();

    if config.dates_file.exists() {
        registry
            .load_file(&config.dates_file)
            .context("Failed to load date file")?;
    } else {
        eprintln!(
            "Warning: date file not found: {}",
            config.dates_file.display()
        );
    }

    let table = pubcal::render_range(
        &registry,
        config.start_year,
        config.start_month,
        config.end_year(),
        config.end_month,
        config.width,
    )?;

    Ok(format!(
        "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\">\n{}\n",
        config.stylesheet,
        table.into_string()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::io::Write;
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            start_month: 9,
            start_year: 2015,
            end_month: 10,
            end_year: None,
            print_dates: false,
            dates_file: PathBuf::from("no-such-file.txt"),
            width: 2,
            stylesheet: "/css/calendar.css".to_string(),
            weekday: vec![Weekday::Thu],
            css_out: None,
        }
    }

    #[test]
    fn test_candidate_dates_thursdays() {
        // Arrange
        let config = test_config();

        // Act: September and October 2015 have 4 + 5 Thursdays
        let list = candidate_dates(&config).unwrap();

        // Assert
        let lines: Vec<&str> = list.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "2015-9-3/issue");
        assert_eq!(lines[8], "2015-10-29/issue");
    }

    #[test]
    fn test_candidate_dates_interior_years_full() {
        // Arrange: September 2015 through February 2017 spans all of 2016
        let mut config = test_config();
        config.end_month = 2;
        config.end_year = Some(2017);

        // Act
        let list = candidate_dates(&config).unwrap();

        // Assert: January and December 2016 both contribute
        assert!(list.contains("2016-1-7/issue"));
        assert!(list.contains("2016-12-29/issue"));
        assert!(!list.contains("2015-8-"), "Nothing before the start month");
        assert!(!list.contains("2017-3-"), "Nothing after the end month");
    }

    #[test]
    fn test_candidate_dates_tuesday_friday_schedule() {
        // Arrange
        let mut config = test_config();
        config.weekday = vec![Weekday::Tue, Weekday::Fri];
        config.end_month = 9;

        // Act
        let list = candidate_dates(&config).unwrap();

        // Assert: September 2015 has 5 Tuesdays and 4 Fridays
        assert_eq!(list.lines().count(), 9);
        assert!(list.contains("2015-9-1/issue"));
        assert!(list.contains("2015-9-25/issue"));
    }

    #[test]
    fn test_calendar_html_fragment_shape() {
        // Arrange: no date file, unflagged calendar
        let config = test_config();

        // Act
        let html = calendar_html(&config).unwrap();

        // Assert
        assert!(html.starts_with(
            "<link rel=\"stylesheet\" type=\"text/css\" href=\"/css/calendar.css\">\n"
        ));
        assert!(html.contains("<table class=\"year\">"));
        assert!(html.ends_with("</table>\n"));
    }

    #[test]
    fn test_calendar_html_with_date_file() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2015-9-10/special").unwrap();
        writeln!(file, "2015-9-17").unwrap();

        let mut config = test_config();
        config.dates_file = file.path().to_path_buf();

        // Act
        let html = calendar_html(&config).unwrap();

        // Assert
        assert!(html.contains("<td class=\"month thu special\">10</td>"));
        assert!(html.contains("<td class=\"month thu issue\">17</td>"));
    }

    #[test]
    fn test_calendar_html_rejects_malformed_file() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2015-9-10/special").unwrap();
        writeln!(file, "not a date").unwrap();

        let mut config = test_config();
        config.dates_file = file.path().to_path_buf();

        // Act & Assert
        assert!(calendar_html(&config).is_err());
    }
}
