//! Command line configuration.

use anyhow::{Result, bail};
use chrono::Weekday;
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for pubcal.
#[derive(Debug, Clone, Parser)]
#[command(name = "pubcal", version, about, long_about = None)]
pub struct Config {
    /// Starting month
    #[arg(short = 's', long)]
    pub start_month: u32,

    /// Starting year
    #[arg(short = 'S', long)]
    pub start_year: i32,

    /// Ending month
    #[arg(short = 'e', long)]
    pub end_month: u32,

    /// Ending year (if not included, assumed same as starting)
    #[arg(short = 'E', long)]
    pub end_year: Option<i32>,

    /// Print list of dates in date range rather than calendar HTML
    #[arg(short = 'd', long)]
    pub print_dates: bool,

    /// Flat date-list file consumed in HTML mode
    #[arg(long, default_value = "pubdates.txt")]
    pub dates_file: PathBuf,

    /// Months per row in the year table
    #[arg(long, default_value_t = 2)]
    pub width: usize,

    /// Stylesheet href for the emitted link tag
    #[arg(long, default_value = "/css/calendar.css")]
    pub stylesheet: String,

    /// Publication weekdays used by --print-dates (repeatable)
    #[arg(long, value_parser = parse_weekday, default_value = "thu")]
    pub weekday: Vec<Weekday>,

    /// Write the bundled stylesheet into this directory
    #[arg(long)]
    pub css_out: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if a month is outside 1 through 12, the range end
    /// precedes its start, or no publication weekday is selected.
    pub fn validate(&self) -> Result<()> {
        for (name, month) in [("start", self.start_month), ("end", self.end_month)] {
            if !(1..=12).contains(&month) {
                bail!("{} month out of range: {}", name, month);
            }
        }

        let start = (self.start_year, self.start_month);
        let end = (self.end_year(), self.end_month);
        if end < start {
            bail!(
                "Range ends before it starts: {}-{} to {}-{}",
                start.0,
                start.1,
                end.0,
                end.1
            );
        }

        if self.weekday.is_empty() {
            bail!("At least one publication weekday is required");
        }

        Ok(())
    }

    /// Returns the ending year, defaulting to the starting year.
    pub fn end_year(&self) -> i32 {
        self.end_year.unwrap_or(self.start_year)
    }
}

/// Parses a weekday name or three-letter abbreviation, case-insensitive.
fn parse_weekday(s: &str) -> Result<Weekday, String> {
    match s.to_ascii_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(format!("Unknown weekday: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            start_month: 9,
            start_year: 2015,
            end_month: 6,
            end_year: Some(2016),
            print_dates: false,
            dates_file: PathBuf::from("pubdates.txt"),
            width: 2,
            stylesheet: "/css/calendar.css".to_string(),
            weekday: vec![Weekday::Thu],
            css_out: None,
        }
    }

    #[test]
    fn test_validate_accepts_sane_range() {
        // Arrange
        let config = base_config();

        // Act & Assert
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_month() {
        let mut config = base_config();
        config.start_month = 13;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.end_month = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        // Arrange: June 2016 back to September 2015
        let mut config = base_config();
        config.start_month = 6;
        config.start_year = 2016;
        config.end_month = 9;
        config.end_year = Some(2015);

        // Act & Assert
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_weekdays() {
        let mut config = base_config();
        config.weekday.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_end_year_defaults_to_start() {
        let mut config = base_config();
        config.end_year = None;
        assert_eq!(config.end_year(), 2015);

        config.end_year = Some(2017);
        assert_eq!(config.end_year(), 2017);
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("thu"), Ok(Weekday::Thu));
        assert_eq!(parse_weekday("Thursday"), Ok(Weekday::Thu));
        assert_eq!(parse_weekday("FRI"), Ok(Weekday::Fri));
        assert!(parse_weekday("someday").is_err());
    }

    #[test]
    fn test_config_clone() {
        // Arrange
        let original = base_config();

        // Act
        let cloned = original.clone();

        // Assert
        assert_eq!(cloned.start_month, original.start_month);
        assert_eq!(cloned.end_year, original.end_year);
        assert_eq!(cloned.weekday, original.weekday);
        assert_eq!(cloned.stylesheet, original.stylesheet);
    }
}
