//! HTML publication calendar generation for a periodical.

mod assets;
pub mod components;
mod config;
pub mod grid;
pub mod pages;
mod registry;

pub use assets::write_css_asset;
pub use config::Config;
pub use grid::{DayCell, days_in_month, month_weeks};
pub use pages::month::render_month;
pub use pages::range::render_range;
pub use pages::year::render_year;
pub use registry::{DEFAULT_TAG, DateRegistry, parse_entry};
