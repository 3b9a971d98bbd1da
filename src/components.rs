//! Reusable HTML components for calendar tables
//!
//! This module provides Maud component functions shared across the month,
//! year, and range renderers. Components cover the individual day cell, the
//! weekday header row, and the legend key cell placed in year tables.

pub mod day;
pub mod legend;
