//! Calendar table renderers
//!
//! This module organizes HTML renderers by table granularity: a single
//! month, a single year, or an arbitrary month range spanning years. Each
//! renderer produces a self-contained table fragment and utilizes shared
//! components from the components module.

pub mod month;
pub mod range;
pub mod year;
