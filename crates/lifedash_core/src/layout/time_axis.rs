//! Compressed time axis.
//!
//! # Responsibility
//! - Convert days-from-now into a bounded horizontal position.
//! - Expose the reference gridlines drawn at the same positions.
//!
//! # Invariants
//! - `axis_position(0) == 0` and `axis_position(max_days) == 100` exactly.
//! - Non-decreasing everywhere; strictly increasing on `[0, max_days]`.
//! - Inputs beyond the horizon clamp to the right edge.

use crate::config::LayoutConfig;
use serde::Serialize;

/// Right edge of the percentage axis.
pub const AXIS_MAX: f64 = 100.0;

/// Position on `[0, 1]`: `(ln(d + 1) / ln(max_days + 1)) ^ gamma`.
pub fn unit_position(days: f64, config: &LayoutConfig) -> f64 {
    let clamped = days.clamp(0.0, config.max_days);
    let t = (clamped + 1.0).ln() / (config.max_days + 1.0).ln();
    t.powf(config.gamma)
}

/// Position on `[0, 100]`.
pub fn axis_position(days: f64, config: &LayoutConfig) -> f64 {
    unit_position(days, config) * AXIS_MAX
}

/// Fixed reference line on the compressed axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gridline {
    pub label: String,
    pub days: f64,
    pub x: f64,
}

const FIXED_MARKS: [(&str, f64); 4] = [("tomorrow", 1.0), ("1w", 7.0), ("2w", 14.0), ("1m", 30.0)];

/// Tomorrow, one week, two weeks, one month and the horizon.
///
/// Fixed marks at or past the horizon are dropped; the horizon line is
/// always last and always at the right edge.
pub fn reference_gridlines(config: &LayoutConfig) -> Vec<Gridline> {
    FIXED_MARKS
        .into_iter()
        .filter(|(_, days)| *days < config.max_days)
        .map(|(label, days)| (label.to_string(), days))
        .chain(std::iter::once((
            format!("{}d", config.max_days),
            config.max_days,
        )))
        .map(|(label, days)| Gridline {
            label,
            days,
            x: axis_position(days, config),
        })
        .collect()
}
