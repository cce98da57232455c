//! Core layout logic for the lifedash personal dashboard.
//! Turns dated events into bubble-map and ribbon layouts; rendering lives
//! elsewhere.

pub mod config;
pub mod icon;
pub mod layout;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{ConfigError, LayoutConfig};
pub use icon::catalog::{IconCatalog, IconEntry};
pub use layout::bubble::{layout_bubble_map, BubbleLayout, PlacedChild, PlacedNode};
pub use layout::clock::{days_from_now, MIN_DAYS_FROM_NOW};
pub use layout::ribbon::{
    assign_rows, day_window, layout_ribbon, DayCell, EventSpan, RibbonLayout, SpanInterval,
};
pub use layout::time_axis::{axis_position, reference_gridlines, unit_position, Gridline};
pub use layout::urgency::{glow_color, glow_intensity, urgency_color, urgency_hsl, Hsl};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::event::{
    Action, ActionStatus, Event, EventRecord, EventSchedule, EventValidationError, Weight,
    MAX_WEIGHT, MIN_WEIGHT,
};
pub use model::snapshot::{Snapshot, SnapshotError};
pub use service::layout_service::{LayoutService, LayoutServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
