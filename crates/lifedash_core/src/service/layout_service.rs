//! Layout use-case service.
//!
//! # Responsibility
//! - Hold one validated `LayoutConfig` and run layout passes with it.
//! - Load snapshots from disk and report failures as typed errors.
//! - Emit metadata-only diagnostics for each pass.
//!
//! # Invariants
//! - A `LayoutService` can only be built from a config that validates.
//! - Layout passes are pure; the service itself holds no per-pass state.

use crate::config::{ConfigError, LayoutConfig};
use crate::layout::bubble::{layout_bubble_map, BubbleLayout};
use crate::layout::ribbon::{layout_ribbon, RibbonLayout};
use crate::layout::time_axis::{reference_gridlines, Gridline};
use crate::model::snapshot::{Snapshot, SnapshotError};
use chrono::NaiveDateTime;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Service-level failure.
#[derive(Debug)]
pub enum LayoutServiceError {
    Config(ConfigError),
    Snapshot(SnapshotError),
}

impl Display for LayoutServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Snapshot(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LayoutServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Snapshot(err) => Some(err),
        }
    }
}

impl From<ConfigError> for LayoutServiceError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<SnapshotError> for LayoutServiceError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

/// Entry point for callers that turn snapshots into layouts.
#[derive(Debug, Clone)]
pub struct LayoutService {
    config: LayoutConfig,
}

impl Default for LayoutService {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }
}

impl LayoutService {
    /// Creates a service after validating `config`.
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutServiceError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Reads and validates a snapshot file.
    pub fn load_snapshot(&self, path: impl AsRef<Path>) -> Result<Snapshot, LayoutServiceError> {
        match Snapshot::from_path(path.as_ref()) {
            Ok(snapshot) => {
                info!(
                    "event=snapshot_load module=service status=ok events={} icons={}",
                    snapshot.events.len(),
                    snapshot.icons.entries().len()
                );
                Ok(snapshot)
            }
            Err(err) => {
                let kind = match &err {
                    SnapshotError::Io { .. } => "io",
                    SnapshotError::Json(_) => "invalid",
                };
                warn!("event=snapshot_load module=service status=error kind={kind}");
                Err(err.into())
            }
        }
    }

    /// Bubble-map layout for `snapshot` as seen at `now`.
    pub fn bubble_map(&self, snapshot: &Snapshot, now: NaiveDateTime) -> BubbleLayout {
        let layout = layout_bubble_map(&snapshot.events, now, &self.config, &snapshot.icons);
        debug!(
            "event=layout_bubble module=service status=ok nodes={} children={}",
            layout.nodes.len(),
            layout
                .nodes
                .iter()
                .map(|node| node.children.len())
                .sum::<usize>()
        );
        layout
    }

    /// Ribbon layout for `snapshot` over the window starting at `now`.
    pub fn ribbon(&self, snapshot: &Snapshot, now: NaiveDateTime) -> RibbonLayout {
        let layout = layout_ribbon(&snapshot.events, now, &self.config);
        debug!(
            "event=layout_ribbon module=service status=ok spans={} dropped={} rows={}",
            layout.spans.len(),
            snapshot.events.len() - layout.spans.len(),
            layout.row_count
        );
        layout
    }

    /// Gridlines for the configured axis.
    pub fn gridlines(&self) -> Vec<Gridline> {
        reference_gridlines(&self.config)
    }
}
