//! JSON snapshot decoding.
//!
//! # Responsibility
//! - Turn a snapshot document (`{ "events": [...], "icons": [...] }`) into
//!   validated model values.
//!
//! # Invariants
//! - One malformed event rejects the whole snapshot.
//! - An empty `events` list is valid and produces an empty layout.

use crate::icon::catalog::IconCatalog;
use crate::model::event::Event;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Full input document for one layout pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub events: Vec<Event>,
    #[serde(default, skip_serializing_if = "IconCatalog::is_empty")]
    pub icons: IconCatalog,
}

impl Snapshot {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            icons: IconCatalog::default(),
        }
    }

    /// Decodes and validates a snapshot document.
    pub fn from_json_str(raw: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(raw).map_err(SnapshotError::Json)
    }

    /// Reads a snapshot file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}

/// Snapshot read or decode failure.
///
/// Event validation failures surface as `Json` because they are raised while
/// serde converts each `EventRecord`.
#[derive(Debug)]
pub enum SnapshotError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read snapshot `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid snapshot: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
        }
    }
}
