//! Tag-intersection icon matcher.
//!
//! # Responsibility
//! - Hold the icon catalog shipped alongside a snapshot.
//! - Score every catalog entry against an event's tag set.
//!
//! # Invariants
//! - Event tags = explicit tags + lowercase alphanumeric name tokens.
//! - Best entry = largest non-empty intersection; ties go to the earlier
//!   catalog entry.

use crate::model::event::Event;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

static NAME_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("valid name token regex"));

/// One icon and the tags it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    pub icon: String,
    pub tags: Vec<String>,
}

/// Ordered icon catalog. Order matters for tie-breaking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconCatalog {
    entries: Vec<IconEntry>,
}

impl IconCatalog {
    pub fn new(entries: Vec<IconEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the icon whose tags overlap `tags` the most.
    pub fn match_tags(&self, tags: &BTreeSet<String>) -> Option<&str> {
        let mut best: Option<(&IconEntry, usize)> = None;
        for entry in &self.entries {
            let score = entry
                .tags
                .iter()
                .map(|tag| tag.trim().to_lowercase())
                .collect::<BTreeSet<_>>()
                .intersection(tags)
                .count();
            if score == 0 {
                continue;
            }
            // Strictly greater keeps the first entry on ties.
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((entry, score));
            }
        }
        best.map(|(entry, _)| entry.icon.as_str())
    }

    /// Matches an event by its explicit tags and name tokens.
    pub fn match_event(&self, event: &Event) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        self.match_tags(&event_tags(event))
    }
}

/// Collects the tag set used for icon matching.
pub fn event_tags(event: &Event) -> BTreeSet<String> {
    let lowered = event.name().to_lowercase();
    event
        .tags()
        .iter()
        .cloned()
        .chain(
            NAME_TOKEN_RE
                .find_iter(&lowered)
                .map(|token| token.as_str().to_string()),
        )
        .collect()
}
