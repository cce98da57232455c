//! Icon lookup for dashboard nodes.
//!
//! # Responsibility
//! - Pick a display icon for an event by tag-set intersection.
//!
//! # Invariants
//! - Matching is deterministic: the same catalog and event always yield the
//!   same icon.

pub mod catalog;
