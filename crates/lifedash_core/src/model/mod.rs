//! Input model for the layout engine.
//!
//! # Responsibility
//! - Define validated event input and the snapshot document carrying it.
//!
//! # Invariants
//! - Every `Event` reaching layout code passed boundary validation.
//! - Model values are rebuilt from each snapshot, never patched in place.

pub mod event;
pub mod snapshot;
