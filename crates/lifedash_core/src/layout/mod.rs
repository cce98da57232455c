//! Temporal layout engine.
//!
//! # Responsibility
//! - Map dated events onto a compressed time axis (`time_axis`).
//! - Color items by urgency (`urgency`).
//! - Place parent nodes, orbiting children and the spine (`bubble`), and
//!   assign ribbon rows to date spans (`ribbon`).
//!
//! # Invariants
//! - Every function here is pure: no I/O, no wall-clock reads, no shared
//!   mutable state. The reference time is always a parameter.
//! - Callers pass a validated `LayoutConfig` and validated events.

pub mod bubble;
pub mod clock;
pub mod ribbon;
pub mod time_axis;
pub mod urgency;
