//! Core use-case services.
//!
//! # Responsibility
//! - Wrap the pure layout engine with config ownership, snapshot loading
//!   and diagnostics for CLI/host callers.

pub mod layout_service;
