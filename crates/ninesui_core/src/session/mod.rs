//! Headless session layer driven by the render host.
//!
//! # Responsibility
//! - Own router, navigation context and overlay state for one UI session.
//! - Translate submitted lines and hotkeys into core operations.
//! - Project snapshots the host can paint without touching core state.
//!
//! # Invariants
//! - One submission is fully dispatched and committed before the next is
//!   processed; the session is single-threaded by construction.

pub mod app;
pub mod hotkeys;
pub mod overlay;
pub mod snapshot;
