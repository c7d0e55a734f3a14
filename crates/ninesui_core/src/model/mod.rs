//! Displayable item contracts.
//!
//! # Responsibility
//! - Define the interface every record shown by the UI core implements.
//! - Declare optional capabilities (hover, drill-in, jump) explicitly.
//!
//! # Invariants
//! - Capability behavior is reached through interface presence, never
//!   through runtime attribute probing.

pub mod item;
