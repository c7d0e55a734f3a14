//! Command input parsing and registry.
//!
//! # Responsibility
//! - Parse raw input lines into typed command or search requests.
//! - Keep a validated registry of command specs with alias resolution.
//!
//! # Invariants
//! - Registered names and aliases are lowercase and mutually unique.
//! - Scope classification depends only on the typed capitalization.

pub mod input;
pub mod registry;
