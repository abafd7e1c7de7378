//! Costline Core - domain entities, draft normalization, and budget folding.
//!
//! This crate contains the aggregation engine for Costline: it turns the
//! analysis collaborator's loosely-structured draft estimates into strict
//! typed records, keeps every derived total consistent, and derives the
//! dual-unit display representation shared by the table and the exporters.
//! It is UI-agnostic and performs no I/O.

pub mod constants;
pub mod display;
pub mod drafts;
pub mod errors;
pub mod estimates;
pub mod session;

// Re-export common types from the estimates module
pub use estimates::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
