//! Text rendering for console output.
//!
//! # Responsibility
//! - Turn domain state into printable text without side effects.
//!
//! # Invariants
//! - Rendering is deterministic for a given memo state.

pub mod memo_formatter;
