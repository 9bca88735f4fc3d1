//! Memo/task domain model.
//!
//! # Responsibility
//! - Define the data structures the console manipulates.
//! - Keep task ordering and identity rules inside one owner (`Memo`).
//!
//! # Invariants
//! - A memo never holds two tasks with the same `TaskId`.
//! - External task numbering is 1-based and follows insertion order.

pub mod memo;
pub mod task;
