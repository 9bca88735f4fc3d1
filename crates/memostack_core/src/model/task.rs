//! Task domain model.
//!
//! # Responsibility
//! - Define the smallest unit of tracked work: a description and a flag.
//! - Give every task a stable identity independent of its content.
//!
//! # Invariants
//! - `description` is fixed at creation.
//! - `is_completed` only ever moves from `false` to `true`.
//! - `id` is stable and shared by clones; two tasks with equal ids are the
//!   same task.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of one task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// One entry of a memo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    is_completed: bool,
}

impl Task {
    /// Creates an open task with a generated stable ID.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            is_completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Marks this task as done. Completing a done task changes nothing.
    pub fn complete(&mut self) {
        self.is_completed = true;
    }
}
