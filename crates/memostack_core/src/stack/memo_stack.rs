//! LIFO memo container.

use crate::model::memo::Memo;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StackResult<T> = Result<T, StackError>;

/// Stack operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// `peek`/`pop` on a stack without memos.
    Empty,
    /// Top memo still has open tasks; it stays on the stack.
    MemoNotCompleted { name: String, open_tasks: usize },
}

impl Display for StackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "The memo stack is empty!"),
            Self::MemoNotCompleted { name, .. } => write!(
                f,
                "Oops! The memo '{name}' is not completed, and therefore cannot be removed!"
            ),
        }
    }
}

impl Error for StackError {}

/// Memos ordered by push time; the last pushed memo is on top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoStack {
    memos: Vec<Memo>,
}

impl MemoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `memo` on top. Passing `None` is a no-op.
    pub fn push(&mut self, memo: impl Into<Option<Memo>>) {
        if let Some(memo) = memo.into() {
            self.memos.push(memo);
        }
    }

    /// Returns the top memo without removing it.
    ///
    /// # Errors
    /// - `StackError::Empty` when no memo was pushed.
    pub fn peek(&self) -> StackResult<&Memo> {
        self.memos.last().ok_or(StackError::Empty)
    }

    /// Mutable variant of `peek`, used to edit the top memo in place.
    pub fn peek_mut(&mut self) -> StackResult<&mut Memo> {
        self.memos.last_mut().ok_or(StackError::Empty)
    }

    /// Removes and returns the top memo once all of its tasks are done.
    ///
    /// # Errors
    /// - `StackError::Empty` when no memo was pushed.
    /// - `StackError::MemoNotCompleted` when the top memo has open tasks.
    pub fn pop(&mut self) -> StackResult<Memo> {
        let top = self.peek()?;
        if !top.is_completed() {
            return Err(StackError::MemoNotCompleted {
                name: top.name().to_string(),
                open_tasks: top.open_task_count(),
            });
        }
        self.memos.pop().ok_or(StackError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.memos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.memos.len()
    }
}
