//! Memo domain model.
//!
//! # Responsibility
//! - Own an ordered list of unique tasks under one name.
//! - Translate 1-based task ids into list positions.
//!
//! # Invariants
//! - Tasks are unique by `TaskId`; insertion order is preserved.
//! - The task list is only reachable through `Memo` methods.
//! - A memo without tasks counts as completed.
//! - Out-of-range task ids are reported as `MemoError::InvalidTaskId`
//!   and never mutate state.

use crate::model::task::{Task, TaskId};
use crate::render::memo_formatter::render_memo;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MemoResult<T> = Result<T, MemoError>;

/// Errors for task lookups inside one memo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoError {
    /// No task sits at this 1-based position.
    InvalidTaskId(usize),
}

impl Display for MemoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTaskId(task_id) => write!(f, "There is no task with id '{task_id}'."),
        }
    }
}

impl Error for MemoError {}

/// Decode-time rejection of a memo that breaks task uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTaskError {
    pub task_id: TaskId,
}

impl Display for DuplicateTaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "duplicate task id in memo: {}", self.task_id)
    }
}

impl Error for DuplicateTaskError {}

/// Named, ordered collection of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MemoRecord")]
pub struct Memo {
    name: String,
    tasks: Vec<Task>,
}

/// Unchecked wire shape of a memo.
#[derive(Deserialize)]
struct MemoRecord {
    name: String,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl TryFrom<MemoRecord> for Memo {
    type Error = DuplicateTaskError;

    fn try_from(record: MemoRecord) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(record.tasks.len());
        for task in &record.tasks {
            if !seen.insert(task.id()) {
                return Err(DuplicateTaskError { task_id: task.id() });
            }
        }
        Ok(Self {
            name: record.name,
            tasks: record.tasks,
        })
    }
}

impl Memo {
    /// Creates an empty memo.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// Creates a memo pre-populated with `tasks`.
    ///
    /// Repeated tasks are dropped the same way `add_task` drops them.
    pub fn with_tasks(name: impl Into<String>, tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut memo = Self::new(name);
        for task in tasks {
            memo.add_task(task);
        }
        memo
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of tasks that are not completed yet.
    pub fn open_task_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_completed()).count()
    }

    /// Appends `task` unless it is absent or already part of this memo.
    ///
    /// Returns whether the task was appended.
    pub fn add_task(&mut self, task: impl Into<Option<Task>>) -> bool {
        let Some(task) = task.into() else {
            return false;
        };
        if self.contains(&task) {
            return false;
        }
        self.tasks.push(task);
        true
    }

    /// Removes the task with the same identity as `task`, if present.
    pub fn remove_task(&mut self, task: &Task) -> Option<Task> {
        let index = self
            .tasks
            .iter()
            .position(|existing| existing.id() == task.id())?;
        Some(self.tasks.remove(index))
    }

    /// Completes the task at 1-based position `task_id`.
    ///
    /// # Errors
    /// - `MemoError::InvalidTaskId` when `task_id` is 0 or past the last task.
    pub fn complete_task(&mut self, task_id: usize) -> MemoResult<()> {
        let index = self.index_of(task_id)?;
        self.tasks[index].complete();
        Ok(())
    }

    /// Returns the task at 1-based position `task_id`.
    ///
    /// # Errors
    /// - `MemoError::InvalidTaskId` when `task_id` is 0 or past the last task.
    pub fn get_task(&self, task_id: usize) -> MemoResult<&Task> {
        let index = self.index_of(task_id)?;
        Ok(&self.tasks[index])
    }

    /// Iterates `(task_id, task)` pairs in current order, ids starting at 1.
    pub fn list_id_task_tuples(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| (index + 1, task))
    }

    /// Returns whether every task is done. Vacuously true without tasks.
    pub fn is_completed(&self) -> bool {
        self.tasks.iter().all(Task::is_completed)
    }

    /// Renders this memo as a bordered text box.
    pub fn render(&self) -> String {
        render_memo(self)
    }

    fn contains(&self, task: &Task) -> bool {
        self.tasks.iter().any(|existing| existing.id() == task.id())
    }

    fn index_of(&self, task_id: usize) -> MemoResult<usize> {
        if (1..=self.tasks.len()).contains(&task_id) {
            Ok(task_id - 1)
        } else {
            Err(MemoError::InvalidTaskId(task_id))
        }
    }
}

impl Display for Memo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
