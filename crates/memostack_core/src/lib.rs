//! Core domain logic for the memo stack.
//! This crate is the single source of truth for memo/task invariants.

pub mod logging;
pub mod model;
pub mod render;
pub mod stack;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::memo::{DuplicateTaskError, Memo, MemoError, MemoResult};
pub use model::task::{Task, TaskId};
pub use render::memo_formatter::{render_memo, MemoFormatter};
pub use stack::memo_stack::{MemoStack, StackError, StackResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
