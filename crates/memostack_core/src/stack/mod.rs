//! Memo stack with a completion gate on removal.
//!
//! # Responsibility
//! - Keep memos in last-in-first-out order.
//! - Refuse to discard a memo that still has open tasks.
//!
//! # Invariants
//! - Rejected pops leave the stack untouched.

pub mod memo_stack;
