//! Bordered text box layout for one memo.
//!
//! # Responsibility
//! - Lay out a memo title and its numbered tasks inside a `*` frame.
//! - Hard-wrap task descriptions to the column left after borders and ids.
//!
//! # Invariants
//! - Every emitted line is exactly `width` characters wide, where
//!   `width = max(name_chars + RESERVED_SPACE, MIN_MEMO_WIDTH)`.
//! - Widths are counted in `char`s, never in bytes.
//! - Task ids are right-aligned to the digit width of the task count.
//! - Output lines are joined by `\n` without a trailing newline.

use crate::model::memo::Memo;
use crate::model::task::Task;

const BORDER: &str = "**";
const PADDING: &str = "  ";
const ID_MARKER: &str = "[]";
const RESERVED_SPACE: usize = BORDER.len() + PADDING.len() + ID_MARKER.len();
const MIN_MEMO_WIDTH: usize = 25;
const FRAME_CHAR: char = '*';

/// Renders `memo` as a bordered text box.
pub fn render_memo(memo: &Memo) -> String {
    MemoFormatter::new(memo).format()
}

/// Layout state for rendering one memo snapshot.
pub struct MemoFormatter<'memo> {
    memo: &'memo Memo,
    width: usize,
    id_digits: usize,
}

impl<'memo> MemoFormatter<'memo> {
    pub fn new(memo: &'memo Memo) -> Self {
        Self {
            memo,
            width: (char_len(memo.name()) + RESERVED_SPACE).max(MIN_MEMO_WIDTH),
            id_digits: digit_count(memo.task_count()),
        }
    }

    /// Total line width in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Characters of task description that fit on one line.
    pub fn description_width(&self) -> usize {
        self.width
            .saturating_sub(self.id_digits + RESERVED_SPACE + 1)
            .max(1)
    }

    pub fn format(&self) -> String {
        let decoration = FRAME_CHAR.to_string().repeat(self.width);
        let mut lines = vec![decoration.clone(), self.title_line(), decoration.clone()];

        for (task_id, task) in self.memo.list_id_task_tuples() {
            self.append_task_lines(task_id, task, &mut lines);
        }

        lines.push(decoration);
        lines.join("\n")
    }

    fn title_line(&self) -> String {
        let name = self.memo.name();
        let slack = self.width.saturating_sub(char_len(name) + 2);
        let left = slack / 2;
        let right = slack - left;
        format!(
            "{FRAME_CHAR}{}{name}{}{FRAME_CHAR}",
            " ".repeat(left),
            " ".repeat(right)
        )
    }

    fn append_task_lines(&self, task_id: usize, task: &Task, lines: &mut Vec<String>) {
        let chunks = slice_description(task.description(), self.description_width());
        for (index, chunk) in chunks.into_iter().enumerate() {
            let line = if index == 0 {
                self.first_task_line(task_id, chunk)
            } else {
                self.continuation_line(chunk)
            };
            lines.push(line);
        }
    }

    fn first_task_line(&self, task_id: usize, chunk: &str) -> String {
        let leading = self.id_digits.saturating_sub(digit_count(task_id));
        let prefix_len = leading + digit_count(task_id) + ID_MARKER.len();
        let trailing = self.trailing_spaces(prefix_len, char_len(chunk));
        format!(
            "* {}[{task_id}] {chunk}{} *",
            " ".repeat(leading),
            " ".repeat(trailing)
        )
    }

    fn continuation_line(&self, chunk: &str) -> String {
        let leading = self.id_digits + ID_MARKER.len();
        let trailing = self.trailing_spaces(leading, char_len(chunk));
        format!("* {} {chunk}{} *", " ".repeat(leading), " ".repeat(trailing))
    }

    fn trailing_spaces(&self, prefix_len: usize, text_len: usize) -> usize {
        self.width
            .saturating_sub(prefix_len + text_len + PADDING.len() + BORDER.len() + 1)
    }
}

/// Splits `text` into consecutive slices of at most `width` chars.
///
/// Empty text yields no slices, so its task renders no line.
fn slice_description(text: &str, width: usize) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let width = width.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut taken = 0;
    for (offset, _) in text.char_indices() {
        if taken == width {
            chunks.push(&text[start..offset]);
            start = offset;
            taken = 0;
        }
        taken += 1;
    }
    chunks.push(&text[start..]);
    chunks
}

fn digit_count(value: usize) -> usize {
    value.to_string().len()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::{digit_count, slice_description, RESERVED_SPACE};

    #[test]
    fn reserved_space_covers_border_padding_and_marker() {
        assert_eq!(RESERVED_SPACE, 6);
    }

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(100), 3);
    }

    #[test]
    fn slice_description_cuts_mid_word() {
        assert_eq!(
            slice_description("abcdefghij", 4),
            vec!["abcd", "efgh", "ij"]
        );
    }

    #[test]
    fn slice_description_keeps_exact_multiple_without_empty_tail() {
        assert_eq!(slice_description("abcdef", 3), vec!["abc", "def"]);
    }

    #[test]
    fn slice_description_counts_chars_not_bytes() {
        assert_eq!(slice_description("äöüß", 2), vec!["äö", "üß"]);
    }

    #[test]
    fn slice_description_of_empty_text_is_empty() {
        assert!(slice_description("", 5).is_empty());
    }
}
