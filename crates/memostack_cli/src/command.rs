//! Console command parsing.
//!
//! # Responsibility
//! - Map one raw input line to a typed `Command`.
//!
//! # Invariants
//! - Parsing is case-insensitive and ignores surrounding whitespace.
//! - Parsing never fails; unrecognized input becomes `Command::Unknown`.

use once_cell::sync::Lazy;
use regex::Regex;

static COMPLETE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:c|complete) +(\S+)$").expect("valid complete command regex")
});
static SIGNED_INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+$").expect("valid integer regex"));

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// Create a memo and push it on the stack.
    Memo,
    /// Add a task to the top memo.
    Task,
    Print,
    Pop,
    Complete(TaskIdArg),
    /// Print the top memo as JSON.
    Export,
    Unknown,
}

/// Task id argument of `complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIdArg {
    Id(usize),
    /// An integer that cannot address any task (negative or too large).
    OutOfRange(String),
    NotANumber(String),
}

/// Parses one line of user input.
pub fn parse_command(line: &str) -> Command {
    let normalized = line.trim().to_lowercase();

    match normalized.as_str() {
        "h" | "help" => Command::Help,
        "q" | "quit" => Command::Quit,
        "m" | "memo" => Command::Memo,
        "t" | "task" => Command::Task,
        "p" | "print" => Command::Print,
        "pop" => Command::Pop,
        "e" | "export" => Command::Export,
        other => parse_complete(other).unwrap_or(Command::Unknown),
    }
}

fn parse_complete(input: &str) -> Option<Command> {
    let raw = COMPLETE_RE.captures(input)?.get(1)?.as_str();

    let arg = match raw.parse::<usize>() {
        Ok(task_id) => TaskIdArg::Id(task_id),
        Err(_) if SIGNED_INTEGER_RE.is_match(raw) => TaskIdArg::OutOfRange(raw.to_string()),
        Err(_) => TaskIdArg::NotANumber(raw.to_string()),
    };
    Some(Command::Complete(arg))
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, TaskIdArg};

    #[test]
    fn short_and_long_forms_are_equivalent() {
        for (short, long, expected) in [
            ("h", "help", Command::Help),
            ("q", "quit", Command::Quit),
            ("m", "memo", Command::Memo),
            ("t", "task", Command::Task),
            ("p", "print", Command::Print),
            ("e", "export", Command::Export),
        ] {
            assert_eq!(parse_command(short), expected);
            assert_eq!(parse_command(long), expected);
        }
        assert_eq!(parse_command("pop"), Command::Pop);
    }

    #[test]
    fn parsing_ignores_case_and_surrounding_whitespace() {
        assert_eq!(parse_command("  HELP \n"), Command::Help);
        assert_eq!(parse_command("Pop"), Command::Pop);
    }

    #[test]
    fn complete_accepts_numeric_id() {
        assert_eq!(parse_command("c 3"), Command::Complete(TaskIdArg::Id(3)));
        assert_eq!(
            parse_command("complete 12"),
            Command::Complete(TaskIdArg::Id(12))
        );
    }

    #[test]
    fn complete_reports_non_numeric_and_negative_ids() {
        assert_eq!(
            parse_command("c one"),
            Command::Complete(TaskIdArg::NotANumber("one".to_string()))
        );
        assert_eq!(
            parse_command("complete -1"),
            Command::Complete(TaskIdArg::OutOfRange("-1".to_string()))
        );
    }

    #[test]
    fn malformed_complete_is_unknown() {
        assert_eq!(parse_command("c"), Command::Unknown);
        assert_eq!(parse_command("complete"), Command::Unknown);
        assert_eq!(parse_command("c 1 2"), Command::Unknown);
        assert_eq!(parse_command("cx 1"), Command::Unknown);
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(parse_command(""), Command::Unknown);
        assert_eq!(parse_command("popp"), Command::Unknown);
    }
}
