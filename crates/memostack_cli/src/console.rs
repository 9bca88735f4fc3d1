//! Interactive memo console.
//!
//! # Responsibility
//! - Drive one `MemoStack` from line-oriented user input.
//! - Turn core errors into user-facing messages.
//! - Emit metadata-only log events for state changes.
//!
//! # Invariants
//! - Memo names and task descriptions are never written to logs.
//! - Core errors never end the loop; only `quit` or end of input do.

use crate::command::{parse_command, Command, TaskIdArg};
use log::{debug, info, warn};
use memostack_core::{Memo, MemoError, MemoStack, StackError, Task};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "memostack> ";

const EMPTY_STACK_MESSAGE: &str = "The memo stack is empty.";
const UNKNOWN_COMMAND_MESSAGE: &str = "We're sorry. But the command you entered is unknown.";
const HELP_MESSAGE: &str = "Available commands:
\thelp (or h): Print this command list.
\tquit (or q): Quit the application.
\tprint (or p): Print the top memo if the stack is not empty.
\tmemo (or m): Creates a memo and puts it at the top of the stack.
\ttask (or t): Creates a new task for the top memo.
\tpop: Removes the top memo once all of its tasks are completed.
\tcomplete (or c) <task id>: Completes the task with the given task id of the top memo, i.e. 'complete 1'.
\texport (or e): Prints the top memo as JSON.";

/// Console session state: one stack plus its reader and writer.
pub struct MemoConsole<R, W> {
    stack: MemoStack,
    is_running: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MemoConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            stack: MemoStack::new(),
            is_running: true,
            input,
            output,
        }
    }

    /// Runs the input loop until `quit` or end of input.
    ///
    /// # Errors
    /// - Returns reader/writer I/O failures unchanged.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Started the memostack application.\nType 'h' or 'help' to list all commands."
        )?;
        info!("event=console_start module=cli status=ok");

        while self.is_running {
            let Some(line) = self.prompt(PROMPT)? else {
                self.quit();
                break;
            };
            self.execute(parse_command(&line))?;
        }

        info!(
            "event=console_stop module=cli status=ok remaining_memos={}",
            self.stack.len()
        );
        Ok(())
    }

    /// Applies one parsed command.
    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Help => writeln!(self.output, "{HELP_MESSAGE}"),
            Command::Quit => {
                self.quit();
                Ok(())
            }
            Command::Memo => self.read_memo(),
            Command::Task => self.read_task(),
            Command::Print => self.print_top_memo(),
            Command::Pop => self.pop_memo(),
            Command::Complete(arg) => self.complete_task(arg),
            Command::Export => self.export_top_memo(),
            Command::Unknown => {
                debug!("event=command_rejected module=cli status=unknown");
                writeln!(self.output, "{UNKNOWN_COMMAND_MESSAGE}")
            }
        }
    }

    fn quit(&mut self) {
        self.is_running = false;
    }

    /// Prints `prompt` and reads one line; `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn read_memo(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt(&format!("{PROMPT}Please enter the new memo's name: "))?
        else {
            self.quit();
            return Ok(());
        };

        writeln!(
            self.output,
            "Your memo \"{name}\" was created successfully. You may now add tasks to it."
        )?;
        self.stack.push(Memo::new(name));
        info!(
            "event=memo_pushed module=cli status=ok depth={}",
            self.stack.len()
        );
        Ok(())
    }

    fn read_task(&mut self) -> io::Result<()> {
        if self.stack.is_empty() {
            return writeln!(
                self.output,
                "The memo stack is empty! Please create a memo first."
            );
        }

        let Some(description) =
            self.prompt(&format!("{PROMPT}Please enter a new task description: "))?
        else {
            self.quit();
            return Ok(());
        };

        match self.stack.peek_mut() {
            Ok(memo) => {
                memo.add_task(Task::new(description));
                info!(
                    "event=task_added module=cli status=ok task_count={}",
                    memo.task_count()
                );
                Ok(())
            }
            Err(err) => self.report_stack_error(&err),
        }
    }

    fn print_top_memo(&mut self) -> io::Result<()> {
        match self.stack.peek() {
            Ok(memo) => writeln!(self.output, "{memo}"),
            Err(err) => self.report_stack_error(&err),
        }
    }

    fn pop_memo(&mut self) -> io::Result<()> {
        match self.stack.pop() {
            Ok(memo) => {
                info!(
                    "event=memo_popped module=cli status=ok task_count={} depth={}",
                    memo.task_count(),
                    self.stack.len()
                );
                writeln!(
                    self.output,
                    "Well done! You just finished the following memo. Keep up the good work!"
                )?;
                writeln!(self.output, "{memo}")
            }
            Err(err) => self.report_stack_error(&err),
        }
    }

    fn complete_task(&mut self, arg: TaskIdArg) -> io::Result<()> {
        let task_id = match arg {
            TaskIdArg::Id(task_id) => Some(task_id),
            TaskIdArg::OutOfRange(_) => None,
            TaskIdArg::NotANumber(_) => {
                return writeln!(
                    self.output,
                    "The task id you entered is no number!\n\
                     Please pick the task you want to finish and enter 'complete' followed by \
                     the task id displayed next to the task you want to finish, i.e. 'complete 1'."
                );
            }
        };

        let memo = match self.stack.peek_mut() {
            Ok(memo) => memo,
            Err(err) => return self.report_stack_error(&err),
        };

        let result = match task_id {
            Some(task_id) => memo.complete_task(task_id),
            None => Err(MemoError::InvalidTaskId(0)),
        };
        match result {
            Ok(()) => {
                info!(
                    "event=task_completed module=cli status=ok open_tasks={}",
                    memo.open_task_count()
                );
                Ok(())
            }
            Err(MemoError::InvalidTaskId(_)) => {
                warn!("event=task_complete_rejected module=cli status=invalid_task_id");
                writeln!(
                    self.output,
                    "The task id you entered does not exist!\n\
                     Please enter a valid task id. You'll find them next to the task you want \
                     to complete."
                )
            }
        }
    }

    fn export_top_memo(&mut self) -> io::Result<()> {
        let memo = match self.stack.peek() {
            Ok(memo) => memo,
            Err(err) => return self.report_stack_error(&err),
        };

        match serde_json::to_string_pretty(memo) {
            Ok(json) => writeln!(self.output, "{json}"),
            Err(err) => {
                warn!("event=memo_export module=cli status=error");
                writeln!(self.output, "Failed to export the memo: {err}")
            }
        }
    }

    fn report_stack_error(&mut self, err: &StackError) -> io::Result<()> {
        match err {
            StackError::Empty => writeln!(self.output, "{EMPTY_STACK_MESSAGE}"),
            StackError::MemoNotCompleted { open_tasks, .. } => {
                warn!(
                    "event=memo_pop_rejected module=cli status=not_completed open_tasks={open_tasks}"
                );
                writeln!(
                    self.output,
                    "You cannot remove this memo - it is not complete! \
                     You must finish all tasks of the memo first."
                )
            }
        }
    }
}
