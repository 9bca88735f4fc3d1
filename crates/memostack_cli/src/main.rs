//! Interactive memo stack console.
//!
//! # Responsibility
//! - Resolve CLI/env configuration and start file logging when requested.
//! - Run one console session over stdin/stdout.

mod command;
mod console;

use clap::Parser;
use console::MemoConsole;
use memostack_core::{core_version, default_log_level, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

/// Track tasks in a stack of memos.
#[derive(Parser, Debug)]
#[command(name = "memostack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "MEMOSTACK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "MEMOSTACK_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("memostack: logging disabled: {err}");
        }
    }
    log::debug!("event=cli_start module=cli status=ok version={}", core_version());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = MemoConsole::new(stdin.lock(), stdout.lock());
    match console.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=console_io module=cli status=error");
            eprintln!("memostack: {err}");
            ExitCode::FAILURE
        }
    }
}
