//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터.
pub struct ConsoleReporter {
    interactive: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        println!();
        println!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        if self.interactive {
            println!("[{}] {}", colorize_scope(scope), message);
        } else {
            println!("[{:<12}] {}", scope, message);
        }
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}

fn colorize_scope(scope: &str) -> String {
    let padded = format!("{scope:<12}");
    match scope {
        "dry-run" => format!("\x1b[33m{padded}\x1b[0m"),
        "created" | "updated" => format!("\x1b[32m{padded}\x1b[0m"),
        "error" => format!("\x1b[31m{padded}\x1b[0m"),
        _ => padded,
    }
}
