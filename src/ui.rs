//! diagnostics for the terminal
//!
//! stdout carries the prompt fragment and nothing else, so every message
//! here goes to stderr

#[macro_export]
macro_rules! warning {
    // format string literal (with or without inline formatting)
    ($fmt:literal $(, $($arg:tt)*)?) => {{
        use colored::Colorize;
        use std::io::{self, Write};
        let message = format!($fmt $(, $($arg)*)?);
        let _ = writeln!(
            io::stderr(),
            "{}",
            format!("{}: {}", $crate::constants::PROGRAM_NAME, message).yellow()
        );
    }};
}

#[macro_export]
macro_rules! error {
    // format string literal (with or without inline formatting)
    ($fmt:literal $(, $($arg:tt)*)?) => {{
        use colored::Colorize;
        use std::io::{self, Write};
        let message = format!($fmt $(, $($arg)*)?);
        let _ = writeln!(
            io::stderr(),
            "{}",
            format!("{}: {}", $crate::constants::PROGRAM_NAME, message).red()
        );
    }};
}
