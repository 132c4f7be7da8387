//! Diagnostic output. Everything here goes to stderr: stdout is reserved for
//! the machine-readable result line.

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_status(message: &str) {
    eprintln!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}
