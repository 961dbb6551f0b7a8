//! Utility functions for common operations.

use chrono::Datelike;

/// Calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Footer copyright line
pub fn copyright_line(year: i32, name: &str) -> String {
    format!("© {} {} - Built with Rust & ratatui", year, name)
}
