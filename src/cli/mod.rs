//! CLI argument parsing for folio-tui.

mod args;

pub use args::{parse_args, VERSION};
