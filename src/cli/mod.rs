//! CLI argument parsing for the Mensa widget.

mod args;

pub use args::Args;
