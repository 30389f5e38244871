//! UI module for mensa-widget
//!
//! This module renders the widget model, either as a ratatui card for the
//! interactive preview or as plain text for `--once`.

mod helpers;
mod plain;
mod widget;

pub use helpers::{label_cell, truncate_text};
pub use plain::render_plain;
pub use widget::{label_width, render_widget_card};
