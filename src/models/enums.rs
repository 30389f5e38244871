//! Enums used throughout the Mensa widget
//!
//! This module contains the label and state types shared by the filter
//! and the renderer.

use std::fmt;

use super::MenuLine;

/// Short label shown in front of a serving line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayLabel {
    Known(&'static str), // Category found in the display-name table
    Unmapped,            // Category passed the filter but has no table entry
}

impl DisplayLabel {
    pub fn is_unmapped(&self) -> bool {
        matches!(self, DisplayLabel::Unmapped)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayLabel::Known(label) => label,
            DisplayLabel::Unmapped => "?",
        }
    }
}

impl fmt::Display for DisplayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the widget body shows for the display date
#[derive(Debug, Clone, PartialEq)]
pub enum MenuState {
    Closed,
    Open(Vec<MenuLine>),
}

impl MenuState {
    pub fn is_closed(&self) -> bool {
        matches!(self, MenuState::Closed)
    }

    /// Lines that have at least one meal left after filtering
    pub fn visible_lines(&self) -> impl Iterator<Item = &MenuLine> {
        let lines: &[MenuLine] = match self {
            MenuState::Closed => &[],
            MenuState::Open(lines) => lines,
        };
        lines.iter().filter(|line| !line.meals.is_empty())
    }
}
