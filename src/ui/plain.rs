//! Plain-text rendering for `--once`

use std::fmt::Write;

use super::{label_cell, label_width};
use crate::models::{MenuState, WidgetModel};

/// Render the widget as text: title line, then either "Geschlossen" or one
/// row per meal with the line label in front of its first meal
pub fn render_plain(model: &WidgetModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", model.title);

    match &model.state {
        MenuState::Closed => {
            let _ = writeln!(out, "Geschlossen");
        }
        MenuState::Open(_) => {
            let label_col = label_width(&model.state);
            for line in model.state.visible_lines() {
                for (i, meal) in line.meal_names().enumerate() {
                    let label = if i == 0 {
                        label_cell(line.display_name.label(), label_col)
                    } else {
                        " ".repeat(label_col)
                    };
                    let _ = writeln!(out, "{}{}", label, meal);
                }
            }
        }
    }
    out
}
