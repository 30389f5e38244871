//! Widget card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::{label_cell, truncate_text};
use crate::models::{MenuLine, MenuState, WidgetModel};
use crate::theme::{BG_WIDGET, BORDER_SUBTLE, RED_CLOSED, SW_RED, TEXT_PRIMARY};

/// Width of the label column: longest visible label plus ":" and a space
pub fn label_width(state: &MenuState) -> usize {
    state
        .visible_lines()
        .map(|line| line.display_name.label().chars().count())
        .max()
        .unwrap_or(0)
        + 2
}

/// Render the whole widget card (title row + menu body) into `area`
pub fn render_widget_card(area: Rect, model: &WidgetModel, frame: &mut Frame) {
    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(BG_WIDGET).fg(TEXT_PRIMARY));

    let inner_area = card_block.inner(area);
    frame.render_widget(card_block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title row
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Menu content
        ])
        .split(inner_area);

    frame.render_widget(title_paragraph(model), layout[0]);

    match &model.state {
        MenuState::Closed => render_closed(layout[2], frame),
        MenuState::Open(_) => {
            let lines = menu_lines(&model.state, layout[2].width as usize);
            frame.render_widget(Paragraph::new(lines), layout[2]);
        }
    }
}

fn title_paragraph(model: &WidgetModel) -> Paragraph<'static> {
    let mut spans = Vec::new();
    if model.has_icon() {
        spans.push(Span::styled("▣ ", Style::default().fg(SW_RED)));
    }
    spans.push(Span::styled(
        model.title.clone(),
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ));
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn render_closed(area: Rect, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let closed = Paragraph::new(Line::from(Span::styled(
        "Geschlossen",
        Style::default().fg(RED_CLOSED).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(closed, layout[1]);
}

/// One row per meal; the line label sits in front of its first meal
fn menu_lines(state: &MenuState, width: usize) -> Vec<Line<'static>> {
    let label_col = label_width(state);
    let meal_col = width.saturating_sub(label_col);
    let mut rows = Vec::new();

    for line in state.visible_lines() {
        rows.extend(line_rows(line, label_col, meal_col));
    }
    rows
}

fn line_rows(line: &MenuLine, label_col: usize, meal_col: usize) -> Vec<Line<'static>> {
    line.meal_names()
        .enumerate()
        .map(|(i, meal)| {
            let label = if i == 0 {
                label_cell(line.display_name.label(), label_col)
            } else {
                " ".repeat(label_col)
            };
            Line::from(vec![
                Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(truncate_text(meal, meal_col)),
            ])
        })
        .collect()
}
