mod app;
mod cli;
mod client;
mod config;
mod date;
mod error;
mod event;
mod filter;
mod logging;
mod models;
mod theme;
mod ui;

use anyhow::Context;
use clap::Parser;
use ratatui::{
    prelude::*,
    widgets::Paragraph,
    DefaultTerminal,
};
use tracing::{error, info};

use crate::app::{load_widget, App};
use crate::cli::Args;
use crate::client::MenuClient;
use crate::config::Settings;
use crate::logging::{init_logger, LogTarget};
use crate::theme::{KEY_HINT, TEXT_MUTED};

/// Card size, roughly a medium home-screen widget
const CARD_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 16;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_target = if args.once { LogTarget::Stderr } else { LogTarget::File };
    let _log_guard = init_logger(log_target).context("failed to initialize logging")?;

    let mut settings = Settings::load(args.config.as_deref()).context("failed to load settings")?;
    if let Some(canteen) = args.canteen {
        settings.api.canteen_id = canteen;
    }
    info!(canteen = settings.api.canteen_id, base_url = %settings.api.base_url, "starting");

    let client = MenuClient::new(&settings).context("failed to build HTTP client")?;
    let target = args.target();

    // Errors here print before the terminal is taken over
    let widget = load_widget(&client, target)
        .await
        .inspect_err(|err| error!(error = %err, "loading menu failed"))
        .context("failed to load menu")?;

    if args.once {
        print!("{}", ui::render_plain(&widget));
        return Ok(());
    }

    let app = App::new(client, target, widget, settings.widget.menu_url.clone());
    let app = start_tui(app).await?;

    if app.open_menu_url {
        println!("{}", app.menu_url);
    }
    Ok(())
}

async fn start_tui(mut app: App) -> anyhow::Result<App> {
    // Initialize terminal (ratatui::init handles raw mode + alternate screen)
    let terminal = ratatui::init();

    let result = run_app(terminal, &mut app).await;

    // Restore terminal (always, even on error)
    ratatui::restore();

    result
        .inspect_err(|err| error!(error = %err, "widget loop failed"))
        .context("failed to reload menu")?;
    Ok(app)
}

async fn run_app(mut terminal: DefaultTerminal, app: &mut App) -> error::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        if app.should_quit {
            break;
        }

        // Poll events (non-blocking with 100ms timeout)
        if let Some(evt) = event::poll_event(100)? {
            if event::handle_event(app, evt).await? {
                info!(reloads = app.reload_count, date = %app.widget.date, "widget reloaded");
            }
        }
    }
    Ok(())
}

fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Create main layout: centered card + key hints
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(CARD_HEIGHT.min(area.height.saturating_sub(1))),
            Constraint::Length(1), // Bottom bar (single line)
            Constraint::Fill(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(CARD_WIDTH.min(area.width)),
            Constraint::Fill(1),
        ]);

    let card_area = columns.split(rows[1])[1];
    let hints_area = columns.split(rows[2])[1];

    ui::render_widget_card(card_area, &app.widget, frame);

    let hint = |key: &'static str, label: &'static str| {
        [
            Span::styled(key, Style::default().fg(KEY_HINT).add_modifier(Modifier::BOLD)),
            Span::styled(label, Style::default().fg(TEXT_MUTED)),
        ]
    };
    let keybindings: Vec<Span> = [hint(" r ", "Reload"), hint(" o ", "Menu page"), hint(" q ", "Quit")]
        .into_iter()
        .flatten()
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(keybindings)).alignment(Alignment::Center),
        hints_area,
    );
}
