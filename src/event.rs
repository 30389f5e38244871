use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

use crate::app::App;
use crate::error::Result;

/// Poll for keyboard events with timeout
pub fn poll_event(timeout_ms: u64) -> Result<Option<Event>> {
    if event::poll(Duration::from_millis(timeout_ms))? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle keyboard input, returns true if the widget was reloaded
pub async fn handle_event(app: &mut App, event: Event) -> Result<bool> {
    let Event::Key(key) = event else {
        // Resize handled by ratatui automatically
        return Ok(false);
    };

    // Only handle key press events (not release)
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('r') => {
            app.reload().await?;
            Ok(true)
        }
        KeyCode::Char('o') | KeyCode::Enter => {
            app.open_menu();
            Ok(false)
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit();
            Ok(false)
        }
        _ => Ok(false),
    }
}
