//! Application state and the fetch pipeline for the Mensa widget.
//!
//! `load_widget` runs one sequential pass: pick the date, fetch the day
//! state, fetch and filter the meals when the canteen is open. `App` wraps
//! the result for the interactive preview.

use tracing::{info, warn};

use crate::client::MenuClient;
use crate::date::{widget_title, DateTarget};
use crate::error::Result;
use crate::filter::filter_meal_menu;
use crate::models::{MenuState, WidgetModel};

/// Build the widget model for `target`. Any failure of the day or meal
/// request, or of the filter, aborts the run.
pub async fn load_widget(client: &MenuClient, target: DateTarget) -> Result<WidgetModel> {
    let date = target.resolve();
    info!(%date, ?target, "selected display date");

    // Decoration only; the widget renders without it
    let icon = match client.fetch_icon().await {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            warn!(error = %err, "could not load icon");
            None
        }
    };

    let day = client.fetch_day(date).await?;
    let state = if day.closed {
        MenuState::Closed
    } else {
        let meals = client.fetch_meals(date).await?;
        MenuState::Open(filter_meal_menu(meals)?)
    };

    info!(%date, closed = state.is_closed(), "widget ready");
    Ok(WidgetModel {
        date,
        title: widget_title(date),
        state,
        icon,
    })
}

/// Application state
pub struct App {
    pub client: MenuClient,
    pub target: DateTarget,
    pub widget: WidgetModel,
    pub menu_url: String,
    pub should_quit: bool,
    // Print the menu page URL after leaving the TUI
    pub open_menu_url: bool,
    pub reload_count: u32,
}

impl App {
    pub fn new(client: MenuClient, target: DateTarget, widget: WidgetModel, menu_url: String) -> Self {
        Self {
            client,
            target,
            widget,
            menu_url,
            should_quit: false,
            open_menu_url: false,
            reload_count: 0,
        }
    }

    /// Rerun the pipeline; the date is selected again from the clock
    pub async fn reload(&mut self) -> Result<()> {
        self.widget = load_widget(&self.client, self.target).await?;
        self.reload_count += 1;
        Ok(())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn open_menu(&mut self) {
        self.open_menu_url = true;
        self.should_quit = true;
    }
}
