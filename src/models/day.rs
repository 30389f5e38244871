//! Day state from the OpenMensa `/days/{date}` endpoint and the widget model
//! assembled from it.

use chrono::NaiveDate;
use serde::Deserialize;

use super::MenuState;

/// Opening state for a single day
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DayState {
    #[serde(default)]
    pub date: Option<String>,
    pub closed: bool,
}

/// Everything the renderer needs for one run
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetModel {
    pub date: NaiveDate,
    pub title: String,
    pub state: MenuState,
    /// Raw favicon bytes, if the icon could be fetched
    pub icon: Option<Vec<u8>>,
}

impl WidgetModel {
    pub fn has_icon(&self) -> bool {
        self.icon.as_ref().is_some_and(|bytes| !bytes.is_empty())
    }
}
