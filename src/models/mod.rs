//! Data models for the Mensa widget
//!
//! This module contains the core data structures:
//! - Meal records as delivered by the OpenMensa API
//! - Grouped menu lines produced by the filter
//! - Day state and the assembled widget model

pub mod day;
pub mod enums;
pub mod line;
pub mod meal;

// Re-exports for convenient access
pub use day::{DayState, WidgetModel};
pub use enums::{DisplayLabel, MenuState};
pub use line::MenuLine;
pub use meal::MealRecord;
