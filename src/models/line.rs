//! Menu lines: meals grouped by serving counter.

use super::{DisplayLabel, MealRecord};

/// A serving line with the meals offered there, in encounter order
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLine {
    /// Full upstream category, unique within one result
    pub name: String,
    pub display_name: DisplayLabel,
    pub meals: Vec<MealRecord>,
}

impl MenuLine {
    pub fn new(name: &str, display_name: DisplayLabel) -> Self {
        Self {
            name: name.to_string(),
            display_name,
            meals: Vec::new(),
        }
    }

    pub fn has_meal_named(&self, name: &str) -> bool {
        self.meals.iter().any(|m| m.name == name)
    }

    pub fn meal_names(&self) -> impl Iterator<Item = &str> {
        self.meals.iter().map(|m| m.name.as_str())
    }
}
