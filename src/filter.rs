//! Menu filtering: keep the main serving lines, drop side dishes, clean up
//! names and group what is left by line.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{trace, warn};

use crate::error::{MensaError, Result};
use crate::models::{DisplayLabel, MealRecord, MenuLine};

// ============================================================================
// Filter Table
// ============================================================================

/// A meal is kept only when its category contains one of these
pub const INCLUDED_CATEGORIES: [&str; 6] = [
    "Linie 1", "Linie 2", "Linie 3", "Linie 4", "Linie 5", "Pizza",
];

/// Meals whose name contains one of these are dropped (partial match)
pub const EXCLUDED_NAME_FRAGMENTS: [&str; 5] = [
    "Insalata",
    "Margherita",
    "Tagesdessert",
    "Blattsalat",
    "Tagessuppe",
];

/// Lines that sometimes list their options only as the first note
pub const NOTE_OPTION_CATEGORIES: [&str; 3] = ["Linie 3", "Linie 4", "Linie 5"];

/// Exact upstream category -> short label
pub const DISPLAY_NAMES: [(&str, &str); 6] = [
    ("Linie 1 Gut & Günstig", "1"),
    ("Linie 2 Vegane Linie", "2"),
    ("Linie 3", "3"),
    ("Linie 4", "4"),
    ("Linie 5", "5"),
    ("[pizza]werk Pizza 11-14 Uhr", "Pizza"),
];

const ACTION_PREFIX: &str = "Aktion";

static ACTION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"".*" (.+)"#).expect("static regex is valid"));

pub fn display_label(category: &str) -> DisplayLabel {
    DISPLAY_NAMES
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(DisplayLabel::Unmapped, |&(_, label)| DisplayLabel::Known(label))
}

fn is_included(category: &str) -> bool {
    INCLUDED_CATEGORIES.iter().any(|line| category.contains(line))
}

fn is_excluded(name: &str) -> bool {
    EXCLUDED_NAME_FRAGMENTS.iter().any(|fragment| name.contains(fragment))
}

fn lists_options_in_notes(category: &str) -> bool {
    NOTE_OPTION_CATEGORIES.iter().any(|line| category.contains(line))
}

/// Strip promotional prefixes: `Aktion "Tagesgericht" Schnitzel` -> `Schnitzel`
pub fn touch_up_name(name: &str) -> Result<String> {
    if !name.starts_with(ACTION_PREFIX) {
        return Ok(name.to_string());
    }
    ACTION_NAME
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| MensaError::MalformedActionName(name.to_string()))
}

/// Group the raw day menu into display lines.
///
/// Lines keep first-seen order and meals keep encounter order. A note-derived
/// meal is placed right before the record that carried the note. Lines whose
/// every candidate was excluded are still returned, with no meals.
pub fn filter_meal_menu(meals: Vec<MealRecord>) -> Result<Vec<MenuLine>> {
    let mut lines: Vec<MenuLine> = Vec::new();

    for mut meal in meals {
        if !is_included(&meal.category) {
            trace!(category = %meal.category, name = %meal.name, "skipping category");
            continue;
        }

        meal.name = touch_up_name(&meal.name)?;

        let index = match lines.iter().position(|line| line.name == meal.category) {
            Some(index) => index,
            None => {
                let label = display_label(&meal.category);
                if label.is_unmapped() {
                    warn!(category = %meal.category, "no display name for category");
                }
                lines.push(MenuLine::new(&meal.category, label));
                lines.len() - 1
            }
        };
        let line = &mut lines[index];

        if lists_options_in_notes(&meal.category) {
            if let Some(note) = meal.notes.first() {
                if !line.has_meal_named(note) {
                    line.meals.push(MealRecord::from_note(&meal.category, note));
                }
            }
        }

        if is_excluded(&meal.name) {
            trace!(name = %meal.name, "excluding meal");
            continue;
        }
        line.meals.push(meal);
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(line: &MenuLine) -> Vec<&str> {
        line.meal_names().collect()
    }

    #[test]
    fn test_empty_menu() {
        assert!(filter_meal_menu(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_excluded_category_dropped() {
        let meals = vec![
            MealRecord::new("Linie 1 Gut & Günstig", "Schnitzel", &[]),
            MealRecord::new("Linie 6", "Currywurst", &[]),
        ];
        let lines = filter_meal_menu(meals).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].display_name, DisplayLabel::Known("1"));
        assert_eq!(names(&lines[0]), vec!["Schnitzel"]);
    }

    #[test]
    fn test_unrelated_categories_dropped() {
        let meals = vec![
            MealRecord::new("Schnitzelbar", "Schnitzel", &[]),
            MealRecord::new("Cafeteria", "Kuchen", &[]),
            MealRecord::new("Linie 6 Update", "Bowl", &[]),
        ];
        assert!(filter_meal_menu(meals).unwrap().is_empty());
    }

    #[test]
    fn test_action_prefix_removed() {
        let meals = vec![MealRecord::new(
            "Linie 1 Gut & Günstig",
            "Aktion \"Tagesgericht\" Schnitzel mit Kartoffeln",
            &[],
        )];
        let lines = filter_meal_menu(meals).unwrap();
        assert_eq!(names(&lines[0]), vec!["Schnitzel mit Kartoffeln"]);
    }

    #[test]
    fn test_malformed_action_name_is_error() {
        let meals = vec![MealRecord::new("Linie 2 Vegane Linie", "Aktion Tofu", &[])];
        let err = filter_meal_menu(meals).unwrap_err();
        assert!(matches!(err, MensaError::MalformedActionName(ref n) if n == "Aktion Tofu"));
    }

    #[test]
    fn test_action_in_excluded_category_is_ignored() {
        let meals = vec![MealRecord::new("Cafeteria", "Aktion Kaffee", &[])];
        assert!(filter_meal_menu(meals).unwrap().is_empty());
    }

    #[test]
    fn test_touch_up_plain_name() {
        assert_eq!(touch_up_name("Linsensuppe").unwrap(), "Linsensuppe");
    }

    #[test]
    fn test_excluded_name_drops_meal_but_keeps_line() {
        let meals = vec![
            MealRecord::new("Linie 2 Vegane Linie", "Margherita Pizza", &[]),
            MealRecord::new("Linie 2 Vegane Linie", "Seitan Gyros", &[]),
        ];
        let lines = filter_meal_menu(meals).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(names(&lines[0]), vec!["Seitan Gyros"]);
    }

    #[test]
    fn test_only_excluded_meal_leaves_empty_line() {
        let meals = vec![MealRecord::new("Linie 2 Vegane Linie", "Margherita Pizza", &[])];
        let lines = filter_meal_menu(meals).unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].meals.is_empty());
    }

    #[test]
    fn test_every_excluded_fragment() {
        let meals = EXCLUDED_NAME_FRAGMENTS
            .iter()
            .map(|fragment| MealRecord::new("Linie 1 Gut & Günstig", &format!("Kleiner {fragment}"), &[]))
            .collect();
        let lines = filter_meal_menu(meals).unwrap();
        assert!(lines[0].meals.is_empty());
    }

    #[test]
    fn test_note_option_synthesized_once() {
        let meals = vec![
            MealRecord::new("Linie 3", "Pasta", &["Option A"]),
            MealRecord::new("Linie 3", "Gnocchi", &["Option A"]),
        ];
        let lines = filter_meal_menu(meals).unwrap();
        assert_eq!(names(&lines[0]), vec!["Option A", "Pasta", "Gnocchi"]);
    }

    #[test]
    fn test_note_option_only_first_note() {
        let meals = vec![MealRecord::new("Linie 4", "Reis", &["Curry", "scharf"])];
        let lines = filter_meal_menu(meals).unwrap();
        assert_eq!(names(&lines[0]), vec!["Curry", "Reis"]);
        assert!(lines[0].meals[0].notes.is_empty());
        assert_eq!(lines[0].meals[1].notes, vec!["Curry", "scharf"]);
    }

    #[test]
    fn test_note_option_survives_exclusion() {
        let meals = vec![MealRecord::new("Linie 5", "Tagessuppe", &["Kartoffelsuppe"])];
        let lines = filter_meal_menu(meals).unwrap();
        assert_eq!(names(&lines[0]), vec!["Kartoffelsuppe"]);
    }

    #[test]
    fn test_note_matching_existing_meal_not_duplicated() {
        let meals = vec![
            MealRecord::new("Linie 3", "Pasta", &[]),
            MealRecord::new("Linie 3", "Gnocchi", &["Pasta"]),
        ];
        let lines = filter_meal_menu(meals).unwrap();
        assert_eq!(names(&lines[0]), vec!["Pasta", "Gnocchi"]);
    }

    #[test]
    fn test_notes_ignored_on_other_lines() {
        let meals = vec![
            MealRecord::new("Linie 1 Gut & Günstig", "Schnitzel", &["Pommes"]),
            MealRecord::new("[pizza]werk Pizza 11-14 Uhr", "Pizza Salami", &["Rind"]),
        ];
        let lines = filter_meal_menu(meals).unwrap();
        assert_eq!(names(&lines[0]), vec!["Schnitzel"]);
        assert_eq!(names(&lines[1]), vec!["Pizza Salami"]);
        assert_eq!(lines[1].display_name, DisplayLabel::Known("Pizza"));
    }

    #[test]
    fn test_lines_in_first_seen_order() {
        let meals = vec![
            MealRecord::new("Linie 4", "Reis", &[]),
            MealRecord::new("Linie 1 Gut & Günstig", "Schnitzel", &[]),
            MealRecord::new("Linie 4", "Nudeln", &[]),
        ];
        let lines = filter_meal_menu(meals).unwrap();
        let order: Vec<_> = lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(order, vec!["Linie 4", "Linie 1 Gut & Günstig"]);
        assert_eq!(names(&lines[0]), vec!["Reis", "Nudeln"]);
    }

    #[test]
    fn test_unmapped_category_kept() {
        let meals = vec![MealRecord::new("Linie 1 Spezial", "Burger", &[])];
        let lines = filter_meal_menu(meals).unwrap();
        assert_eq!(lines[0].display_name, DisplayLabel::Unmapped);
        assert_eq!(names(&lines[0]), vec!["Burger"]);
    }

    #[test]
    fn test_display_label_exact_match() {
        assert_eq!(display_label("Linie 3"), DisplayLabel::Known("3"));
        assert_eq!(display_label("Linie 3 "), DisplayLabel::Unmapped);
        assert_eq!(display_label("[pizza]werk Pizza 11-14 Uhr"), DisplayLabel::Known("Pizza"));
    }

    #[test]
    fn test_filter_openmensa_fixture() {
        let json = r#"[
            {"id": 1, "name": "Aktion \"Herbst\" Kürbisrisotto", "category": "Linie 1 Gut & Günstig", "prices": {"students": 3.2}, "notes": []},
            {"id": 2, "name": "Blattsalat", "category": "Linie 1 Gut & Günstig", "prices": {"students": 1.0}, "notes": []},
            {"id": 3, "name": "Seitan Bowl", "category": "Linie 2 Vegane Linie", "prices": {"students": 3.9}, "notes": ["vegan"]},
            {"id": 4, "name": "Beilage", "category": "Linie 3", "prices": {"students": null}, "notes": ["Spätzle"]},
            {"id": 5, "name": "Currywurst", "category": "Schnitzelbar", "prices": {"students": 4.1}, "notes": []},
            {"id": 6, "name": "Margherita", "category": "[pizza]werk Pizza 11-14 Uhr", "prices": {"students": 5.0}, "notes": []},
            {"id": 7, "name": "Pizza Funghi", "category": "[pizza]werk Pizza 11-14 Uhr", "prices": {"students": 5.5}, "notes": null}
        ]"#;
        let meals: Vec<MealRecord> = serde_json::from_str(json).unwrap();
        let lines = filter_meal_menu(meals).unwrap();

        assert_eq!(lines.len(), 4);
        assert_eq!(names(&lines[0]), vec!["Kürbisrisotto"]);
        assert_eq!(names(&lines[1]), vec!["Seitan Bowl"]);
        assert_eq!(names(&lines[2]), vec!["Spätzle", "Beilage"]);
        assert_eq!(names(&lines[3]), vec!["Pizza Funghi"]);
        assert_eq!(lines[0].meals[0].extra.get("id"), Some(&serde_json::Value::from(1)));
    }
}
