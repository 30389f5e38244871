//! UI helper functions

/// Cut `text` to at most `max_width` characters, ending in "..." when cut
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return text.chars().take(max_width).collect();
    }
    // Safely truncate using character boundaries
    let truncated: String = text.chars().take(max_width - 3).collect();
    format!("{}...", truncated)
}

/// Label column entry: `text:` padded to `width` characters
pub fn label_cell(text: &str, width: usize) -> String {
    format!("{:<width$}", format!("{}:", text), width = width)
}
