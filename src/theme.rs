//! Theme module for mensa-widget
//!
//! This module provides the color palette and styling constants for the
//! widget panel: black text on a white card, like a home-screen widget.

use ratatui::style::Color;

// ============================================================================
// Background Colors
// ============================================================================

/// Widget card background (#ffffff)
pub const BG_WIDGET: Color = Color::Rgb(255, 255, 255);

/// Border around the card (#d0d4da)
pub const BORDER_SUBTLE: Color = Color::Rgb(208, 212, 218);

// ============================================================================
// Accent Colors
// ============================================================================

/// Studierendenwerk badge shown when the icon loaded (#e2001a)
pub const SW_RED: Color = Color::Rgb(226, 0, 26);

// ============================================================================
// Status Colors
// ============================================================================

/// "Geschlossen" text (#ff3b30)
pub const RED_CLOSED: Color = Color::Rgb(255, 59, 48);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - black (#000000)
pub const TEXT_PRIMARY: Color = Color::Rgb(0, 0, 0);

/// Muted text for hints below the card (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Key hint highlight (#0a8a6e)
pub const KEY_HINT: Color = Color::Rgb(10, 138, 110);
