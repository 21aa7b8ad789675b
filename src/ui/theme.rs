//! Color theme constants.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Base palette
// ============================================================================

pub const COLOR_BORDER: Color = Color::DarkGray;

/// Focused input border and selection marker
pub const COLOR_ACCENT: Color = Color::Cyan;

pub const COLOR_HEADER: Color = Color::White;

/// Secondary text: dates, hints, disabled buttons
pub const COLOR_DIM: Color = Color::DarkGray;

// ============================================================================
// Rows
// ============================================================================

/// Completed rows are dimmed and struck through
pub const COLOR_COMPLETED: Color = Color::Gray;

pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 34, 48);

/// Background of the row in edit mode
pub const COLOR_EDIT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Buttons and status
// ============================================================================

pub const COLOR_BUTTON: Color = Color::LightBlue;

pub const COLOR_DANGER: Color = Color::LightRed;

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_ERROR: Color = Color::Red;

/// Style applied to a hit area under the mouse.
pub fn hover_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}
