//! Theme and styling constants for the daoscope TUI.
//!
//! Dark background with the plum holding palette used by the DAO pages.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Rgb(190, 165, 189);

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Accent color for links and special highlights.
pub const ACCENT_COLOR: Color = Color::Magenta;

/// Panel background.
pub const BG_COLOR: Color = Color::Rgb(26, 27, 38);

/// Text drawn on top of slices.
pub const LABEL_COLOR: Color = Color::White;

// ============================================================================
// Slice Palette
// ============================================================================

/// Holding shades: one plum at 100%, 80%, 60% and 40% over white.
pub const SLICE_PALETTE: [(u8, u8, u8); 4] = [
    (93, 30, 91),
    (125, 75, 124),
    (158, 120, 157),
    (190, 165, 189),
];

/// Palette colour for a slice colour index.
#[must_use]
pub fn slice_color(index: usize) -> Color {
    let (r, g, b) = SLICE_PALETTE[index % SLICE_PALETTE.len()];
    Color::Rgb(r, g, b)
}

/// Mixes `color` over `background` at `opacity` in `[0, 1]`.
///
/// Non-RGB colours cannot be mixed and switch at half opacity.
#[must_use]
pub fn blend(color: Color, background: Color, opacity: f64) -> Color {
    let alpha = opacity.clamp(0.0, 1.0);
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mix = |fg: u8, bg: u8| {
                (f64::from(bg) + (f64::from(fg) - f64::from(bg)) * alpha).round() as u8
            };
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        }
        _ if alpha >= 0.5 => color,
        _ => background,
    }
}

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new()
    .fg(PRIMARY_COLOR)
    .add_modifier(Modifier::BOLD);

/// Style for selected items in lists.
pub const SELECTED_STYLE: Style = Style::new().bg(Color::DarkGray);

/// Style for key hints in the footer and help popup.
pub const KEY_STYLE: Style = Style::new()
    .fg(PRIMARY_COLOR)
    .add_modifier(Modifier::BOLD);
