//! Theme configuration for consistent styling across TUI components.

use ratatui::style::{Color, Modifier, Style};

const ACCENT_CYAN: Color = Color::Rgb(34, 211, 238); // #22d3ee
const ACCENT_BLUE: Color = Color::Rgb(59, 130, 246); // #3b82f6
const ACCENT_GREEN: Color = Color::Rgb(74, 222, 128); // #4ade80
const ACCENT_BLUE_LIGHT: Color = Color::Rgb(96, 165, 250); // #60a5fa
const MUTED_GRAY: Color = Color::Rgb(107, 114, 128); // #6b7280
const TEXT_GRAY: Color = Color::Rgb(156, 163, 175); // #9ca3af
const TEXT_LIGHT: Color = Color::Rgb(229, 231, 235); // #e5e7eb

/// Theme configuration for TUI components.
///
/// The default select renderers read every style from here, so swapping the
/// theme restyles a select without touching its items.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for titles and headers
    pub title: Style,
    /// Style for the highlighted item
    pub selected: Style,
    /// Style for normal, unselected items
    pub unselected: Style,
    /// Style for disabled items
    pub disabled: Style,
    /// Style for the `(x)` hotkey annotation
    pub hotkey: Style,
    /// Style for help text and secondary labels
    pub help: Style,
    /// Style for borders
    pub border: Style,
    /// Style for the highlight marker
    pub indicator: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default().fg(ACCENT_GREEN).add_modifier(Modifier::BOLD),
            selected: Style::default().fg(ACCENT_CYAN).add_modifier(Modifier::BOLD),
            unselected: Style::default().fg(TEXT_LIGHT),
            disabled: Style::default()
                .fg(MUTED_GRAY)
                .add_modifier(Modifier::DIM),
            hotkey: Style::default().fg(TEXT_GRAY),
            help: Style::default().fg(TEXT_GRAY),
            border: Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::DIM),
            indicator: Style::default()
                .fg(ACCENT_BLUE_LIGHT)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Creates a new theme with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Style for an item label given its state. Disabled wins over selected.
    #[must_use]
    pub fn item_style(&self, is_selected: bool, is_disabled: bool) -> Style {
        if is_disabled {
            self.disabled
        } else if is_selected {
            self.selected
        } else {
            self.unselected
        }
    }
}
