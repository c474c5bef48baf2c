//! Full-screen single selection prompt.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::debug;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
};

use super::PromptResult;
use super::enhanced_select::{
    DEFAULT_SEPARATOR, EnhancedSelect, Item, Orientation, SelectOutcome, SelectState,
};
use crate::tui::{TerminalApp, theme::Theme};

/// Rows taken by the border and the help line.
const CHROME_HEIGHT: u16 = 4;

/// A blocking prompt that shows an [`EnhancedSelect`] in a bordered box and
/// returns the confirmed item's value.
pub struct SelectPrompt<'a, T> {
    title: &'a str,
    subtitle: Option<&'a str>,
    items: Vec<Item<T>>,
    help_message: Option<&'a str>,
    orientation: Orientation,
    separator: String,
    instant_select_on_hotkey: bool,
    theme: Theme,
}

impl<'a, T> SelectPrompt<'a, T> {
    /// Creates a new select prompt with the given title and items.
    #[must_use]
    pub fn new(title: &'a str, items: Vec<Item<T>>) -> Self {
        Self {
            title,
            subtitle: None,
            items,
            help_message: None,
            orientation: Orientation::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            instant_select_on_hotkey: false,
            theme: Theme::default(),
        }
    }

    /// Sets the subtitle displayed in the top-right corner.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// Sets the help message displayed below the list.
    #[must_use]
    pub fn with_help_message(mut self, message: &'a str) -> Self {
        self.help_message = Some(message);
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the text placed between items in horizontal mode.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Confirm an item as soon as its hotkey is pressed.
    #[must_use]
    pub fn with_instant_select_on_hotkey(mut self, enabled: bool) -> Self {
        self.instant_select_on_hotkey = enabled;
        self
    }

    /// Sets a custom theme for the prompt.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn select(&self) -> EnhancedSelect<'_, T> {
        EnhancedSelect::new(&self.items)
            .with_orientation(self.orientation)
            .with_separator(self.separator.clone())
            .with_instant_select_on_hotkey(self.instant_select_on_hotkey)
            .with_theme(self.theme.clone())
    }

    fn default_help(&self) -> &'static str {
        match self.orientation {
            Orientation::Vertical => "↑↓/keys navigate, Enter select, Esc cancel",
            Orientation::Horizontal => "←→/keys navigate, Enter select, Esc cancel",
        }
    }

    /// Runs the select prompt and returns the selected item's value.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` - User selected an item
    /// - `Ok(None)` - User cancelled with Escape, or nothing can be selected
    /// - `Err(_)` - Terminal error occurred
    pub fn prompt(self) -> PromptResult<T> {
        if !self.items.iter().any(Item::is_selectable) {
            return Ok(None);
        }

        let mut app = TerminalApp::new()?;
        let mut state = SelectState::new();

        loop {
            let mut select = self.select();
            app.terminal().draw(|frame| {
                self.render(frame, &select, &mut state);
            })?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match select.handle_key(&mut state, key)? {
                SelectOutcome::Selected(idx) => {
                    drop(select);
                    debug!("prompt '{}': selected item {idx}", self.title);
                    return Ok(self.items.into_iter().nth(idx).map(|item| item.value));
                }
                SelectOutcome::Ignored => match key.code {
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(None);
                    }
                    _ => {}
                },
                SelectOutcome::Unchanged | SelectOutcome::Highlighted(_) => {}
            }
        }
    }

    #[allow(clippy::indexing_slicing)]
    fn render(&self, frame: &mut Frame, select: &EnhancedSelect<'_, T>, state: &mut SelectState) {
        let (_, content_height) = select.required_size();
        let height = popup_height(content_height, frame.area().height);
        let area = centered_rect(70, height, frame.area());

        frame.render_widget(Clear, area);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border)
            .title(Span::styled(self.title, self.theme.title));

        if let Some(subtitle) = self.subtitle {
            block = block.title_top(
                Line::from(Span::styled(subtitle, self.theme.help)).alignment(Alignment::Right),
            );
        }

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let chunks =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner_area);

        frame.render_stateful_widget(select, chunks[0], state);

        let help_text = self.help_message.unwrap_or_else(|| self.default_help());
        let help_line = Line::from(Span::styled(help_text, self.theme.help));
        frame.render_widget(help_line, chunks[1]);
    }
}

/// Height of the prompt box: the list plus chrome, leaving a row above and below.
fn popup_height(content_height: u16, available: u16) -> u16 {
    content_height
        .saturating_add(CHROME_HEIGHT)
        .min(available.saturating_sub(2))
}

#[allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);

    horizontal[1]
}
