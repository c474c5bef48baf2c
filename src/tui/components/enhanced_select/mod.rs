//! Keyboard-navigable select input.
//!
//! [`EnhancedSelect`] is the configuration for one render pass: it borrows the
//! items, carries the callbacks and renderers, and is cheap to rebuild every
//! frame. [`SelectState`] is what survives between passes. Hand both to
//! [`EnhancedSelect::handle_key`] for input and to
//! `Frame::render_stateful_widget` for output.
//!
//! ```ignore
//! let items = vec![
//!     Item::new("apply", "Apply").with_hotkey('a'),
//!     Item::disabled("undo", "Undo"),
//!     Item::new("quit", "Quit").with_hotkey('q'),
//! ];
//! let mut state = SelectState::new();
//! let mut picked = None;
//!
//! let mut select = EnhancedSelect::new(&items).on_select(|item| {
//!     picked = Some(item.value);
//!     Ok(())
//! });
//! select.handle_key(&mut state, KeyEvent::from(KeyCode::Enter))?;
//! ```

mod item;
mod render;
mod state;

use anyhow::Result;
use clap::ValueEnum;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use derive_more::Display;
use log::{debug, trace};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::StatefulWidget,
};
use serde::{Deserialize, Serialize};

pub use item::{Item, ItemModel};
pub use render::{
    DEFAULT_SEPARATOR, DefaultIndicatorRenderer, DefaultItemRenderer, HIGHLIGHT_MARKER,
    IndicatorProps, IndicatorRenderer, ItemProps, ItemRenderer, MARKER_WIDTH,
};
pub use state::{Direction, SelectState};

use crate::tui::theme::Theme;

/// Callback invoked with the item that was highlighted or selected.
///
/// Errors are handed back to the caller of the event method untouched.
pub type ItemCallback<'a, T> = Box<dyn FnMut(&Item<T>) -> Result<()> + 'a>;

/// Layout axis of the select. Also decides which arrow keys navigate.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// One item per line, navigated with Up/Down
    #[default]
    #[display("vertical")]
    Vertical,
    /// All items on one line, navigated with Left/Right
    #[display("horizontal")]
    Horizontal,
}

impl Orientation {
    /// Keys bound to (next, previous).
    #[must_use]
    pub fn navigation_keys(self) -> (KeyCode, KeyCode) {
        match self {
            Self::Vertical => (KeyCode::Down, KeyCode::Up),
            Self::Horizontal => (KeyCode::Right, KeyCode::Left),
        }
    }
}

/// What an input event did to the select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The key is not bound by the select; the caller may handle it
    Ignored,
    /// The key is bound but nothing changed
    Unchanged,
    /// The highlight moved to this index
    Highlighted(usize),
    /// The item at this index was confirmed
    Selected(usize),
}

impl SelectOutcome {
    /// Returns true if the select consumed the event.
    #[must_use]
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// A select input over a borrowed list of items.
pub struct EnhancedSelect<'a, T> {
    model: ItemModel<'a, T>,
    orientation: Orientation,
    separator: String,
    instant_select_on_hotkey: bool,
    item_renderer: Option<Box<dyn ItemRenderer<T> + 'a>>,
    indicator_renderer: Option<Box<dyn IndicatorRenderer<T> + 'a>>,
    on_select: Option<ItemCallback<'a, T>>,
    on_highlight: Option<ItemCallback<'a, T>>,
    theme: Theme,
}

impl<'a, T> EnhancedSelect<'a, T> {
    /// Creates a vertical select over `items` with the default look.
    #[must_use]
    pub fn new(items: &'a [Item<T>]) -> Self {
        Self {
            model: ItemModel::new(items),
            orientation: Orientation::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            instant_select_on_hotkey: false,
            item_renderer: None,
            indicator_renderer: None,
            on_select: None,
            on_highlight: None,
            theme: Theme::default(),
        }
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

    /// When enabled, a hotkey confirms its item right away instead of only
    /// highlighting it.
    #[must_use]
    pub fn with_instant_select_on_hotkey(mut self, enabled: bool) -> Self {
        self.instant_select_on_hotkey = enabled;
        self
    }

    /// Sets a custom theme for the default renderers.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Replaces the default item appearance.
    #[must_use]
    pub fn with_item_renderer(mut self, renderer: impl ItemRenderer<T> + 'a) -> Self {
        self.item_renderer = Some(Box::new(renderer));
        self
    }

    /// Closure form of [`with_item_renderer`](Self::with_item_renderer).
    #[must_use]
    pub fn with_item_fn<F>(self, render: F) -> Self
    where
        F: Fn(&ItemProps<'_, T>) -> Line<'static> + 'a,
    {
        self.with_item_renderer(render)
    }

    /// Replaces the default leading indicator.
    #[must_use]
    pub fn with_indicator_renderer(mut self, renderer: impl IndicatorRenderer<T> + 'a) -> Self {
        self.indicator_renderer = Some(Box::new(renderer));
        self
    }

    /// Closure form of [`with_indicator_renderer`](Self::with_indicator_renderer).
    #[must_use]
    pub fn with_indicator_fn<F>(self, render: F) -> Self
    where
        F: Fn(&IndicatorProps<'_, T>) -> Span<'static> + 'a,
    {
        self.with_indicator_renderer(render)
    }

    /// Called with the confirmed item. Never called for disabled items.
    #[must_use]
    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Item<T>) -> Result<()> + 'a,
    {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Called with the newly highlighted item whenever the highlight moves.
    #[must_use]
    pub fn on_highlight<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Item<T>) -> Result<()> + 'a,
    {
        self.on_highlight = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn model(&self) -> &ItemModel<'a, T> {
        &self.model
    }

    /// Translates a key press into a navigation event.
    ///
    /// The state is reconciled against the current items first, so a list
    /// that changed since the last frame is handled transparently.
    pub fn handle_key(&mut self, state: &mut SelectState, key: KeyEvent) -> Result<SelectOutcome> {
        if key.kind != KeyEventKind::Press {
            return Ok(SelectOutcome::Ignored);
        }

        state.reconcile(&self.model);

        let (next, previous) = self.orientation.navigation_keys();
        match key.code {
            code if code == next => self.move_next(state),
            code if code == previous => self.move_previous(state),
            KeyCode::Enter => self.activate(state),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.press_hotkey(state, c)
            }
            _ => Ok(SelectOutcome::Ignored),
        }
    }

    /// Moves the highlight to the next enabled item, wrapping at the end.
    pub fn move_next(&mut self, state: &mut SelectState) -> Result<SelectOutcome> {
        self.step(state, Direction::Next)
    }

    /// Moves the highlight to the previous enabled item, wrapping at the start.
    pub fn move_previous(&mut self, state: &mut SelectState) -> Result<SelectOutcome> {
        self.step(state, Direction::Previous)
    }

    fn step(&mut self, state: &mut SelectState, direction: Direction) -> Result<SelectOutcome> {
        state.reconcile(&self.model);

        let Some(from) = state.highlighted() else {
            return Ok(SelectOutcome::Unchanged);
        };

        match state::step(&self.model, from, direction) {
            Some(idx) => self.highlight(state, idx),
            None => Ok(SelectOutcome::Unchanged),
        }
    }

    /// Confirms the highlighted item.
    ///
    /// Acts on `state` as given: a highlight resting on a disabled or missing
    /// item confirms nothing. The highlight itself does not change.
    pub fn activate(&mut self, state: &SelectState) -> Result<SelectOutcome> {
        let Some(idx) = state.highlighted() else {
            return Ok(SelectOutcome::Unchanged);
        };
        let Some(item) = self.model.get(idx).filter(|item| item.is_selectable()) else {
            return Ok(SelectOutcome::Unchanged);
        };

        debug!("select: confirmed item {idx} ({})", item.label);
        if let Some(callback) = self.on_select.as_mut() {
            callback(item)?;
        }

        Ok(SelectOutcome::Selected(idx))
    }

    /// Jumps to the item owning hotkey `key`.
    ///
    /// Unknown keys are [`SelectOutcome::Ignored`]; keys owned by a disabled
    /// item leave the state untouched.
    pub fn press_hotkey(&mut self, state: &mut SelectState, key: char) -> Result<SelectOutcome> {
        let Some(idx) = self.model.hotkey_target(key) else {
            return Ok(SelectOutcome::Ignored);
        };

        if !self.model.is_selectable(idx) {
            trace!("select: hotkey '{key}' targets disabled item {idx}");
            return Ok(SelectOutcome::Unchanged);
        }

        state.reconcile(&self.model);
        let outcome = self.highlight(state, idx)?;

        if self.instant_select_on_hotkey {
            return self.activate(state);
        }

        Ok(outcome)
    }

    fn highlight(&mut self, state: &mut SelectState, idx: usize) -> Result<SelectOutcome> {
        if state.highlighted() == Some(idx) {
            return Ok(SelectOutcome::Unchanged);
        }

        state.set_highlighted(Some(idx));
        trace!("select: highlight moved to {idx}");

        if let Some(callback) = self.on_highlight.as_mut()
            && let Some(item) = self.model.get(idx)
        {
            callback(item)?;
        }

        Ok(SelectOutcome::Highlighted(idx))
    }

    /// Projects the items and highlight into styled lines.
    ///
    /// Vertical selects yield one line per item, horizontal ones a single line.
    /// `state` is read through a reconciled copy and never modified.
    #[must_use]
    pub fn lines(&self, state: &SelectState) -> Vec<Line<'static>> {
        let mut resolved = state.clone();
        resolved.reconcile(&self.model);

        let default_item = DefaultItemRenderer { theme: &self.theme };
        let default_indicator = DefaultIndicatorRenderer { theme: &self.theme };
        let item_renderer: &dyn ItemRenderer<T> = match &self.item_renderer {
            Some(renderer) => renderer.as_ref(),
            None => &default_item,
        };
        let indicator_renderer: &dyn IndicatorRenderer<T> = match &self.indicator_renderer {
            Some(renderer) => renderer.as_ref(),
            None => &default_indicator,
        };

        let rows = self
            .model
            .items()
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let is_selected = resolved.highlighted() == Some(idx);
                render::compose_row(item_renderer, indicator_renderer, item, is_selected)
            })
            .collect();

        render::arrange(rows, self.orientation, &self.separator)
    }

    /// Width and height needed to draw every item without clipping.
    #[must_use]
    pub fn required_size(&self) -> (u16, u16) {
        let lines = self.lines(&SelectState::new());
        let width = lines.iter().map(Line::width).max().unwrap_or(0);
        (
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(lines.len()).unwrap_or(u16::MAX),
        )
    }
}

impl<T> StatefulWidget for &EnhancedSelect<'_, T> {
    type State = SelectState;

    #[allow(clippy::arithmetic_side_effects)]
    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.reconcile(&self.model);

        for (row, line) in (0..area.height).zip(self.lines(state)) {
            buf.set_line(area.x, area.y + row, &line, area.width);
        }
    }
}

#[cfg(test)]
mod tests;
