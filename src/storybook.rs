//! Interactive showcase of the select widget.
//!
//! The storybook is a small state machine: the confirmed item's [`StoryAction`]
//! decides which screen comes next, and each screen mounts a fresh select.

use std::cell::Cell;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use derive_more::Display;
use log::{debug, info};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, StatefulWidget, Widget},
};

use crate::tui::{
    EnhancedSelect, IndicatorProps, Item, ItemProps, Orientation, SelectOutcome, SelectState,
    TerminalApp, Theme,
};

pub const STORYBOOK_TITLE: &str = "Enhanced Select Input Storybook ⌱";

/// Demo views reachable once an orientation is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StorybookView {
    #[display("hotkeys")]
    Hotkeys,
    #[display("custom indicators")]
    CustomIndicators,
    #[display("custom item")]
    CustomItem,
}

/// What the storybook currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Screen {
    /// Choose vertical, horizontal, or exit
    #[display("variant picker")]
    VariantPicker,
    /// List of views for the chosen orientation
    #[display("menu")]
    Menu,
    #[display("{_0} view")]
    View(StorybookView),
}

/// Value carried by every storybook item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryAction {
    SetOrientation(Orientation),
    Show(StorybookView),
    Back,
    Exit,
    /// Placeholder value of the demo disabled item
    Stay,
}

pub struct Storybook {
    orientation: Option<Orientation>,
    view: Option<StorybookView>,
    state: SelectState,
    instant_select_on_hotkey: bool,
    separator: String,
    theme: Theme,
    should_exit: bool,
}

impl Default for Storybook {
    fn default() -> Self {
        Self::new()
    }
}

impl Storybook {
    #[must_use]
    pub fn new() -> Self {
        Self {
            orientation: None,
            view: None,
            state: SelectState::new(),
            instant_select_on_hotkey: false,
            separator: crate::tui::components::enhanced_select::DEFAULT_SEPARATOR.to_string(),
            theme: Theme::default(),
            should_exit: false,
        }
    }

    /// Skips the variant picker and starts in `orientation`.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Option<Orientation>) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_instant_select_on_hotkey(mut self, enabled: bool) -> Self {
        self.instant_select_on_hotkey = enabled;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match (self.orientation, self.view) {
            (None, _) => Screen::VariantPicker,
            (Some(_), None) => Screen::Menu,
            (Some(_), Some(view)) => Screen::View(view),
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    #[must_use]
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    #[must_use]
    pub fn state(&self) -> &SelectState {
        &self.state
    }

    /// Items of the current screen.
    #[must_use]
    pub fn items(&self) -> Vec<Item<StoryAction>> {
        screen_items(self.screen())
    }

    /// Moves to the screen `action` leads to. Changing screens remounts the select.
    pub fn apply(&mut self, action: StoryAction) {
        let before = self.screen();

        match action {
            StoryAction::SetOrientation(orientation) => {
                self.orientation = Some(orientation);
                self.view = None;
            }
            StoryAction::Show(view) => {
                if self.orientation.is_some() {
                    self.view = Some(view);
                }
            }
            StoryAction::Back => {
                if self.view.is_some() {
                    self.view = None;
                } else {
                    self.orientation = None;
                }
            }
            StoryAction::Exit => self.should_exit = true,
            StoryAction::Stay => {}
        }

        let after = self.screen();
        if before != after {
            debug!("storybook: {before} -> {after}");
            self.state.reset();
        }
    }

    fn select<'a>(&self, items: &'a [Item<StoryAction>]) -> EnhancedSelect<'a, StoryAction> {
        let select = EnhancedSelect::new(items)
            .with_orientation(self.orientation.unwrap_or_default())
            .with_separator(self.separator.clone())
            .with_instant_select_on_hotkey(self.instant_select_on_hotkey)
            .with_theme(self.theme.clone());

        if self.screen() == Screen::View(StorybookView::CustomItem) {
            select
                .with_item_fn(custom_item)
                .with_indicator_fn(custom_indicator)
        } else {
            select
        }
    }

    /// Feeds one key event to the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let items = self.items();
        let picked = Cell::new(None);
        let outcome = self
            .select(&items)
            .on_select(|item| {
                picked.set(Some(item.value));
                Ok(())
            })
            .on_highlight(|item| {
                debug!("storybook: highlighted {}", item.label);
                Ok(())
            })
            .handle_key(&mut self.state, key)?;

        if let Some(action) = picked.get() {
            self.apply(action);
        } else if outcome == SelectOutcome::Ignored && is_quit_key(key) {
            self.should_exit = true;
        }

        Ok(())
    }

    fn mode(&self) -> String {
        self.orientation
            .map_or_else(|| "n/a".to_string(), |o| o.to_string())
    }

    fn caption(&self) -> Option<&'static str> {
        match self.screen() {
            Screen::VariantPicker => Some("Select a variant:"),
            Screen::Menu => None,
            Screen::View(StorybookView::Hotkeys) => Some("Hotkeys View:"),
            Screen::View(StorybookView::CustomIndicators) => {
                Some("Item Specific Custom Indicators View:")
            }
            Screen::View(StorybookView::CustomItem) => {
                Some("Custom Item and Indicator Component View:")
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.render_into(area, frame.buffer_mut());
    }

    /// Draws the storybook into `buf`.
    #[allow(clippy::indexing_slicing)]
    pub fn render_into(&mut self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border)
            .padding(Padding::new(2, 2, 1, 1));
        let inner = block.inner(area);
        block.render(area, buf);

        let mode = self.mode();
        let header = Line::from(vec![
            Span::styled(STORYBOOK_TITLE, Style::default().fg(Color::Green)),
            Span::raw("  "),
            Span::styled(format!("mode: {mode}"), self.theme.help),
        ]);

        let caption_height = u16::from(self.caption().is_some());
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(caption_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

        header.render(chunks[0], buf);
        if let Some(caption) = self.caption() {
            Line::from(Span::styled(caption, self.theme.help)).render(chunks[2], buf);
        }

        let items = self.items();
        let select = self.select(&items);
        StatefulWidget::render(&select, chunks[3], buf, &mut self.state);

        Line::from(Span::styled("esc quit", self.theme.help)).render(chunks[4], buf);
    }

    /// Runs the storybook until Exit is chosen or Esc / Ctrl+C is pressed.
    pub fn run(&mut self, app: &mut TerminalApp) -> Result<()> {
        info!("storybook: started in mode {}", self.mode());

        while !self.should_exit {
            app.terminal().draw(|frame| self.render(frame))?;

            if let Event::Key(key) = event::read()? {
                self.handle_key(key)?;
            }
        }

        info!("storybook: exiting");
        Ok(())
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn custom_item(props: &ItemProps<'_, StoryAction>) -> Line<'static> {
    let color = if props.is_selected {
        Color::Blue
    } else if props.is_disabled {
        Color::Gray
    } else {
        Color::White
    };
    Line::from(Span::styled(props.label.to_string(), Style::default().fg(color)))
}

fn custom_indicator(props: &IndicatorProps<'_, StoryAction>) -> Span<'static> {
    if props.is_selected {
        return Span::styled("→ ", Style::default().fg(Color::Blue));
    }

    let content = props
        .item
        .indicator
        .as_ref()
        .map_or_else(|| "  ".to_string(), |span| span.content.to_string());
    Span::styled(content, Style::default().fg(Color::White))
}

fn indicator(glyph: &'static str, color: Color) -> Span<'static> {
    Span::styled(glyph, Style::default().fg(color))
}

/// Items shown on `screen`.
#[must_use]
pub fn screen_items(screen: Screen) -> Vec<Item<StoryAction>> {
    use StoryAction::{Back, Exit, SetOrientation, Show, Stay};
    use StorybookView::{CustomIndicators, CustomItem, Hotkeys};

    match screen {
        Screen::VariantPicker => vec![
            Item::new(SetOrientation(Orientation::Vertical), "Vertical")
                .with_indicator(indicator("⎸", Color::Cyan))
                .with_hotkey('v'),
            Item::new(SetOrientation(Orientation::Horizontal), "Horizontal")
                .with_indicator(indicator("⎼", Color::Cyan))
                .with_hotkey('h'),
            Item::new(Exit, "Exit")
                .with_indicator(indicator("⏍", Color::Red))
                .with_hotkey('x'),
        ],
        Screen::Menu => vec![
            Item::new(Show(Hotkeys), "View Hotkeys"),
            Item::new(Show(CustomIndicators), "Custom Indicators"),
            Item::new(Show(CustomItem), "Custom Item Component"),
            Item::disabled(Stay, "Disabled Item"),
            Item::new(Back, "Go Back").with_hotkey('b'),
        ],
        Screen::View(Hotkeys) => vec![
            Item::disabled(Show(Hotkeys), "Hotkeys").with_hotkey('h'),
            Item::new(Show(CustomIndicators), "Custom Indicators").with_hotkey('i'),
            Item::new(Show(CustomItem), "Custom Item Component").with_hotkey('c'),
            Item::new(Back, "Go Back").with_hotkey('b'),
        ],
        Screen::View(CustomIndicators) => vec![
            Item::new(Show(Hotkeys), "Hotkeys").with_indicator(indicator("✔", Color::Green)),
            Item::new(Show(CustomItem), "Custom Item Component")
                .with_indicator(indicator("✘", Color::Red)),
            Item::disabled(Show(CustomIndicators), "Custom Indicators")
                .with_indicator(indicator("-", Color::Gray)),
            Item::new(Back, "Go Back")
                .with_hotkey('b')
                .with_indicator(indicator("←", Color::Yellow)),
        ],
        Screen::View(CustomItem) => vec![
            Item::new(Show(Hotkeys), "View Hotkeys"),
            Item::new(Show(CustomIndicators), "View Custom Indicators"),
            Item::disabled(Show(CustomItem), "View Custom Item Component"),
            Item::new(Back, "Go Back").with_hotkey('b'),
        ],
    }
}
