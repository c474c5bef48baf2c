//! Items and the resolved item model.

use std::collections::HashMap;

use ratatui::text::Span;

/// An entry in an [`EnhancedSelect`](super::EnhancedSelect) list.
#[derive(Debug, Clone)]
pub struct Item<T> {
    /// The value handed to the select callback
    pub value: T,
    /// The label displayed to the user
    pub label: String,
    /// Disabled items are shown but can never be highlighted or selected
    pub disabled: bool,
    /// Single character that jumps straight to this item (case-insensitive)
    pub hotkey: Option<char>,
    /// Glyph shown in front of the label while the item is not highlighted
    pub indicator: Option<Span<'static>>,
}

impl<T> Item<T> {
    /// Creates a new enabled item.
    #[must_use]
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
            hotkey: None,
            indicator: None,
        }
    }

    /// Creates a new disabled item.
    #[must_use]
    pub fn disabled(value: T, label: impl Into<String>) -> Self {
        Self::new(value, label).with_disabled(true)
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the hotkey that jumps to this item.
    #[must_use]
    pub fn with_hotkey(mut self, hotkey: char) -> Self {
        self.hotkey = Some(hotkey);
        self
    }

    /// Sets the glyph shown in front of the label when not highlighted.
    #[must_use]
    pub fn with_indicator(mut self, indicator: impl Into<Span<'static>>) -> Self {
        self.indicator = Some(indicator.into());
        self
    }

    /// Returns true if the item can be highlighted and selected.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.disabled
    }
}

/// Read-only view over the caller's items with a hotkey lookup table.
///
/// The model is rebuilt whenever the item list is handed to the widget, so the
/// hotkey table can never go stale. When several items share a hotkey the first
/// one in list order owns it; the others are unreachable through that key.
#[derive(Debug)]
pub struct ItemModel<'a, T> {
    items: &'a [Item<T>],
    hotkeys: HashMap<char, usize>,
}

impl<'a, T> ItemModel<'a, T> {
    #[must_use]
    pub fn new(items: &'a [Item<T>]) -> Self {
        let mut hotkeys = HashMap::new();
        for (idx, item) in items.iter().enumerate() {
            if let Some(key) = item.hotkey {
                hotkeys.entry(normalize_hotkey(key)).or_insert(idx);
            }
        }

        Self { items, hotkeys }
    }

    #[must_use]
    pub fn items(&self) -> &'a [Item<T>] {
        self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&'a Item<T>> {
        self.items.get(idx)
    }

    /// Returns true if `idx` points at an enabled item.
    #[must_use]
    pub fn is_selectable(&self, idx: usize) -> bool {
        self.items.get(idx).is_some_and(Item::is_selectable)
    }

    /// Index of the first enabled item, if any.
    #[must_use]
    pub fn first_selectable(&self) -> Option<usize> {
        self.items.iter().position(Item::is_selectable)
    }

    /// Number of enabled items.
    #[must_use]
    pub fn selectable_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_selectable()).count()
    }

    /// Looks up the item owning `key`, ignoring case.
    ///
    /// Disabled items are still returned; the caller decides whether to act.
    #[must_use]
    pub fn hotkey_target(&self, key: char) -> Option<usize> {
        self.hotkeys.get(&normalize_hotkey(key)).copied()
    }
}

/// Lower-cases a hotkey so lookups are case-insensitive.
///
/// Characters whose lower-case form is more than one character keep their
/// first lower-case character.
fn normalize_hotkey(key: char) -> char {
    key.to_lowercase().next().unwrap_or(key)
}
