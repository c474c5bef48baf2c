//! Row appearance and layout for the select widget.
//!
//! Appearance is split in two strategies: an [`ItemRenderer`] draws the label
//! part of a row and an [`IndicatorRenderer`] draws the leading glyph. Both have
//! a themed default; callers can swap either one, and closures implement both
//! traits directly.

use ratatui::text::{Line, Span};

use super::{Item, Orientation};
use crate::tui::theme::Theme;

/// Marker drawn in front of the highlighted item.
pub const HIGHLIGHT_MARKER: &str = "❯ ";

/// Display width of [`HIGHLIGHT_MARKER`]; other indicators are padded to it.
pub const MARKER_WIDTH: usize = 2;

/// Separator between items in a horizontal select.
pub const DEFAULT_SEPARATOR: &str = "  ";

/// What an [`ItemRenderer`] gets to work with.
#[derive(Debug)]
pub struct ItemProps<'a, T> {
    pub is_selected: bool,
    pub is_disabled: bool,
    pub label: &'a str,
    pub item: &'a Item<T>,
}

/// What an [`IndicatorRenderer`] gets to work with.
#[derive(Debug)]
pub struct IndicatorProps<'a, T> {
    pub is_selected: bool,
    pub item: &'a Item<T>,
}

/// Draws the content of one row, after the indicator.
pub trait ItemRenderer<T> {
    fn render_item(&self, props: &ItemProps<'_, T>) -> Line<'static>;
}

/// Draws the leading glyph of one row.
pub trait IndicatorRenderer<T> {
    fn render_indicator(&self, props: &IndicatorProps<'_, T>) -> Span<'static>;
}

impl<T, F> ItemRenderer<T> for F
where
    F: Fn(&ItemProps<'_, T>) -> Line<'static>,
{
    fn render_item(&self, props: &ItemProps<'_, T>) -> Line<'static> {
        self(props)
    }
}

impl<T, F> IndicatorRenderer<T> for F
where
    F: Fn(&IndicatorProps<'_, T>) -> Span<'static>,
{
    fn render_indicator(&self, props: &IndicatorProps<'_, T>) -> Span<'static> {
        self(props)
    }
}

/// Themed label with a `(x)` hotkey annotation.
#[derive(Debug, Clone, Copy)]
pub struct DefaultItemRenderer<'t> {
    pub theme: &'t Theme,
}

impl<T> ItemRenderer<T> for DefaultItemRenderer<'_> {
    fn render_item(&self, props: &ItemProps<'_, T>) -> Line<'static> {
        let style = self.theme.item_style(props.is_selected, props.is_disabled);
        let mut spans = vec![Span::styled(props.label.to_string(), style)];

        if let Some(key) = props.item.hotkey {
            let hotkey_style = if props.is_disabled {
                self.theme.disabled
            } else {
                self.theme.hotkey
            };
            spans.push(Span::styled(format!(" ({key})"), hotkey_style));
        }

        Line::from(spans)
    }
}

/// Arrow marker on the highlighted item, the item's own indicator otherwise.
#[derive(Debug, Clone, Copy)]
pub struct DefaultIndicatorRenderer<'t> {
    pub theme: &'t Theme,
}

impl<T> IndicatorRenderer<T> for DefaultIndicatorRenderer<'_> {
    fn render_indicator(&self, props: &IndicatorProps<'_, T>) -> Span<'static> {
        if props.is_selected {
            return Span::styled(HIGHLIGHT_MARKER, self.theme.indicator);
        }

        match &props.item.indicator {
            Some(indicator) => pad_to_marker(indicator),
            None => Span::raw(" ".repeat(MARKER_WIDTH)),
        }
    }
}

/// Right-pads `span` with spaces so it occupies at least the marker width.
fn pad_to_marker(span: &Span<'static>) -> Span<'static> {
    let padding = MARKER_WIDTH.saturating_sub(span.width());
    let mut content = span.content.to_string();
    content.push_str(&" ".repeat(padding));
    Span::styled(content, span.style)
}

/// Builds one row: indicator first, then the item content.
pub(crate) fn compose_row<T>(
    item_renderer: &dyn ItemRenderer<T>,
    indicator_renderer: &dyn IndicatorRenderer<T>,
    item: &Item<T>,
    is_selected: bool,
) -> Line<'static> {
    let indicator = indicator_renderer.render_indicator(&IndicatorProps { is_selected, item });
    let content = item_renderer.render_item(&ItemProps {
        is_selected,
        is_disabled: !item.is_selectable(),
        label: &item.label,
        item,
    });

    let mut spans = Vec::with_capacity(content.spans.len().saturating_add(1));
    spans.push(indicator);
    spans.extend(content.spans);

    let mut row = Line::from(spans);
    row.style = content.style;
    row
}

/// Places rows according to `orientation`: one per line when vertical, all on
/// a single line joined by `separator` when horizontal.
pub(crate) fn arrange(
    rows: Vec<Line<'static>>,
    orientation: Orientation,
    separator: &str,
) -> Vec<Line<'static>> {
    match orientation {
        Orientation::Vertical => rows,
        Orientation::Horizontal => {
            if rows.is_empty() {
                return Vec::new();
            }

            let mut spans = Vec::new();
            for (idx, row) in rows.into_iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::raw(separator.to_string()));
                }
                let base = row.style;
                spans.extend(row.spans.into_iter().map(|mut span| {
                    span.style = base.patch(span.style);
                    span
                }));
            }
            vec![Line::from(spans)]
        }
    }
}
