//! Highlight state that outlives a single render pass.

use super::item::ItemModel;

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Persistent highlight of one mounted select widget.
///
/// Create it once when the widget is shown and pass it to every render and key
/// event. Drop it (or [`reset`](Self::reset) it) when the widget goes away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectState {
    highlighted: Option<usize>,
}

impl SelectState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a specific index. It is reconciled against the items on the
    /// next render or key event.
    #[must_use]
    pub fn with_highlighted(index: usize) -> Self {
        Self {
            highlighted: Some(index),
        }
    }

    /// The highlighted index, `None` when no item can be highlighted.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub(crate) fn set_highlighted(&mut self, index: Option<usize>) {
        self.highlighted = index;
    }

    /// Forgets the highlight, as if the widget was mounted again.
    pub fn reset(&mut self) {
        self.highlighted = None;
    }

    /// Brings the highlight back in line with `model`.
    ///
    /// - unset: first enabled item
    /// - past the end: clamped to the last item, then as below
    /// - on a disabled item: nearest following enabled item, wrapping
    /// - no enabled item: unset
    ///
    /// Returns true if the highlight moved.
    pub fn reconcile<T>(&mut self, model: &ItemModel<'_, T>) -> bool {
        let resolved = match self.highlighted {
            _ if model.is_empty() => None,
            None => model.first_selectable(),
            Some(idx) => {
                let idx = idx.min(model.len().saturating_sub(1));
                if model.is_selectable(idx) {
                    Some(idx)
                } else {
                    step(model, idx, Direction::Next)
                }
            }
        };

        let moved = resolved != self.highlighted;
        self.highlighted = resolved;
        moved
    }
}

/// Finds the next enabled index from `from` in `direction`, wrapping around.
///
/// `from` itself is only returned after a full lap, which is how a list with a
/// single enabled item stays put.
#[allow(clippy::arithmetic_side_effects)]
pub(crate) fn step<T>(model: &ItemModel<'_, T>, from: usize, direction: Direction) -> Option<usize> {
    let len = model.len();
    if len == 0 {
        return None;
    }

    let mut idx = from.min(len - 1);
    for _ in 0..len {
        idx = match direction {
            Direction::Next => (idx + 1) % len,
            Direction::Previous if idx == 0 => len - 1,
            Direction::Previous => idx - 1,
        };

        if model.is_selectable(idx) {
            return Some(idx);
        }
    }

    None
}
