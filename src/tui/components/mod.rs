//! Reusable TUI components.

pub mod enhanced_select;
mod select_prompt;

pub use enhanced_select::{
    EnhancedSelect, IndicatorProps, IndicatorRenderer, Item, ItemProps, ItemRenderer,
    Orientation, SelectOutcome, SelectState,
};
pub use select_prompt::SelectPrompt;

use anyhow::Result;

/// Result type for prompt operations.
///
/// - `Ok(Some(value))` - User submitted a value
/// - `Ok(None)` - User cancelled (Escape or Ctrl+C)
/// - `Err(_)` - An error occurred
pub type PromptResult<T> = Result<Option<T>>;
