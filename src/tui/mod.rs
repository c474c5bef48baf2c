//! Terminal UI components built on ratatui.
//!
//! - `EnhancedSelect` - select input with hotkeys, disabled items and custom rendering
//! - `SelectPrompt` - blocking full-screen prompt around an `EnhancedSelect`

mod app;
pub mod components;
mod prompts;
mod theme;

pub use app::{TerminalApp, TuiTerminal};
pub use components::{
    EnhancedSelect, IndicatorProps, IndicatorRenderer, Item, ItemProps, ItemRenderer,
    Orientation, PromptResult, SelectOutcome, SelectPrompt, SelectState,
};
pub use prompts::{items_from_labels, select_prompt_with_shortcuts};
pub use theme::Theme;
