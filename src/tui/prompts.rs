//! High-level prompt functions for common use cases.

use super::components::{Item, Orientation, PromptResult, SelectPrompt};

/// Creates a single-selection prompt where options may carry a hotkey.
///
/// # Arguments
///
/// * `title` - The prompt title
/// * `options` - Labels with an optional hotkey each
/// * `help` - Optional help message
/// * `subtitle` - Optional subtitle displayed in the top-right corner (e.g., version)
/// * `orientation` - Vertical list or horizontal row
///
/// # Returns
///
/// - `Ok(Some(index))` - Index of the selected option
/// - `Ok(None)` - User cancelled
/// - `Err(_)` - Terminal error
///
/// # Example
///
/// ```ignore
/// let choice = select_prompt_with_shortcuts(
///     "Default orientation:",
///     vec![("Vertical", Some('v')), ("Horizontal", Some('h'))],
///     None,
///     None,
///     Orientation::Horizontal,
/// )?;
/// ```
pub fn select_prompt_with_shortcuts(
    title: &str,
    options: Vec<(&str, Option<char>)>,
    help: Option<&str>,
    subtitle: Option<&str>,
    orientation: Orientation,
) -> PromptResult<usize> {
    let items: Vec<Item<usize>> = options
        .into_iter()
        .enumerate()
        .map(|(idx, (label, hotkey))| {
            let item = Item::new(idx, label);
            match hotkey {
                Some(key) => item.with_hotkey(key),
                None => item,
            }
        })
        .collect();

    let mut prompt = SelectPrompt::new(title, items).with_orientation(orientation);

    if let Some(h) = help {
        prompt = prompt.with_help_message(h);
    }

    if let Some(s) = subtitle {
        prompt = prompt.with_subtitle(s);
    }

    prompt.prompt()
}

/// Turns plain labels into items.
///
/// Labels listed in `disabled` become disabled items. With `auto_hotkeys`,
/// each label gets the first of its alphanumeric characters that no earlier
/// label claimed.
#[must_use]
pub fn items_from_labels(
    labels: Vec<String>,
    disabled: &[String],
    auto_hotkeys: bool,
) -> Vec<Item<String>> {
    let mut taken: Vec<char> = Vec::new();

    labels
        .into_iter()
        .map(|label| {
            let is_disabled = disabled.contains(&label);
            let hotkey = if auto_hotkeys {
                label
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .flat_map(char::to_lowercase)
                    .find(|c| !taken.contains(c))
            } else {
                None
            };

            let mut item = Item::new(label.clone(), label).with_disabled(is_disabled);
            if let Some(key) = hotkey {
                taken.push(key);
                item = item.with_hotkey(key);
            }
            item
        })
        .collect()
}
