mod common;
mod config;
mod logging;
pub mod storybook;
pub mod tui;

pub use common::{PROJECT_NAME, PROJECT_VERSION};
pub use config::{Config, ConfigureArgs, configure, set_debug_mode, show_configuration};
pub use logging::Logging;
pub use storybook::{Screen, StoryAction, Storybook, StorybookView};
