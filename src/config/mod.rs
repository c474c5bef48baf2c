mod loader;
pub use loader::{Config, ConfigureArgs, configure, set_debug_mode, show_configuration};
