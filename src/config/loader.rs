use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};
use bon::Builder;
use log::info;
use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Margin, Rotate, Style},
};

use crate::common::{PROJECT_VERSION, print_header, project_config_dir};
use crate::tui::{Orientation, select_prompt_with_shortcuts};

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(clap::Args, Default)]
pub struct ConfigureArgs {
    /// Start the storybook in this orientation instead of asking
    #[arg(long)]
    pub orientation: Option<Orientation>,

    /// Forget the preselected orientation
    #[arg(long, conflicts_with = "orientation")]
    pub clear_orientation: bool,

    /// Confirm an item as soon as its hotkey is pressed
    #[arg(long)]
    pub instant_select_on_hotkey: Option<bool>,

    /// Text placed between items in horizontal mode
    #[arg(long)]
    pub separator: Option<String>,
}

impl ConfigureArgs {
    /// True when no field was given, which makes `configure` interactive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orientation.is_none()
            && !self.clear_orientation
            && self.instant_select_on_hotkey.is_none()
            && self.separator.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct Config {
    /// Preselected storybook orientation; `None` shows the variant picker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Hotkeys confirm immediately (default: false)
    #[serde(default)]
    #[builder(default)]
    pub instant_select_on_hotkey: bool,
    /// Separator between horizontal items (default: two spaces)
    #[serde(default = "default_separator")]
    #[builder(into, default = default_separator())]
    pub separator: String,
    /// Debug logging (default: false)
    #[serde(default)]
    #[builder(default)]
    pub debug: bool,
}

fn default_separator() -> String {
    crate::tui::components::enhanced_select::DEFAULT_SEPARATOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: None,
            instant_select_on_hotkey: false,
            separator: default_separator(),
            debug: false,
        }
    }
}

#[derive(Tabled)]
struct ConfigDisplay<'a> {
    orientation: String,
    instant_select_on_hotkey: bool,
    separator: String,
    debug: bool,
    config_file: &'a str,
}

impl<'a> ConfigDisplay<'a> {
    fn new(config: &Config, config_file: &'a str) -> Self {
        Self {
            orientation: config
                .orientation
                .map_or_else(|| "ask".to_string(), |o| o.to_string()),
            instant_select_on_hotkey: config.instant_select_on_hotkey,
            separator: format!("\"{}\"", config.separator),
            debug: config.debug,
            config_file,
        }
    }
}

impl Config {
    pub(crate) fn load_existing(config_file: &Path) -> Result<Self> {
        let config_string = fs::read_to_string(config_file)
            .with_context(|| format!("Unable to read {}", config_file.display()))?;

        let config: Config = serde_json::from_str(&config_string)
            .context("Unable to deserialize configuration data")?;

        Ok(config)
    }

    /// Loads `config_file`, falling back to defaults if it does not exist yet.
    pub(crate) fn load_from(config_file: &Path) -> Result<Self> {
        if config_file.exists() {
            Config::load_existing(config_file)
        } else {
            info!("no configuration at {}, using defaults", config_file.display());
            Ok(Config::default())
        }
    }

    pub(crate) fn save_to(&self, config_file: &Path) -> Result<()> {
        let config_string =
            serde_json::to_string_pretty(self).context("Unable to serialize configuration data")?;

        let mut fd = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(config_file)
            .with_context(|| format!("Unable to write {}", config_file.display()))?;

        fd.write_all(config_string.as_bytes()).with_context(|| {
            format!("Failed to write configuration to {}", config_file.display())
        })?;

        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let config_file = project_config_dir()?.join(CONFIG_FILE_NAME);
        self.save_to(&config_file)
    }

    pub fn load() -> Result<Self> {
        let config_file = project_config_dir()?.join(CONFIG_FILE_NAME);
        Config::load_from(&config_file)
    }

    /// Applies the explicitly provided fields of `args`.
    pub(crate) fn apply(&mut self, args: &ConfigureArgs) {
        if let Some(orientation) = args.orientation {
            self.orientation = Some(orientation);
        }
        if args.clear_orientation {
            self.orientation = None;
        }
        if let Some(instant) = args.instant_select_on_hotkey {
            self.instant_select_on_hotkey = instant;
        }
        if let Some(separator) = &args.separator {
            self.separator.clone_from(separator);
        }
    }
}

fn display_configuration(config: &Config) -> Result<()> {
    let config_file = project_config_dir()?.join(CONFIG_FILE_NAME);
    let config_file = config_file.to_string_lossy();

    let mut table = Table::new([ConfigDisplay::new(config, &config_file)]);
    table
        .with(Rotate::Left)
        .with(Style::modern())
        .with(Margin::new(4, 0, 0, 0));

    print_header();
    println!("{table}");

    Ok(())
}

/// Asks for the storybook orientation with a select prompt.
fn ask_orientation() -> Result<Option<Option<Orientation>>> {
    let choices = [
        ("Vertical", Some('v'), Some(Orientation::Vertical)),
        ("Horizontal", Some('h'), Some(Orientation::Horizontal)),
        ("Ask every time", Some('a'), None),
    ];
    let options = choices
        .iter()
        .map(|(label, hotkey, _)| (*label, *hotkey))
        .collect();

    let picked = select_prompt_with_shortcuts(
        "Storybook orientation",
        options,
        Some("Enter save, Esc keep current setting"),
        Some(PROJECT_VERSION),
        Orientation::Vertical,
    )
    .context("Failed to read orientation")?;

    Ok(picked.and_then(|idx| choices.get(idx)).map(|(_, _, o)| *o))
}

////////////////////////////////////////////////////////////////////////////////
// PUBLIC
////////////////////////////////////////////////////////////////////////////////

pub fn show_configuration() -> Result<()> {
    let config = Config::load()?;

    display_configuration(&config)
}

/// Updates the stored configuration.
///
/// Only explicitly provided fields change. Without any field, the orientation
/// is asked for interactively.
pub fn configure(args: &ConfigureArgs) -> Result<()> {
    let mut config = Config::load()?;

    if args.is_empty() {
        let Some(orientation) = ask_orientation()? else {
            return Ok(());
        };
        config.orientation = orientation;
    } else {
        config.apply(args);
    }

    config.save()?;

    display_configuration(&config)
}

pub fn set_debug_mode(enable: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.debug = enable;
    config.save()?;

    println!("Debug logging {}", if enable { "enabled" } else { "disabled" });

    Ok(())
}
