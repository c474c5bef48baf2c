use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;

use enhanced_select::{
    Config, ConfigureArgs, Logging, PROJECT_NAME, PROJECT_VERSION, Storybook, configure,
    set_debug_mode, show_configuration,
    tui::{Orientation, SelectPrompt, TerminalApp, items_from_labels},
};

#[derive(Parser)]
#[command(version = PROJECT_VERSION, about, long_about = None)]
pub struct UserArgs {
    #[command(subcommand)]
    command: Option<Command>,

    /// Log to stderr instead of the log file (ignored by full-screen commands)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the select widget variants (default)
    #[command(visible_alias = "sb")]
    Storybook {
        /// Skip the variant picker
        #[arg(long)]
        orientation: Option<Orientation>,

        /// Confirm an item as soon as its hotkey is pressed
        #[arg(long)]
        instant_select: bool,
    },

    /// Ask for one of the given options and print it
    Pick(PickArgs),

    /// Show Config
    #[command(visible_alias = "show-config")]
    ShowConfiguration,

    /// Change stored settings (interactive without flags)
    Configure(ConfigureArgs),

    /// Enable or disable debug logging
    Debug {
        /// Disable debug mode
        #[arg(long, short)]
        disable: bool,
    },
}

#[derive(clap::Args)]
struct PickArgs {
    /// Options to choose from, in display order
    #[arg(required = true)]
    options: Vec<String>,

    /// Prompt title
    #[arg(long, default_value = "Choose an option")]
    title: String,

    #[arg(long, value_enum, default_value_t)]
    orientation: Orientation,

    /// Show OPTION but do not allow choosing it (repeatable)
    #[arg(long = "disabled", value_name = "OPTION")]
    disabled: Vec<String>,

    /// Give every option a hotkey
    #[arg(long)]
    hotkeys: bool,

    /// Confirm an option as soon as its hotkey is pressed
    #[arg(long)]
    instant_select: bool,
}

impl Command {
    /// Commands that take over the terminal with the alternate screen.
    fn is_full_screen(&self) -> bool {
        match self {
            Self::Storybook { .. } | Self::Pick(_) => true,
            Self::Configure(args) => args.is_empty(),
            Self::ShowConfiguration | Self::Debug { .. } => false,
        }
    }
}

/// Stderr logging is only safe while nothing draws on the alternate screen.
fn logs_to_stderr(verbose: bool, command: Option<&Command>) -> bool {
    verbose && command.is_some_and(|command| !command.is_full_screen())
}

fn init_logging(to_stderr: bool, debug_mode: bool) -> Result<()> {
    let logging = Logging::new().with_debug_mode(debug_mode);

    if to_stderr {
        logging.start()
    } else {
        let file_name = format!("{PROJECT_NAME}.log");
        logging.with_file(file_name).start()
    }
}

fn run_storybook(config: &Config, orientation: Option<Orientation>, instant_select: bool) -> Result<()> {
    let mut storybook = Storybook::new()
        .with_orientation(orientation.or(config.orientation))
        .with_instant_select_on_hotkey(instant_select || config.instant_select_on_hotkey)
        .with_separator(config.separator.clone());

    let mut app = TerminalApp::new().context("Unable to set up the terminal")?;
    storybook.run(&mut app)
}

fn pick(args: PickArgs, config: &Config) -> Result<()> {
    let items = items_from_labels(args.options, &args.disabled, args.hotkeys);

    let subtitle = format!("{PROJECT_NAME} {PROJECT_VERSION}");
    let choice = SelectPrompt::new(&args.title, items)
        .with_subtitle(&subtitle)
        .with_orientation(args.orientation)
        .with_separator(config.separator.clone())
        .with_instant_select_on_hotkey(args.instant_select || config.instant_select_on_hotkey)
        .prompt()
        .context("Failed to read selection")?;

    match choice {
        Some(value) => {
            info!("pick: {value}");
            println!("{value}");
        }
        None => eprintln!("{}", "No option selected".dimmed()),
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = UserArgs::parse();

    let config = Config::load().context("Unable to load configuration")?;
    init_logging(logs_to_stderr(args.verbose, args.command.as_ref()), config.debug)?;

    match args.command {
        None => run_storybook(&config, None, false),
        Some(Command::Storybook {
            orientation,
            instant_select,
        }) => run_storybook(&config, orientation, instant_select),
        Some(Command::Pick(pick_args)) => pick(pick_args, &config),
        Some(Command::ShowConfiguration) => show_configuration(),
        Some(Command::Configure(configure_args)) => configure(&configure_args),
        Some(Command::Debug { disable }) => set_debug_mode(!disable),
    }
}
