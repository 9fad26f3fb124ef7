//! UX Showcase - Main entry point
//!
//! Parses the command line, sets up logging, then either runs the interactive
//! showcase or answers a headless catalog query.

use anyhow::{Context, Result};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};

use uxshowcase::app::App;
use uxshowcase::cli::{self, Cli, Commands, MenuQuery, ProductQuery};
use uxshowcase::config::ShowcaseConfig;
use uxshowcase::data;
use uxshowcase::logging::{LogConfig, init_logging};
use uxshowcase::types::Screen;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let mut log_config = LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone());
    if cli.launches_tui() {
        log_config = log_config.for_tui();
    }
    init_logging(&log_config).context("Failed to initialize logging")?;
    info!("UX showcase starting up");
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::ValidateConfig { path }) => validate_config(&path),
        Some(Commands::InitConfig { path }) => {
            ShowcaseConfig::default().save_to_file(&path)?;
            info!("Wrote default configuration to {:?}", path);
            println!("✓ Wrote default configuration to {}", path.display());
            Ok(())
        }
        Some(Commands::Products(query)) => print_products(&query),
        Some(Commands::Menu(query)) => print_menu(&query),
        Some(Commands::Run { screen }) => {
            let config = load_config(cli.config.as_deref())?;
            run_tui(config, screen)
        }
        None => {
            info!("No command specified, launching the showcase");
            let config = load_config(cli.config.as_deref())?;
            run_tui(config, None)
        }
    }
}

/// Load and validate `--config`, or fall back to defaults
fn load_config(path: Option<&Path>) -> Result<ShowcaseConfig> {
    let Some(path) = path else {
        return Ok(ShowcaseConfig::default());
    };
    info!("Loading configuration from: {:?}", path);
    let config = ShowcaseConfig::load_from_file(path)?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {:?}", path))?;
    Ok(config)
}

fn validate_config(path: &Path) -> Result<()> {
    info!("Validating configuration file: {:?}", path);
    let checked = ShowcaseConfig::load_from_file(path)
        .and_then(|config| config.validate().map_err(anyhow::Error::from));
    match checked {
        Ok(()) => {
            info!("Configuration validation successful");
            println!("✓ Configuration file is valid: {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("Configuration validation failed: {:#}", e);
            eprintln!("✗ Configuration validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn print_products(query: &ProductQuery) -> Result<()> {
    let catalog = data::sample_products()?;
    let visible = catalog.filter(&query.to_filter()?);
    if query.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        print!("{}", cli::product_table(&visible));
    }
    Ok(())
}

fn print_menu(query: &MenuQuery) -> Result<()> {
    let catalog = data::sample_menu()?;
    let visible = catalog.filter(&query.to_filter());
    if query.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        print!("{}", cli::menu_table(&visible));
    }
    Ok(())
}

/// Run the interactive showcase
fn run_tui(mut config: ShowcaseConfig, screen: Option<Screen>) -> Result<()> {
    if let Some(screen) = screen {
        config.start_screen = screen;
    }
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    if let Err(e) = crossterm::execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let mut app = App::new(&config);
            app.run(&mut terminal).map_err(anyhow::Error::from)
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    result
}
