//! Gomoku GUI
//!
//! Two players share one window and take turns clicking the board.

use std::path::PathBuf;

use clap::Parser;
use gomoku::ui::GomokuApp;
use gomoku::AppConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Two-player Gomoku on a 15x15 board
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Two-player Gomoku on a 15x15 board", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    if cli.print_config {
        match AppConfig::default_toml() {
            Ok(toml) => {
                print!("{toml}");
                return Ok(());
            }
            Err(err) => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
    }

    let config = match AppConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .init();

    if cli.config.exists() {
        info!(path = %cli.config.display(), "loaded config");
    } else {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let window = &config.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.min_width, window.min_height])
            .with_title(window.title.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )
}
