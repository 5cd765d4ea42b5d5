// Bot Forms - validation CLI for trading-bot configuration forms
// Single entry point for checking dip, grid and momentum bot forms

use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::{debug, error, info, Level};
use bot_form_validator::{Config, ConfigError, FormResult};

// Load command modules from cli directory
#[path = "../cli/form_commands.rs"]
mod form_commands;

#[derive(Parser)]
#[command(name = "bot-forms")]
#[command(version = "0.1.0")]
#[command(about = "Validate trading-bot configuration forms", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,

    /// Validate a single form file and simulate its submission
    Validate {
        /// Form file (JSON with a "bot" field)
        file: String,

        /// Print the validation result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate every .json form in a directory
    Batch {
        /// Directory containing form files
        dir: String,
    },

    /// Preview the geometric price ladder for grid settings
    Ladder {
        /// Lower price limit
        #[arg(long)]
        lower: f64,

        /// Upper price limit
        #[arg(long)]
        upper: f64,

        /// Small grid size in percent
        #[arg(long)]
        small_grid: f64,

        /// Total investment to spread over the intervals
        #[arg(long)]
        investment: Option<f64>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Read config before logging so its level can apply
    let config = load_config(&cli.config);

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config
            .as_ref()
            .ok()
            .and_then(|c| c.logging.level.parse::<Level>().ok())
            .unwrap_or(Level::INFO)
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!("📁 Config: {}", cli.config);
    if !matches!(cli.command, Commands::Init) && !Path::new(&cli.config).exists() {
        info!("Using default validation rules ({} not found)", cli.config);
    }

    if let Err(e) = run(cli.command, &cli.config, config) {
        error!("❌ [{}] {}", e.category(), e.user_message());
        std::process::exit(1);
    }
}

fn run(command: Commands, config_path: &str, config: Result<Config, ConfigError>) -> FormResult<()> {
    match command {
        // Init doesn't require config (it creates it)
        Commands::Init => form_commands::init_config(config_path),

        Commands::Validate { file, json } => {
            let config = config?;
            form_commands::validate_file(&file, json, &config)
        }

        Commands::Batch { dir } => {
            let config = config?;
            form_commands::validate_batch(&dir, &config)
        }

        Commands::Ladder { lower, upper, small_grid, investment } => {
            let config = config?;
            form_commands::show_ladder(lower, upper, small_grid, investment, &config)
        }
    }
}

/// Load the config file, falling back to defaults when it does not exist
fn load_config(path: &str) -> Result<Config, ConfigError> {
    if Path::new(path).exists() {
        Config::from_file(path)
    } else {
        Ok(Config::default())
    }
}
