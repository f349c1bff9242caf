use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{
    ConfigCommand, FoodJournal, HistoryCommand, MealCommand, PantryCommand, TodayCommand,
    WaterCommand,
};
use config::Config;
use foodlog_core::{FileStore, Journal, JournalOptions, StoreRepository};

#[derive(Parser)]
#[command(name = "foodlog")]
#[command(version)]
#[command(about = "Log meals, water and pantry foods", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's water and meals
    Today(TodayCommand),

    /// Log, inspect and delete meals
    Meal(MealCommand),

    /// Browse past meals by day
    History(HistoryCommand),

    /// Manage saved foods
    Pantry(PantryCommand),

    /// Track water intake
    Water(WaterCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Save config path for config commands
    let cli_config_path = cli.config.clone();

    let config = Config::load(cli.config)?;

    execute_command(cli.command, &config, cli_config_path)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_journal(config: &Config) -> FoodJournal {
    let store = FileStore::new(config.data_dir.value.clone());
    let options = JournalOptions {
        daily_water_reset: config.daily_water_reset.value,
    };
    Journal::with_options(StoreRepository::new(store), options)
}

fn execute_command(
    command: Option<Commands>,
    config: &Config,
    cli_config_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let now = Local::now();
    let today = now.date_naive();

    match command {
        Some(Commands::Today(cmd)) => {
            cmd.run(&open_journal(config), today)?;
        }
        Some(Commands::Meal(cmd)) => {
            cmd.run(&open_journal(config), now)?;
        }
        Some(Commands::History(cmd)) => {
            cmd.run(&open_journal(config))?;
        }
        Some(Commands::Pantry(cmd)) => {
            cmd.run(&open_journal(config), now)?;
        }
        Some(Commands::Water(cmd)) => {
            cmd.run(&open_journal(config), today)?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(config, cli_config_path)?;
        }
        None => {
            // The Today view is the home screen
            TodayCommand::default().run(&open_journal(config), today)?;
        }
    }

    Ok(())
}
