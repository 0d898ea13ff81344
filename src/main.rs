mod cli;
mod config;
mod display;
mod error;
mod markdown;
mod models;
mod renderer;
mod state;
mod transcript;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use renderer::Format;
use state::GenerationGate;

#[derive(Parser)]
#[command(name = "council-report")]
#[command(about = "Generate printable reports from LLM council deliberations", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report for one council turn
    Gen {
        /// Transcript JSON: a single turn or a whole conversation
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Pdf)]
        format: Format,

        /// Assistant turn to report on, 1-based (defaults to the last)
        #[arg(long)]
        turn: Option<usize>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory to write the report to (overrides the config)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Dry run - preview in the terminal instead of writing a file
        #[arg(long)]
        dry_run: bool,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Show commands
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize council-report.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ShowCommands {
    /// List the council turns in a transcript
    Turns {
        /// Transcript JSON file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG takes precedence over -v
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let gate = GenerationGate::new();

    let result = match cli.command {
        Commands::Gen {
            input,
            format,
            turn,
            config,
            output_dir,
            dry_run,
        } => cli::gen::run(&gate, input, format, turn, config, output_dir, dry_run),
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::Show { command } => match command {
            ShowCommands::Turns { input } => cli::show::turns(&input),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
