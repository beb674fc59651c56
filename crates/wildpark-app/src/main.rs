//! # WildPark - Park registry CLI
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads: ParkConfig (shared)                              │
//! │    ├── Creates: Park / SharedPark (domain / adapter)           │
//! │    ├── Creates: ConsoleReporter or TracingReporter (adapter)   │
//! │    ├── Optional: EventJournal via FanoutReporter (adapter)     │
//! │    └── Runs: one use case per subcommand                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   wildpark demo [--search <sector>]     - Full walkthrough on the global park
//!   wildpark find <sector>                - Look a sector up
//!   wildpark staff                        - Staff roll call
//!   wildpark animals [--sector <name>]    - List animals
//!   wildpark sounds <sector> [--times n]  - Make a sector sound off
//!   wildpark examine <animal> [--vet n]   - Veterinary examination
//!   wildpark stats                        - Park statistics
//!
//! `--journal <n>` keeps the last n events and appends them to the output.

mod commands;
mod sinks;
mod views;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wildpark_domain::Reporter;
use wildpark_shared::ParkConfig;

use commands::{AnimalsCommand, DemoCommand, ExamineCommand, FindCommand, SoundsCommand};
use sinks::Sinks;

#[derive(Parser)]
#[command(name = "wildpark")]
#[command(about = "WildPark - sectors, animals and staff of a park")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Park description (.json, .yaml or .yml); defaults to the demo park
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON; events go to the log instead of stdout
    #[arg(long, global = true)]
    json: bool,

    /// Keep the last N events in a timestamped journal and print it at the end
    #[arg(long, global = true, value_name = "N")]
    journal: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full walkthrough against the process-wide park
    Demo(DemoCommand),
    /// Look up a sector by name
    Find(FindCommand),
    /// List staff, each reporting for work
    Staff,
    /// List animals of one sector or of the whole park
    Animals(AnimalsCommand),
    /// Make every animal of a sector produce its sound
    Sounds(SoundsCommand),
    /// Have a veterinarian examine an animal
    Examine(ExamineCommand),
    /// Show park statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ParkConfig::from_file(path)?,
        None => ParkConfig::demo(),
    };
    debug!(park = %config.name, "configuration ready");

    let sinks = Sinks::new(cli.json, cli.journal);
    let reporter: &dyn Reporter = &sinks.reporter;

    let output = match cli.command {
        Commands::Demo(cmd) => cmd.run(&config, reporter)?,
        Commands::Find(cmd) => cmd.run(&config.build_park()?, reporter)?,
        Commands::Staff => commands::staff(&config.build_park()?, reporter)?,
        Commands::Animals(cmd) => cmd.run(&config.build_park()?, reporter)?,
        Commands::Sounds(cmd) => cmd.run(&config.build_park()?, reporter)?,
        Commands::Examine(cmd) => cmd.run(&config, reporter)?,
        Commands::Stats => commands::stats(&config.build_park()?, reporter)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&sinks.attach_journal(output))?);
    } else if let Some(journal) = &sinks.journal {
        println!();
        for entry in journal.recent(usize::MAX).into_iter().rev() {
            println!("[{}] {}", entry.timestamp, entry.message);
        }
    }

    Ok(())
}
