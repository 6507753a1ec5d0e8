// ABOUTME: Ecoplate CLI - runs the recipe experiment from the command line
// ABOUTME: Registers participants, serves searches, records choices, and prints JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Register and get assigned an experiment arm
//! ecoplate-cli register --email anna@example.com
//!
//! # Search by ingredients, then pick the second result
//! ecoplate-cli search "csirke, hagyma"
//! ecoplate-cli choose 2
//!
//! # Inspect state
//! ecoplate-cli status
//! ecoplate-cli choices
//! ecoplate-cli corpus
//!
//! # Forget the participant and the choice log
//! ecoplate-cli reset
//! ```

mod commands;

use clap::{Parser, Subcommand};
use commands::Session;
use ecoplate::config::AppConfig;
use ecoplate::logging::LoggingConfig;
use ecoplate_intelligence::RecommendationEngine;

#[derive(Parser)]
#[command(
    name = "ecoplate-cli",
    about = "Ecoplate recipe experiment CLI",
    long_about = "Command-line front end for the Ecoplate A/B/C recipe recommendation experiment."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Register a participant and assign an experiment arm
    Register {
        /// Participant e-mail
        #[arg(long)]
        email: String,

        /// Replace an existing registration
        #[arg(long)]
        force: bool,
    },

    /// Show the registered participant and logged choice count
    Status,

    /// Search recipes by comma-separated ingredients
    Search {
        /// Ingredient list, e.g. "csirke, hagyma"
        #[arg(required = true, num_args = 1..)]
        ingredients: Vec<String>,
    },

    /// Choose a recipe from the last search by its 1-based rank
    Choose {
        /// Rank of the chosen recipe
        rank: usize,
    },

    /// Print the choice log
    Choices,

    /// Load the corpus and print it with its origin
    Corpus,

    /// Forget the participant, the choice log, and any pending search
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let config = AppConfig::from_env()?;
    let engine = RecommendationEngine::from_env();
    let mut session = Session::new(config, engine);

    let output = match cli.command {
        Command::Register { email, force } => session.register(&email, force)?,
        Command::Status => session.status()?,
        Command::Search { ingredients } => session.search(&ingredients.join(" ")).await?,
        Command::Choose { rank } => session.choose(rank).await?,
        Command::Choices => session.choices()?,
        Command::Corpus => session.corpus().await?,
        Command::Reset => session.reset()?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
