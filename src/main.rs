mod challenge;
mod commands;
mod config;
mod error;
mod executor;
mod harness;
mod languages;
mod runner;
mod tester;
mod value;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(name = "codequest", version)]
#[command(about = "CodeQuest CLI - Interactive coding challenges in your terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available coding challenges
    List {
        /// Filter by language (typescript, javascript, php, go)
        #[arg(short, long)]
        language: Option<String>,

        /// Filter by difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Fetch a challenge and create its local workspace
    Fetch {
        /// Challenge slug (see `codequest list`)
        slug: String,
    },

    /// Test your solution against the challenge test cases
    Test,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("codequest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    config::init_config()?;
    languages::init_languages()?;
    debug!("Configuration: {:?}", config::get_config());

    let cli = Cli::parse();
    let current_dir = std::env::current_dir().context("Failed to resolve current directory")?;

    match cli.command {
        Some(Commands::List {
            language,
            difficulty,
        }) => {
            commands::list_challenges(language.as_deref(), difficulty.as_deref())?;
        }
        Some(Commands::Fetch { slug }) => {
            commands::fetch_challenge(&slug, &current_dir)?;
        }
        Some(Commands::Test) => {
            if !commands::test_solution(&current_dir).await? {
                std::process::exit(1);
            }
        }
        None => {
            println!("Welcome to CodeQuest CLI!");
            println!("Use 'codequest --help' to see available commands.");
        }
    }

    Ok(())
}
