//! CLI entry point for papyrus

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "papyrus")]
#[command(version)]
#[command(about = "A small Markdown blog generator", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site into the output directory
    #[command(alias = "b")]
    Build,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// Remove the output directory
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "papyrus=debug,info"
    } else {
        "papyrus=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let site = papyrus::Site::new(&base_dir)?;

    match cli.command {
        Commands::Build => {
            tracing::info!("Building site...");
            site.build()?;
            println!("Built successfully!");
        }

        Commands::New { title } => {
            tracing::info!("Creating new post: {}", title);
            site.new_post(&title)?;
        }

        Commands::Clean => {
            tracing::info!("Cleaning output directory...");
            site.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
