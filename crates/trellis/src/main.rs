//! Trellis CLI - site configuration for component library documentation.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Site configuration for component library documentation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to trellis.toml settings file
    #[arg(short, long, default_value = "trellis.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default trellis.toml
    Init {
        /// Overwrite an existing settings file
        #[arg(short, long)]
        yes: bool,
    },

    /// Emit the site configuration as JSON
    Config {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the head tags as HTML
    Head,

    /// Apply per-page transforms to every content page
    Pages {
        /// Content directory (defaults to the configured source directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Print the transformed page data as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the CSS post-processing pipeline on a stylesheet
    Css {
        /// Stylesheet to process
        input: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minify the output
        #[arg(long)]
        minify: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Config { output } => {
            commands::config::run(&cli.config, output)?;
        }
        Commands::Head => {
            commands::head::run(&cli.config)?;
        }
        Commands::Pages { dir, json } => {
            commands::pages::run(&cli.config, dir, json)?;
        }
        Commands::Css {
            input,
            output,
            minify,
        } => {
            commands::css::run(&cli.config, &input, output, minify)?;
        }
    }

    Ok(())
}
