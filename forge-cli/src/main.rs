//! cxxforge CLI - prompt-to-C++ template generation, AI edits, remote runs
//!
//! This binary wires the pure template engine and the two remote service
//! clients into three subcommands: `generate`, `edit` and `run`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::error;

mod commands;
mod config;

use commands::*;
use config::ForgeConfig;

/// C++ snippet workbench: template generation, AI edits, remote runs
#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "C++ snippet workbench: template generation, AI edits, remote runs")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a C++ program from a natural-language prompt
    Generate {
        /// What the program should do
        prompt: String,
        /// Naming convention (camelCase, snake_case, PascalCase)
        #[arg(long)]
        naming: Option<String>,
        /// Indentation (2spaces, 4spaces, tabs)
        #[arg(long)]
        indent: Option<String>,
        /// Brace style (K&R, Allman, GNU)
        #[arg(long)]
        braces: Option<String>,
        /// Skip placeholder comments
        #[arg(long)]
        no_comments: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rewrite code through the AI edit service
    Edit {
        /// The change to make
        instruction: String,
        /// Source file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Rewrite the input file in place
        #[arg(long, conflicts_with = "output")]
        write: bool,
    },

    /// Compile and run code on the remote execution service
    Run {
        /// Source file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Text fed to the program's standard input
        #[arg(long, default_value = "")]
        stdin_data: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = ForgeConfig::load(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Generate {
            prompt,
            naming,
            indent,
            braces,
            no_comments,
            output,
        } => generate_command(
            config.style,
            &prompt,
            naming.as_deref(),
            indent.as_deref(),
            braces.as_deref(),
            no_comments,
            output.as_deref(),
        ),
        Commands::Edit {
            instruction,
            input,
            output,
            write,
        } => match config.edit_client() {
            Ok(service) => {
                edit_command(
                    &service,
                    &instruction,
                    input.as_deref(),
                    output.as_deref(),
                    write,
                )
                .await
            }
            Err(e) => Err(e),
        },
        Commands::Run { input, stdin_data } => match config.exec_client() {
            Ok(service) => run_command(&service, input.as_deref(), &stdin_data).await,
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("command failed: {e}");
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
