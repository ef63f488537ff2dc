//! Solidity editor CLI
//!
//! Terminal front end for the editor core: highlighted listings, token
//! dumps, completion queries, AI-backed compilation and starter templates.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::{error, info};

mod commands;
mod config;
mod utils;

use commands::*;
use config::CliConfig;

/// Solidity editor CLI
#[derive(Parser)]
#[command(name = "sol")]
#[command(about = "Highlight, complete and AI-compile Solidity contracts")]
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
    /// Print a source file with syntax colors
    Highlight {
        /// Input file
        input: PathBuf,
    },

    /// Dump the highlight tokens of every line
    Tokens {
        /// Input file
        input: PathBuf,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List completions at a cursor position
    Complete {
        /// Input file
        input: PathBuf,
        /// Byte offset of the cursor
        #[arg(short, long, conflicts_with_all = ["line", "column"])]
        offset: Option<usize>,
        /// 1-based cursor line
        #[arg(short, long, requires = "column")]
        line: Option<usize>,
        /// 1-based cursor column
        #[arg(long, requires = "line")]
        column: Option<usize>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Compile and audit a contract with the AI analyzer
    Compile {
        /// Input file
        input: PathBuf,
        /// Show the ABI listing
        #[arg(long)]
        abi: bool,
        /// Show the analysis report panel
        #[arg(long)]
        info: bool,
        /// Print the raw report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the bundled starter contracts
    Templates,

    /// Write a starter contract to a file
    New {
        /// Output file
        path: PathBuf,
        /// Template key
        #[arg(short, long, default_value = "counter")]
        template: String,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let config = CliConfig::load(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Highlight { input } => highlight_command(&input),
        Commands::Tokens { input, json } => tokens_command(&input, json),
        Commands::Complete {
            input,
            offset,
            line,
            column,
            json,
        } => {
            let cursor = match (offset, line, column) {
                (Some(offset), _, _) => Cursor::Offset(offset),
                (None, Some(line), Some(column)) => Cursor::Position { line, column },
                _ => Cursor::End,
            };
            complete_command(&input, cursor, json)
        }
        Commands::Compile {
            input,
            abi,
            info,
            json,
        } => compile_command(&input, &config, CompileOptions { abi, info, json }).await,
        Commands::Templates => templates_command(),
        Commands::New {
            path,
            template,
            force,
        } => new_command(&path, &template, force),
    };

    match result {
        Ok(()) => {
            info!("Command completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
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

    Ok(())
}
