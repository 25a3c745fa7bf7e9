use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod classify_cmd;
mod config;
mod extract_cmd;
mod prompt;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    about = "Turn credit card statement PDFs into per-year transaction CSVs"
)]
struct Cli {
    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse every `YYYY Mmm CreditCardStatement.pdf` in a directory and write
    /// `<year>_transactions.csv` files (default when no command is given)
    Extract {
        /// Statement directory (prompted for if omitted and not configured)
        dir: Option<PathBuf>,

        /// Output directory (default: config export.output_dir, else DIR)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print how each line of one statement (PDF or extracted text) is parsed
    Classify {
        file: PathBuf,

        /// Statement year stamped on every row
        #[arg(long)]
        year: i32,
    },

    /// Manage ~/.tally/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,

    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let command = cli.command.unwrap_or(Command::Extract { dir: None, out: None });

    match command {
        Command::Extract { dir, out } => {
            let cfg = config::load_config()?;
            extract_cmd::run_extract(dir, out, &cfg)?;
        }

        Command::Classify { file, year } => {
            classify_cmd::run_classify(&file, year)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}
