//! Tabex CLI - renders JSON generation requests as documents

mod config;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::{Config, Input};
use tabex::DocumentFormat;

#[derive(Parser)]
#[command(name = "tabex")]
#[command(
    author,
    version,
    about = "Render tabular JSON requests as CSV or XLSX documents"
)]
struct Cli {
    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a request as delimited text
    Csv {
        /// Request JSON file ("-" for stdin)
        request: PathBuf,

        /// Output file ("-" for stdout, default: the request's filename)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter, overriding the request
        #[arg(short, long)]
        delimiter: Option<String>,
    },

    /// Render a request as an XLSX workbook
    Xlsx {
        /// Request JSON file ("-" for stdin)
        request: PathBuf,

        /// Output file ("-" for stdout, default: the request's filename)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Worksheet name, overriding the request
        #[arg(long)]
        sheet_name: Option<String>,

        /// Give every header column a fixed width
        #[arg(long)]
        auto_size: bool,
    },
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let mut config = match cli.command {
            Commands::Csv {
                request,
                output,
                delimiter,
            } => Config {
                delimiter,
                ..Config::new(DocumentFormat::Csv, Input::from_arg(request), output)
            },
            Commands::Xlsx {
                request,
                output,
                sheet_name,
                auto_size,
            } => Config {
                sheet_name,
                auto_size,
                ..Config::new(DocumentFormat::Xlsx, Input::from_arg(request), output)
            },
        };
        config.verbosity = cli.verbose;
        config
    }
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());
    init_logging(&config);

    let written = config::run(&config)?;
    if let Some(path) = written.path {
        println!("{} ({} bytes)", path.display(), written.bytes);
    }
    Ok(())
}
