//! film-indonesia CLI
//!
//! Browse a catalog of popular Indonesian films in the terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;

use film_indonesia::catalog::Catalog;
use film_indonesia::error::Result;
use film_indonesia::logging;
use film_indonesia::output::{format_catalog, format_screen};
use film_indonesia::route::Route;
use film_indonesia::screen;
use film_indonesia::tui;
use film_indonesia::types::{BrowseConfig, LogConfig, LogTarget, OutputFormat};

#[derive(Parser)]
#[command(name = "film-indonesia")]
#[command(about = "Browse popular Indonesian films")]
#[command(version)]
struct Cli {
    /// Log at debug level (FILM_INDONESIA_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive browser (default)
    Browse {
        /// Log file (default: <cache dir>/film-indonesia/film-indonesia.log)
        #[arg(long, env = "FILM_INDONESIA_LOG_FILE")]
        log_file: Option<PathBuf>,
    },

    /// Render one screen to stdout, e.g. `show detail/4/Grid`
    Show {
        /// Route: movies, grid, about, detail/{movieId}/{source}
        route: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Print the catalog with indices
    Catalog {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Browse { log_file: None });

    let result = match command {
        Commands::Browse { log_file } => cmd_browse(log_file, cli.verbose),
        Commands::Show { route, format } => cmd_show(&route, format.into(), cli.verbose),
        Commands::Catalog { format } => cmd_catalog(format.into(), cli.verbose),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_browse(log_file: Option<PathBuf>, verbose: bool) -> Result<()> {
    let defaults = BrowseConfig::default();
    let config = BrowseConfig {
        log: LogConfig {
            target: log_file.map(LogTarget::File).unwrap_or(defaults.log.target),
            verbose,
        },
    };

    logging::init(&config.log)?;
    tui::run(&config)
}

fn cmd_show(raw: &str, format: OutputFormat, verbose: bool) -> Result<()> {
    logging::init(&stderr_logging(verbose))?;

    let route = Route::parse(raw)?;
    debug!(input = raw, route = %route, "resolved route");

    let model = screen::render(&route, &Catalog::builtin());
    print!("{}", format_screen(&model, format)?);
    Ok(())
}

fn cmd_catalog(format: OutputFormat, verbose: bool) -> Result<()> {
    logging::init(&stderr_logging(verbose))?;
    print!("{}", format_catalog(&Catalog::builtin(), format)?);
    Ok(())
}

fn stderr_logging(verbose: bool) -> LogConfig {
    LogConfig {
        target: LogTarget::Stderr,
        verbose,
    }
}
