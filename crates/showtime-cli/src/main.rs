//! `showtime` CLI — list a movie catalog and plan non-overlapping showings.
//!
//! ## Usage
//!
//! ```sh
//! # Interactive planning over the built-in catalog
//! showtime
//!
//! # List the movies in a catalog file
//! showtime --catalog movies.json movies
//!
//! # Rank every way to watch two movies
//! showtime plan -k 2
//!
//! # Same, as JSON
//! showtime plan -k 2 --format json
//! ```

mod report;
mod table;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use showtime_engine::{find_movie_combinations, Catalog};
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "showtime",
    version,
    about = "Plan back-to-back movie showings with the least waiting"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog JSON file (uses the built-in sample catalog if omitted)
    #[arg(short, long, global = true)]
    catalog: Option<String>,

    /// Log enumeration details to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the movies in the catalog and their showtimes
    Movies,
    /// Rank every conflict-free way to watch K different movies
    Plan {
        /// Number of different movies to watch
        #[arg(short)]
        k: usize,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Prompt repeatedly for how many movies to watch (the default)
    Interactive,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Movies => {
            println!("{}", report::movies_table(&catalog));
        }
        Commands::Plan { k, format } => {
            check_range(k, catalog.len())?;
            let ranked = find_movie_combinations(&catalog, k)
                .context("Failed to enumerate combinations")?;
            match format {
                Format::Table => print!("{}", report::plan_report(&ranked)),
                Format::Json => {
                    let value = serde_json::json!({
                        "k": k,
                        "count": ranked.len(),
                        "combinations": ranked,
                    });
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
            }
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_interactive(&catalog, stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "showtime_engine=debug,showtime_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    match path {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("Failed to load catalog: {}", path))
        }
        None => {
            debug!("using built-in sample catalog");
            Catalog::sample().context("Built-in sample catalog is invalid")
        }
    }
}

fn check_range(k: usize, available: usize) -> Result<()> {
    if k == 0 || k > available {
        anyhow::bail!("{}", range_message(available));
    }
    Ok(())
}

fn range_message(available: usize) -> String {
    format!("Please enter a number between 1 and {}", available)
}

/// Show the catalog, ask how many movies to watch, print the ranked plans,
/// and repeat until the user enters `0` or input ends.
///
/// Bad input is reported and the prompt repeats.
fn run_interactive<R: BufRead, W: Write>(catalog: &Catalog, mut input: R, mut out: W) -> Result<()> {
    let mut line = String::new();

    loop {
        writeln!(out, "\nAvailable Movies:")?;
        writeln!(out, "{}", report::movies_table(catalog))?;
        write!(out, "\nHow many movies would you like to watch? (0 to exit): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read from stdin")? == 0 {
            writeln!(out)?;
            break;
        }

        let requested: i64 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(out, "Please enter a valid number")?;
                continue;
            }
        };
        if requested == 0 {
            break;
        }

        let k = match usize::try_from(requested) {
            Ok(k) if k <= catalog.len() => k,
            _ => {
                writeln!(out, "{}", range_message(catalog.len()))?;
                continue;
            }
        };

        match find_movie_combinations(catalog, k) {
            Ok(ranked) => {
                writeln!(out)?;
                writeln!(out, "{}", report::plan_report(&ranked))?;
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }

    Ok(())
}
