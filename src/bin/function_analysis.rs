//! Function Analysis: Persistence Diagrams of Function Values
//!
//! Reads one or more files of function values (one function per line),
//! turns every function into a path complex and calculates its
//! zero-dimensional persistent homology.
//!
//! ## Output
//!
//! For every function either its persistence diagram (one `birth death`
//! point per line, followed by a blank line) or, with `--condense`, a
//! single line `min max mean norm` of persistence statistics.
//!
//! The essential class always dies at the maximum (sublevel) or minimum
//! (superlevel) function value, so that all points are finite.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tda_persistence::io::{load_functions, read_functions, write_diagram};
use tda_persistence::{
    calculate_function_diagram,
    function_complex,
    Filtration,
    PersistenceConfig,
    Result,
    Summary,
};

#[derive(Parser, Debug)]
#[command(
    name = "function_analysis",
    about = "Zero-dimensional persistent homology of function values"
)]
struct Args {
    /// Input files; '-' reads from stdin
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Print persistence statistics instead of diagrams
    #[arg(short, long)]
    condense: bool,

    /// Scale all diagrams to [0, 1] using the function range
    #[arg(short, long)]
    normalize: bool,

    /// Use the sublevel set filtration (default)
    #[arg(short = 's', long, conflicts_with = "superlevels")]
    sublevels: bool,

    /// Use the superlevel set filtration
    #[arg(short = 'S', long)]
    superlevels: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with calculation settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let filtration = if args.superlevels && !args.sublevels {
        Filtration::Superlevel
    } else {
        Filtration::Sublevel
    };

    let config = match &args.config {
        Some(path) => PersistenceConfig::from_json_file(path)?,
        None => PersistenceConfig::default(),
    };

    // Input ---------------------------------------------------------------

    let mut functions = Vec::new();
    for input in &args.inputs {
        tracing::info!(input = %input, "Reading function values");
        let local = if input == "-" {
            read_functions(io::stdin().lock())?
        } else {
            load_functions(input)?
        };
        functions.extend(local);
    }

    tracing::info!(
        functions = functions.len(),
        filtration = ?filtration,
        algorithm = %config.algorithm,
        representation = %config.representation,
        "Calculating persistent homology"
    );

    // Persistent homology -------------------------------------------------

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    for values in &functions {
        let complex = function_complex(values, filtration);
        let Some((min, max)) = complex.data_range() else {
            continue;
        };

        let Some(mut diagram) = calculate_function_diagram(&complex, filtration, &config)? else {
            continue;
        };

        if args.normalize && min != max {
            diagram.normalize(min, max);
        }

        if args.condense {
            if let Some(summary) = Summary::from_diagram(&diagram) {
                let line: Vec<String> = summary.to_vec().iter().map(f64::to_string).collect();
                writeln!(out, "{}", line.join(" "))?;
            }
        } else {
            write_diagram(&mut out, &diagram)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    tracing::info!("Finished");

    Ok(())
}
