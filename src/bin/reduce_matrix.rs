//! Reduce Matrix: Persistence Pairs of a Boundary Matrix File
//!
//! Loads a boundary matrix (one column per line, row indices separated by
//! whitespace), reduces it and prints the persistence pairs as
//! `creator destroyer`, followed by the essential creators as
//! `creator inf`.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tda_persistence::io::load_boundary_matrix;
use tda_persistence::{
    ColumnKind,
    ListColumn,
    PersistencePairs,
    Reduction,
    ReductionKind,
    Representation,
    Result,
    SetColumn,
    StandardReduction,
    TwistReduction,
    VectorColumn,
};

#[derive(Parser, Debug)]
#[command(name = "reduce_matrix", about = "Persistence pairs of a boundary matrix")]
struct Args {
    /// Boundary matrix file
    input: PathBuf,

    /// Reduction algorithm (standard, twist)
    #[arg(short, long, default_value_t = ReductionKind::Standard)]
    algorithm: ReductionKind,

    /// Column representation (vector, set, list)
    #[arg(short, long, default_value_t = ColumnKind::Vector)]
    representation: ColumnKind,

    /// Reduce the anti-transposed matrix
    #[arg(short, long)]
    dualize: bool,

    /// Print the matrix before reducing it
    #[arg(short, long)]
    verbose: bool,
}

fn run<R: Representation>(args: &Args) -> Result<PersistencePairs> {
    let mut matrix = load_boundary_matrix::<R>(&args.input)?;

    if args.verbose {
        eprintln!("{}", matrix);
    }

    if args.dualize {
        matrix = matrix.dualize();
    }

    let stats = match args.algorithm {
        ReductionKind::Standard => StandardReduction.reduce(&mut matrix),
        ReductionKind::Twist => TwistReduction.reduce(&mut matrix),
    };

    tracing::info!(
        columns = matrix.num_columns(),
        additions = stats.column_additions,
        cleared = stats.cleared_columns,
        "Reduced boundary matrix"
    );

    let pairs = PersistencePairs::from_reduced(&matrix);
    pairs.validate(matrix.num_columns())?;
    Ok(pairs)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let pairs = match args.representation {
        ColumnKind::Vector => run::<VectorColumn>(&args)?,
        ColumnKind::Set => run::<SetColumn>(&args)?,
        ColumnKind::List => run::<ListColumn>(&args)?,
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for (creator, destroyer) in &pairs {
        writeln!(out, "{} {}", creator, destroyer)?;
    }
    for creator in pairs.essential() {
        writeln!(out, "{} inf", creator)?;
    }
    out.flush()?;

    Ok(())
}
