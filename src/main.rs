use std::path::PathBuf;

use anyhow::{bail, Result};
use structopt::StructOpt;

use ising_hamiltonian::{generate, generate_seeded, LatticeSpec, Shape};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "ising_hamiltonian",
    about = "Hamiltonian file generator for lattice spin simulations"
)]
struct Args {
    /// lattice shape: r (rectangle), s (square), t (triangle), v (square-triangle)
    shape: String,
    /// row count, or side length for square shapes
    rows: usize,
    /// column count, defaults to the row count
    cols: Option<usize>,
    /// neighbor shells to connect: 1 nearest, 2 adds next-nearest
    #[structopt(short, long, default_value = "1")]
    neighbors: u8,
    /// nearest-neighbor integer coupling
    #[structopt(short, long, default_value = "1")]
    coupling: i32,
    /// next-nearest-neighbor coupling, used with --neighbors 2
    #[structopt(long, default_value = "0")]
    coupling2: i32,
    /// percent chance [0, 100] of flipping an edge coupling sign
    #[structopt(short, long, default_value = "0")]
    disorder: u8,
    /// expand to the doubled bipartite toric encoding
    #[structopt(short, long)]
    toric: bool,
    /// seed for reproducible disorder draws
    #[structopt(long)]
    seed: Option<u64>,
    /// output csv file
    #[structopt(short, long, parse(from_os_str), default_value = "hamiltonian.csv")]
    output: PathBuf,
}

fn parse_spec(args: &Args) -> Result<LatticeSpec> {
    let mut tag = args.shape.chars();
    let shape = match (tag.next(), tag.next()) {
        (Some(c), None) => Shape::from_tag(c),
        _ => None,
    };
    let shape = match shape {
        Some(shape) => shape,
        None => bail!("unknown shape {:?}, expected r, s, t or v", args.shape),
    };

    let spec = LatticeSpec {
        shape,
        rows: args.rows,
        cols: args.cols.unwrap_or(args.rows),
        neighbors: args.neighbors,
        toric: args.toric,
        coupling: args.coupling,
        coupling2: args.coupling2,
        disorder: args.disorder,
    };
    spec.validate()?;

    Ok(spec)
}

fn main() -> Result<()> {
    let args = Args::from_args();
    let spec = parse_spec(&args)?;

    let hamiltonian = {
        measure_time::print_time!("Assembly");
        match args.seed {
            Some(seed) => generate_seeded(&spec, seed),
            None => generate(&spec),
        }
    };

    hamiltonian.save(&args.output)?;

    println!(
        "{} interactions -> {}",
        hamiltonian.edges.len(),
        args.output.display()
    );

    Ok(())
}
