//! Trotter Decomposition Demo
//!
//! Builds a model Hamiltonian, trotterizes `exp(-i t H)` and prints the
//! resulting sequence of Pauli rotations.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use qtrot_demos::models::{h2_model, transverse_field_ising};
use qtrot_demos::{print_circuit, print_header, print_result, print_section};
use qtrot_ir::Coefficient;
use qtrot_sim::{Decomposition, FirstOrderTrotter, Hamiltonian, TrotterConfig};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Model {
    /// Transverse-field Ising chain, split into ZZ and X generators
    Ising,
    /// 2-qubit H₂ model Hamiltonian as a single generator
    H2,
}

#[derive(Parser, Debug)]
#[command(name = "demo-trotter")]
#[command(about = "Demonstrate first-order Trotter decomposition of model Hamiltonians")]
struct Args {
    /// Model to decompose
    #[arg(short, long, value_enum, default_value = "ising")]
    model: Model,

    /// Number of sites for the Ising chain
    #[arg(long, default_value = "4")]
    sites: u32,

    /// Evolution time
    #[arg(short, long, default_value = "1.0")]
    time: f64,

    /// Use a named symbolic time instead of --time
    #[arg(long)]
    symbolic: Option<String>,

    /// Load the decomposer configuration from a JSON or YAML file
    #[arg(short, long, env = "QTROT_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// Number of Trotter steps (ignored with --config)
    #[arg(short, long, default_value = "4")]
    steps: usize,

    /// Drop rotations with |angle| <= threshold (ignored with --config)
    #[arg(long, default_value = "0.0")]
    threshold: f64,

    /// Trotterize all generators jointly (ignored with --config)
    #[arg(long)]
    join: bool,

    /// Shuffle term order inside every expansion (ignored with --config)
    #[arg(long)]
    randomize: bool,

    /// Shuffle generator order (ignored with --config)
    #[arg(long)]
    randomize_order: bool,

    /// RNG seed for randomized orderings
    #[arg(long)]
    seed: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    print_header("First-Order Trotter Decomposition Demo");

    let mut config = match &args.config {
        Some(path) => TrotterConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => TrotterConfig::new(args.steps)
            .with_threshold(args.threshold)
            .with_join_components(args.join)
            .with_randomize(args.randomize)
            .with_randomize_component_order(args.randomize_order),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    info!(?config, "decomposer configuration");

    let generators: Vec<Hamiltonian> = match args.model {
        Model::Ising => transverse_field_ising(args.sites, 1.0, 0.5).into(),
        Model::H2 => vec![h2_model()],
    };

    let time = match &args.symbolic {
        Some(name) => Coefficient::symbol(name.as_str()),
        None => Coefficient::constant(args.time),
    };
    let coeffs = vec![time.clone(); generators.len()];

    print_section("Problem");
    print_result("Model", format!("{:?}", args.model));
    print_result("Generators", generators.len());
    print_result(
        "Terms",
        generators.iter().map(Hamiltonian::n_terms).sum::<usize>(),
    );
    print_result("Time", &time);

    let trotter = FirstOrderTrotter::new(config).context("invalid decomposer configuration")?;
    let config = trotter.config();
    print_section("Configuration");
    print_result("Steps", config.steps);
    print_result("Threshold", config.threshold);
    print_result("Joint", config.join_components);
    print_result("Randomized", config.is_randomized());

    let circuit = trotter
        .decompose(&generators, Some(&coeffs))
        .context("decomposition failed")?;

    print_section("Circuit");
    print_result("Gates", circuit.len());
    print_result("Qubits", circuit.num_qubits());
    if circuit.is_parameterized() {
        let params: Vec<String> = circuit.parameters().into_iter().collect();
        print_result("Parameters", params.join(", "));
    }
    println!();
    print_circuit(&circuit);
    println!();

    Ok(())
}
