//! Bell / GHZ state demo.
//!
//! Puts qubit 0 into superposition, entangles the rest of the register
//! with a CNOT chain, prints the amplitude vector, then measures every
//! qubit and shows the (perfectly correlated) outcomes.

use anyhow::{Context, bail};
use clap::Parser;
use tracing::info;

use alsvid_backend::BackendKind;
use alsvid_gates::standard;
use alsvid_sim::Simulator;

#[derive(Parser, Debug)]
#[command(name = "demo-bell")]
#[command(about = "Prepare and measure a maximally entangled register")]
struct Args {
    /// Register size (2 = Bell pair, more = GHZ state)
    #[arg(long, default_value_t = 2)]
    qubits: usize,

    /// Seed for the backend random source (omit for entropy seeding)
    #[arg(long)]
    seed: Option<u64>,

    /// Execution backend ("cpu" or "accelerator")
    #[arg(long, default_value = "cpu")]
    backend: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if args.qubits < 2 {
        bail!("need at least two qubits to entangle, got {}", args.qubits);
    }

    let kind: BackendKind = args.backend.parse().context("selecting backend")?;
    let backend = match args.seed {
        Some(seed) => alsvid_backend::create_seeded(kind, seed)?,
        None => alsvid_backend::create(kind)?,
    };
    let mut sim = Simulator::with_backend(args.qubits, backend)?;

    info!(qubits = args.qubits, backend = %kind, "preparing entangled state");

    sim.apply_single_qubit_gate(&standard::h(), 0)?;
    for target in 1..args.qubits {
        sim.apply_cnot(target - 1, target)?;
    }

    println!("Amplitudes after H(0) + CNOT chain:");
    for (index, amp) in sim.amplitudes().iter().enumerate() {
        if amp.norm_sqr() > 1e-12 {
            println!(
                "  |{index:0width$b}⟩  {amp:.4}  (p = {:.4})",
                amp.norm_sqr(),
                width = args.qubits
            );
        }
    }

    let outcomes: Vec<u8> = (0..args.qubits)
        .map(|qubit| sim.measure(qubit))
        .collect::<Result<_, _>>()?;
    println!("Measured outcomes (qubit 0 first): {outcomes:?}");

    Ok(())
}
