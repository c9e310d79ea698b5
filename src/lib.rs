pub mod disorder;
pub mod generators;
pub mod hamiltonian;
pub mod lattice;
pub mod topology;
pub mod utils;

use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

pub use generators::LatticeGenerator;
pub use hamiltonian::{Edge, Hamiltonian};
pub use lattice::{LatticeSpec, Shape};

/// Generate a hamiltonian with the process rng.
pub fn generate(spec: &LatticeSpec) -> Hamiltonian {
    LatticeGenerator::assemble(spec, &mut thread_rng())
}

/// Generate a hamiltonian reproducibly from `seed`.
pub fn generate_seeded(spec: &LatticeSpec, seed: u64) -> Hamiltonian {
    LatticeGenerator::assemble(spec, &mut StdRng::seed_from_u64(seed))
}
