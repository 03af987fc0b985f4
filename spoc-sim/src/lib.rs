//! Synthetic graphs from the mixed-membership stochastic block model
//! (SPOC/SAAC family) for benchmarking overlapping community detection.
//!
//! # Model
//!
//! ```text
//! Θ (n x K) : rows on the simplex, Dirichlet(α) or one-hot
//! B (K x K) : community interaction strengths
//! P = Θ B Θ'
//! A(i,j) ~ Bernoulli(P(i,j))
//! ```
//!
//! Estimated `Θ̂`, `B̂` are scored against the truth after resolving the
//! label ambiguity by exhaustive permutation search ([`align`]).

/// Error kinds
pub mod error;

/// Seeding options
pub mod config;

/// Membership matrices: Dirichlet rows, pure rows, fixed fixtures
pub mod membership;

/// Community-interaction matrices
pub mod interaction;

/// Edge probabilities and the generative pipeline
pub mod probability;

/// Bernoulli adjacency sampling
pub mod sampler;

/// Two-block planted partition graphs
pub mod block_graph;

/// Permutation alignment against ground truth
pub mod align;

/// Experiment sweeps
pub mod sweep;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use probability::{generate_a, generate_p, GraphParams};
