#![deny(missing_docs)]
//! Metropolis-Hastings sampler over ordered rule lists.
//!
//! Chains are independent and share only immutable inputs (the rule
//! satisfaction sets and the class labels); each owns a local permutation
//! cache that memoizes list scores and counts post-burn-in visits. After
//! all chains finish, the caches are merged once and the point estimate is
//! the visited list with the highest combined mass.

/// Chain-local permutation cache, chain merger, and point estimator.
pub mod cache;
/// Single-chain sampling kernel.
pub mod chain;
/// Training configuration schema and defaults.
pub mod config;
/// Deterministic seed derivation per chain and iteration.
pub mod determinism;
/// Gelman-Rubin convergence diagnostics across chains.
pub mod diagnostics;
/// Stable fingerprints for rule lists.
pub mod hash;
/// Structured list move proposals.
pub mod moves;
/// Parallel multichain driver.
pub mod multichain;
/// Log-space posterior scoring (priors and marginal likelihood).
pub mod posterior;

pub use cache::{merge_chains, ListStats, MergedCache, PermutationCache};
pub use chain::{run_chain, ChainRun, ChainSample};
pub use config::{SeedPolicy, TrainConfig};
pub use diagnostics::{ConvergenceReport, RHAT_THRESHOLD};
pub use hash::list_fingerprint;
pub use moves::{ListProposal, MoveKind};
pub use multichain::{run_multichain, MultichainOutcome};
pub use posterior::{ListScore, PosteriorModel};
