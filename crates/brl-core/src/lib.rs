#![deny(missing_docs)]
//! Core data types and deterministic plumbing shared by the BRL crates.
//!
//! A decision list is represented as an ordered sequence of candidate-rule
//! indices over an immutable arena of mined itemsets. Index 0 is reserved
//! for the default rule whose antecedent holds for every transaction; it is
//! implicit and never stored inside a [`RuleList`].

pub mod errors;
pub mod rng;
mod types;

pub use errors::{BrlError, ErrorDetail};
pub use rng::{derive_stream_seed, RngHandle};
pub use types::{Itemset, RuleList, Transaction};
