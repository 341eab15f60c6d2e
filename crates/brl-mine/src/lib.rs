#![deny(missing_docs)]
//! Candidate itemset mining and the rule-satisfaction encoder.
//!
//! Mining runs independently per class partition and unions the result;
//! the encoder maps the candidate arena onto the training transactions
//! once per fit, producing the immutable satisfaction sets every chain
//! shares.

/// Rule-satisfaction encoding of a transaction set.
pub mod encode;
/// Frequent itemset enumeration per class partition.
pub mod miner;

pub use encode::{encode, first_match_segments, RuleSupport};
pub use miner::{mine_candidates, MinerConfig};
