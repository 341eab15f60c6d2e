//! The fitted Bayesian rule list classifier.
//!
//! Training wires the pipeline together: mine candidates, encode the
//! satisfaction sets, run the chains, merge, select the point estimate,
//! and estimate each position's class-1 probability with a credible
//! interval. Prediction is a deterministic first-match walk over the
//! point estimate; no sampling happens after `fit` returns.

/// Training entry point and the fitted model type.
pub mod classifier;
/// Beta-Binomial consequent estimation per list position.
pub mod consequent;
/// Sequential first-match prediction.
pub mod predict;
/// Human-readable rendering of a fitted list.
pub mod report;

pub use classifier::{fit, FitDiagnostics, TrainedRuleList};
pub use consequent::estimate_consequents;
