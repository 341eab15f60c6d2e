use serde::{Deserialize, Serialize};

use crate::chain::ChainRun;

/// R-hat value at or above which convergence is flagged.
pub const RHAT_THRESHOLD: f64 = 1.1;

/// Gelman-Rubin convergence summary over the finished chains.
///
/// A failed diagnostic is informational: training still completes and the
/// point estimate is still returned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceReport {
    /// R-hat computed over the per-chain log-posterior histories.
    pub rhat_log_posterior: f64,
    /// R-hat computed over the per-chain list-length histories.
    pub rhat_list_length: f64,
    /// Threshold at which a statistic is flagged.
    pub threshold: f64,
    /// Whether both statistics stayed below the threshold.
    pub healthy: bool,
}

/// Computes the convergence report for a set of finished chains.
pub fn convergence_report(runs: &[ChainRun]) -> ConvergenceReport {
    let log_posteriors: Vec<Vec<f64>> = runs
        .iter()
        .map(|run| run.samples.iter().map(|sample| sample.log_posterior).collect())
        .collect();
    let lengths: Vec<Vec<f64>> = runs
        .iter()
        .map(|run| run.samples.iter().map(|sample| sample.list_len as f64).collect())
        .collect();

    let rhat_log_posterior = gelman_rubin(&log_posteriors);
    let rhat_list_length = gelman_rubin(&lengths);
    ConvergenceReport {
        rhat_log_posterior,
        rhat_list_length,
        threshold: RHAT_THRESHOLD,
        healthy: rhat_log_posterior < RHAT_THRESHOLD && rhat_list_length < RHAT_THRESHOLD,
    }
}

/// Gelman-Rubin potential scale reduction over per-chain sample histories.
///
/// Chains are truncated to the shortest history; fewer than two usable
/// chains, or a degenerate within-chain variance, yield 1.0.
pub fn gelman_rubin(chains: &[Vec<f64>]) -> f64 {
    let n = chains.iter().map(Vec::len).min().unwrap_or(0);
    let usable: Vec<&[f64]> = chains
        .iter()
        .filter(|chain| chain.len() >= 2)
        .map(|chain| &chain[..n])
        .collect();
    let m = usable.len();
    if m < 2 || n < 2 {
        return 1.0;
    }

    let means: Vec<f64> = usable
        .iter()
        .map(|chain| chain.iter().sum::<f64>() / n as f64)
        .collect();
    let within: f64 = usable
        .iter()
        .zip(means.iter())
        .map(|(chain, mean)| {
            chain.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        })
        .sum::<f64>()
        / m as f64;
    if within <= 1e-12 {
        return 1.0;
    }

    let grand_mean = means.iter().sum::<f64>() / m as f64;
    let between = n as f64 / (m - 1) as f64
        * means
            .iter()
            .map(|mean| (mean - grand_mean).powi(2))
            .sum::<f64>();

    let pooled = (n - 1) as f64 / n as f64 * within + between / n as f64;
    (pooled / within).sqrt()
}
