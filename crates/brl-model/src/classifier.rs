use std::collections::BTreeMap;

use brl_core::errors::ErrorDetail;
use brl_core::{BrlError, Itemset, RuleList, Transaction};
use brl_mcmc::{list_fingerprint, merge_chains, run_multichain, ConvergenceReport, TrainConfig};
use brl_mine::{encode, mine_candidates};
use serde::{Deserialize, Serialize};

use crate::consequent::estimate_consequents;
use crate::predict;
use crate::report;

/// Structured summary of one training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitDiagnostics {
    /// Number of mined candidate rules.
    pub candidate_count: usize,
    /// Gelman-Rubin convergence report (informational, never fatal).
    pub convergence: ConvergenceReport,
    /// Acceptance rates per move kind across all chains.
    pub acceptance_rates: BTreeMap<String, f64>,
    /// Stable fingerprint of the point estimate, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_estimate_fingerprint: Option<String>,
}

/// A fitted Bayesian rule list.
///
/// `theta` and `ci_theta` align with the positions of `d_star` plus the
/// terminal default rule as the final entry; none of the fields change
/// after `fit` returns. A model without a point estimate is untrained:
/// its accessors answer with explicit `Model` errors instead of panicking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedRuleList {
    /// Point-estimate list, absent when no chain left the default rule.
    pub d_star: Option<RuleList>,
    /// Posterior mean class-1 probability per position.
    pub theta: Vec<f64>,
    /// Central 95% credible interval per position.
    pub ci_theta: Vec<(f64, f64)>,
    /// Candidate arena indexed by rule id (0 = default rule).
    pub itemsets: Vec<Itemset>,
    /// Display label for class 1.
    pub class1_label: String,
    /// Training summary.
    pub diagnostics: FitDiagnostics,
}

impl TrainedRuleList {
    /// Whether training produced a usable point estimate.
    pub fn is_trained(&self) -> bool {
        self.d_star.is_some()
    }

    /// Per-sample `[P(class 0), P(class 1)]` rows.
    pub fn predict_proba(&self, transactions: &[Transaction]) -> Result<Vec<[f64; 2]>, BrlError> {
        let d_star = self.require_trained()?;
        Ok(predict::probability_rows(
            d_star,
            &self.theta,
            &self.itemsets,
            transactions,
        ))
    }

    /// Per-sample hard labels from the class-1 complement at 0.5.
    pub fn predict(&self, transactions: &[Transaction]) -> Result<Vec<u8>, BrlError> {
        let rows = self.predict_proba(transactions)?;
        Ok(predict::threshold_labels(&rows))
    }

    /// Renders the list as `IF .. THEN .. ELSE ..` lines.
    pub fn describe(&self) -> String {
        report::describe(self)
    }

    fn require_trained(&self) -> Result<&RuleList, BrlError> {
        self.d_star.as_ref().ok_or_else(|| {
            BrlError::Model(
                ErrorDetail::new("untrained", "the model has no point estimate")
                    .with_hint("refit with more iterations or relaxed mining bounds"),
            )
        })
    }
}

/// Fits a Bayesian rule list to categorical transactions.
///
/// Fails fast on malformed input; a convergence warning is carried in the
/// diagnostics rather than raised. The returned model owns everything
/// prediction needs and never resamples.
pub fn fit(
    config: &TrainConfig,
    transactions: &[Transaction],
    labels: &[u8],
) -> Result<TrainedRuleList, BrlError> {
    validate_input(transactions, labels)?;
    config.validate()?;

    let candidates = mine_candidates(transactions, labels, &config.miner())?;
    let support = encode(&candidates, transactions);

    let brl_mcmc::MultichainOutcome {
        runs,
        convergence,
        acceptance_rates,
    } = run_multichain(config, &support, labels, &[])?;
    let merged = merge_chains(runs);
    let d_star = merged.point_estimate();

    let (theta, ci_theta) = match &d_star {
        Some(list) => estimate_consequents(&support, labels, list, config.alpha)?,
        None => (Vec::new(), Vec::new()),
    };

    let mut itemsets = vec![Itemset::null()];
    itemsets.extend(candidates);

    let diagnostics = FitDiagnostics {
        candidate_count: itemsets.len() - 1,
        convergence,
        acceptance_rates,
        point_estimate_fingerprint: d_star.as_ref().map(list_fingerprint),
    };

    Ok(TrainedRuleList {
        d_star,
        theta,
        ci_theta,
        itemsets,
        class1_label: config.class1_label.clone(),
        diagnostics,
    })
}

fn validate_input(transactions: &[Transaction], labels: &[u8]) -> Result<(), BrlError> {
    if transactions.len() != labels.len() {
        return Err(BrlError::Input(ErrorDetail::new(
            "length-mismatch",
            format!(
                "{} transactions but {} labels",
                transactions.len(),
                labels.len()
            ),
        )));
    }
    if transactions.len() < 2 {
        return Err(BrlError::Input(ErrorDetail::new(
            "too-few-samples",
            "training needs at least two transactions",
        )));
    }
    if labels.iter().any(|&label| label > 1) {
        return Err(BrlError::Input(ErrorDetail::new(
            "non-binary-labels",
            "labels must be 0 or 1",
        )));
    }
    if !labels.contains(&0) || !labels.contains(&1) {
        return Err(BrlError::Input(ErrorDetail::new(
            "non-binary-labels",
            "both classes must be present in the labels",
        )));
    }
    Ok(())
}
