use std::collections::BTreeMap;

use brl_core::errors::ErrorDetail;
use brl_core::{BrlError, Itemset, Transaction};
use serde::{Deserialize, Serialize};

/// Typed mining parameters.
///
/// `max_cardinality` is the single canonical spelling of the antecedent
/// size bound; there is no alternate parameter name to fall back to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinerConfig {
    /// Minimum support within a class partition, in percent.
    #[serde(default = "default_min_support")]
    pub min_support: f64,
    /// Maximum number of tokens in a candidate antecedent.
    #[serde(default = "default_max_cardinality")]
    pub max_cardinality: usize,
}

fn default_min_support() -> f64 {
    10.0
}

fn default_max_cardinality() -> usize {
    2
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: default_min_support(),
            max_cardinality: default_max_cardinality(),
        }
    }
}

/// Mines candidate antecedents from transactions partitioned by class.
///
/// Each class partition is mined independently with the same support and
/// cardinality bounds; the union is deduplicated and returned in canonical
/// (sorted) order. Finding no candidate at all is fatal for the fit.
pub fn mine_candidates(
    transactions: &[Transaction],
    labels: &[u8],
    config: &MinerConfig,
) -> Result<Vec<Itemset>, BrlError> {
    let mut union: std::collections::BTreeSet<Itemset> = std::collections::BTreeSet::new();
    for class in [0u8, 1u8] {
        let partition: Vec<&Transaction> = transactions
            .iter()
            .zip(labels.iter())
            .filter(|(_, &label)| label == class)
            .map(|(transaction, _)| transaction)
            .collect();
        for itemset in mine_partition(&partition, config) {
            union.insert(itemset);
        }
    }
    if union.is_empty() {
        return Err(BrlError::Mining(
            ErrorDetail::new(
                "no-candidates",
                format!(
                    "no itemset reached {}% support at cardinality <= {}",
                    config.min_support, config.max_cardinality
                ),
            )
            .with_hint("relax min_support or raise max_cardinality"),
        ));
    }
    Ok(union.into_iter().collect())
}

/// Level-wise frequent itemset enumeration over one class partition.
fn mine_partition(partition: &[&Transaction], config: &MinerConfig) -> Vec<Itemset> {
    if partition.is_empty() || config.max_cardinality == 0 {
        return Vec::new();
    }
    let min_count = minimum_count(partition.len(), config.min_support);

    let mut token_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for transaction in partition {
        for token in transaction.tokens() {
            *token_counts.entry(token).or_insert(0) += 1;
        }
    }
    let frequent_tokens: Vec<&str> = token_counts
        .iter()
        .filter(|(_, &count)| count >= min_count)
        .map(|(&token, _)| token)
        .collect();

    let mut mined: Vec<Itemset> = frequent_tokens
        .iter()
        .map(|&token| Itemset::new([token]))
        .collect();

    // Grow level by level: extend each frequent k-itemset with a strictly
    // greater frequent token, then keep the extensions meeting support.
    let mut frontier: Vec<Vec<&str>> = frequent_tokens.iter().map(|&token| vec![token]).collect();
    for _ in 1..config.max_cardinality {
        let mut next_frontier = Vec::new();
        for seed in &frontier {
            let last = seed.last().copied().unwrap_or("");
            for &token in &frequent_tokens {
                if token <= last {
                    continue;
                }
                let mut candidate = seed.clone();
                candidate.push(token);
                let count = partition
                    .iter()
                    .filter(|transaction| candidate.iter().all(|token| transaction.contains(token)))
                    .count();
                if count >= min_count {
                    mined.push(Itemset::new(candidate.iter().copied()));
                    next_frontier.push(candidate);
                }
            }
        }
        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }
    mined
}

/// Smallest absolute count meeting a percentage support over `n` rows.
fn minimum_count(n: usize, min_support: f64) -> usize {
    let raw = (min_support / 100.0) * n as f64;
    (raw.ceil() as usize).max(1)
}
