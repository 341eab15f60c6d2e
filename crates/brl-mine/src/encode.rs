use std::collections::BTreeMap;

use brl_core::{Itemset, Transaction};

/// Immutable rule-satisfaction encoding of a training set.
///
/// Index 0 is the synthesized default rule; indices `1..=M` follow the
/// candidate order handed to [`encode`]. Computed once per fit and shared
/// read-only by every chain and by the consequent estimator.
#[derive(Debug, Clone)]
pub struct RuleSupport {
    satisfied: Vec<Vec<usize>>,
    antecedent_len: Vec<usize>,
    len_histogram: BTreeMap<usize, usize>,
    transaction_count: usize,
}

impl RuleSupport {
    /// Number of mined candidates (excluding the default rule).
    pub fn rule_count(&self) -> usize {
        self.satisfied.len() - 1
    }

    /// Number of encoded transactions.
    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Ascending transaction indices satisfying the given rule.
    ///
    /// Rule 0 always covers the complete index range.
    pub fn satisfied(&self, rule: usize) -> &[usize] {
        &self.satisfied[rule]
    }

    /// Antecedent cardinality for the given rule (0 for the default rule).
    pub fn antecedent_len(&self, rule: usize) -> usize {
        self.antecedent_len[rule]
    }

    /// Candidate count per antecedent cardinality (default rule excluded).
    pub fn len_histogram(&self) -> &BTreeMap<usize, usize> {
        &self.len_histogram
    }
}

/// Encodes transactions against the candidate arena.
///
/// `candidates` holds the mined itemsets in their fixed order; candidate
/// `j` becomes rule `j + 1`, and rule 0 is the default rule satisfied by
/// every transaction.
pub fn encode(candidates: &[Itemset], transactions: &[Transaction]) -> RuleSupport {
    let mut satisfied = Vec::with_capacity(candidates.len() + 1);
    satisfied.push((0..transactions.len()).collect());

    let mut antecedent_len = Vec::with_capacity(candidates.len() + 1);
    antecedent_len.push(0);

    let mut len_histogram: BTreeMap<usize, usize> = BTreeMap::new();
    for candidate in candidates {
        let rows: Vec<usize> = transactions
            .iter()
            .enumerate()
            .filter(|(_, transaction)| candidate.is_satisfied_by(transaction))
            .map(|(row, _)| row)
            .collect();
        satisfied.push(rows);
        antecedent_len.push(candidate.cardinality());
        *len_histogram.entry(candidate.cardinality()).or_insert(0) += 1;
    }

    RuleSupport {
        satisfied,
        antecedent_len,
        len_histogram,
        transaction_count: transactions.len(),
    }
}

/// Splits the encoded transactions into exclusively attributed segments.
///
/// Position `i` of the result holds the transactions captured by `list[i]`
/// and by no earlier rule; the final entry is the remainder that falls to
/// the default rule. The segments partition the full index range.
pub fn first_match_segments(support: &RuleSupport, list: &[usize]) -> Vec<Vec<usize>> {
    let mut captured = vec![false; support.transaction_count()];
    let mut segments = Vec::with_capacity(list.len() + 1);
    for &rule in list {
        let mut segment = Vec::new();
        for &row in support.satisfied(rule) {
            if !captured[row] {
                captured[row] = true;
                segment.push(row);
            }
        }
        segments.push(segment);
    }
    let leftover: Vec<usize> = (0..support.transaction_count())
        .filter(|&row| !captured[row])
        .collect();
    segments.push(leftover);
    segments
}
