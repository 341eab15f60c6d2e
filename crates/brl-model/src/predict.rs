use brl_core::{Itemset, RuleList, Transaction};

/// Probability rows `[P(class 0), P(class 1)]` under first-match semantics.
///
/// The first rule whose antecedent is a subset of the transaction's tokens
/// wins; unmatched transactions fall to the terminal default rule, whose
/// theta is the final array entry. Pure function of the fitted arrays and
/// the input tokens.
pub fn probability_rows(
    d_star: &RuleList,
    theta: &[f64],
    itemsets: &[Itemset],
    transactions: &[Transaction],
) -> Vec<[f64; 2]> {
    transactions
        .iter()
        .map(|transaction| {
            let mut matched = theta[d_star.len()];
            for (position, &rule) in d_star.as_slice().iter().enumerate() {
                if itemsets[rule].is_satisfied_by(transaction) {
                    matched = theta[position];
                    break;
                }
            }
            [1.0 - matched, matched]
        })
        .collect()
}

/// Hard labels derived from the class-1 complement at the 0.5 threshold.
pub fn threshold_labels(rows: &[[f64; 2]]) -> Vec<u8> {
    rows.iter()
        .map(|row| if row[0] >= 0.5 { 1 } else { 0 })
        .collect()
}
