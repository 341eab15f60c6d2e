use brl_core::{Itemset, Transaction};
use brl_mine::encode;

fn sample() -> (Vec<Itemset>, Vec<Transaction>) {
    let candidates = vec![
        Itemset::new(["a"]),
        Itemset::new(["b"]),
        Itemset::new(["a", "b"]),
    ];
    let transactions = vec![
        Transaction::new(["a", "b"]),
        Transaction::new(["a"]),
        Transaction::new(["b"]),
        Transaction::new(Vec::<String>::new()),
    ];
    (candidates, transactions)
}

#[test]
fn default_rule_covers_every_transaction() {
    let (candidates, transactions) = sample();
    let support = encode(&candidates, &transactions);
    assert_eq!(support.satisfied(0), &[0, 1, 2, 3]);
    assert_eq!(support.antecedent_len(0), 0);
    assert_eq!(support.transaction_count(), 4);
}

#[test]
fn satisfaction_is_exact_subset_containment() {
    let (candidates, transactions) = sample();
    let support = encode(&candidates, &transactions);
    assert_eq!(support.rule_count(), 3);
    assert_eq!(support.satisfied(1), &[0, 1]);
    assert_eq!(support.satisfied(2), &[0, 2]);
    assert_eq!(support.satisfied(3), &[0]);
}

#[test]
fn histogram_counts_candidates_by_width() {
    let (candidates, transactions) = sample();
    let support = encode(&candidates, &transactions);
    assert_eq!(support.antecedent_len(1), 1);
    assert_eq!(support.antecedent_len(3), 2);
    assert_eq!(support.len_histogram().get(&1), Some(&2));
    assert_eq!(support.len_histogram().get(&2), Some(&1));
}
