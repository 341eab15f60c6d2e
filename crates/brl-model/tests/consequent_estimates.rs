use brl_core::{Itemset, RuleList, Transaction};
use brl_mine::encode;
use brl_model::estimate_consequents;

#[test]
fn empty_segment_with_unit_pseudocounts_is_exactly_half() {
    // Candidate "z:1" matches nothing, so its segment stays empty.
    let candidates = vec![Itemset::new(["z:1"])];
    let transactions = vec![Transaction::new(["a:1"]), Transaction::new(["b:1"])];
    let labels = [1u8, 0];
    let support = encode(&candidates, &transactions);

    let d_star = RuleList::new(vec![1]).unwrap();
    let (theta, ci_theta) = estimate_consequents(&support, &labels, &d_star, [1.0, 1.0]).unwrap();

    assert_eq!(theta[0], 0.5);
    // Beta(1,1) is uniform, so the central interval is the quantile pair.
    assert!((ci_theta[0].0 - 0.025).abs() < 1e-6);
    assert!((ci_theta[0].1 - 0.975).abs() < 1e-6);
}

#[test]
fn posterior_mean_follows_the_segment_counts() {
    let candidates = vec![Itemset::new(["a"])];
    let transactions = vec![
        Transaction::new(["a"]),
        Transaction::new(["a"]),
        Transaction::new(["b"]),
        Transaction::new(["b"]),
    ];
    let labels = [1u8, 1, 0, 1];
    let support = encode(&candidates, &transactions);

    let d_star = RuleList::new(vec![1]).unwrap();
    let (theta, ci_theta) = estimate_consequents(&support, &labels, &d_star, [1.0, 1.0]).unwrap();

    // Rule segment: two class-1 rows => (1 + 2) / (2 + 2).
    assert!((theta[0] - 0.75).abs() < 1e-12);
    // Default segment: one of each => exactly half.
    assert!((theta[1] - 0.5).abs() < 1e-12);
    assert_eq!(theta.len(), d_star.len() + 1);
    assert_eq!(ci_theta.len(), theta.len());
    for &(lo, hi) in &ci_theta {
        assert!(lo < hi);
        assert!(lo >= 0.0 && hi <= 1.0);
    }
}

#[test]
fn attribution_partitions_the_training_set() {
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
    let support = encode(&candidates, &transactions);

    // Overlapping rules: {a} captures rows 0 and 1 first, {b} only row 2.
    let segments = brl_mine::first_match_segments(&support, &[1, 2]);
    assert_eq!(segments.len(), 3);

    let mut all: Vec<usize> = segments.iter().flatten().copied().collect();
    all.sort_unstable();
    assert_eq!(all, vec![0, 1, 2, 3]);
    assert_eq!(segments[0], vec![0, 1]);
    assert_eq!(segments[1], vec![2]);
    assert_eq!(segments[2], vec![3]);
}
