use std::collections::BTreeMap;

use brl_core::RuleList;
use brl_mcmc::{merge_chains, ChainRun, ListScore, PermutationCache};

fn score(log_posterior: f64) -> ListScore {
    ListScore {
        log_prior: 0.0,
        log_likelihood: log_posterior,
        log_posterior,
    }
}

fn run_with(chain_index: usize, visits: &[(Vec<usize>, u64)]) -> ChainRun {
    let mut cache = PermutationCache::new();
    for (key, count) in visits {
        for _ in 0..*count {
            cache.record_visit(key.clone(), score(-1.0));
        }
    }
    ChainRun {
        chain_index,
        cache,
        samples: Vec::new(),
        final_list: RuleList::empty(),
        final_score: score(-1.0),
        accepted: BTreeMap::new(),
        proposed: BTreeMap::new(),
    }
}

#[test]
fn merge_sums_visits_for_identical_lists() {
    let runs = vec![
        run_with(0, &[(vec![1, 2], 5), (vec![2], 3)]),
        run_with(1, &[(vec![1, 2], 7)]),
    ];
    let merged = merge_chains(runs);
    assert_eq!(merged.mass(&[1, 2]), 12);
    assert_eq!(merged.mass(&[2]), 3);
    assert_eq!(merged.mass(&[3]), 0);
}

#[test]
fn point_estimate_takes_highest_mass() {
    let runs = vec![
        run_with(0, &[(vec![1, 2], 2), (vec![3], 6)]),
        run_with(1, &[(vec![1, 2], 3)]),
    ];
    let merged = merge_chains(runs);
    let d_star = merged.point_estimate().unwrap();
    assert_eq!(d_star.as_slice(), &[3]);
}

#[test]
fn ties_break_on_length_then_lexicographic_order() {
    let runs = vec![run_with(
        0,
        &[(vec![2, 1], 4), (vec![3], 4), (vec![2], 4)],
    )];
    let merged = merge_chains(runs);
    let d_star = merged.point_estimate().unwrap();
    assert_eq!(d_star.as_slice(), &[2]);
}

#[test]
fn null_only_history_yields_no_estimate() {
    let runs = vec![run_with(0, &[(vec![], 10)])];
    let merged = merge_chains(runs);
    assert!(merged.point_estimate().is_none());
}

#[test]
fn merge_consumes_each_cache_exactly_once() {
    let runs = vec![run_with(0, &[(vec![1], 4)])];
    let merged = merge_chains(runs);
    assert_eq!(merged.mass(&[1]), 4);
    // `runs` has been moved into the merge; a second merge over the same
    // caches cannot be expressed, so double counting is impossible.
    let again = merge_chains(Vec::new());
    assert!(again.is_empty());
}
