use brl_core::{Itemset, Transaction};
use brl_mcmc::{run_chain, PosteriorModel, TrainConfig};
use brl_mine::encode;

fn toy_setup() -> (brl_mine::RuleSupport, Vec<u8>) {
    let candidates = vec![Itemset::new(["a"]), Itemset::new(["b"])];
    let transactions = vec![
        Transaction::new(["a"]),
        Transaction::new(["b"]),
        Transaction::new(["a", "b"]),
        Transaction::new(Vec::<String>::new()),
    ];
    (encode(&candidates, &transactions), vec![1, 0, 1, 0])
}

#[test]
fn zero_budget_is_under_sampled() {
    let (support, labels) = toy_setup();
    let config = TrainConfig::default();
    let model = PosteriorModel::new(&support, &labels, config.alpha, 3.0, 1.0);

    let err = run_chain(&config, &model, 0, None, Some(0)).unwrap_err();
    assert_eq!(err.detail().code, "under-sampled");
}

#[test]
fn early_stop_reevaluates_burn_in() {
    let (support, labels) = toy_setup();
    let mut config = TrainConfig::default();
    config.max_iter = 10_000;
    let model = PosteriorModel::new(&support, &labels, config.alpha, 3.0, 1.0);

    let run = run_chain(&config, &model, 0, None, Some(100)).unwrap();
    // Burn-in shrinks to half the completed iterations, so samples exist.
    assert_eq!(run.samples.len(), 50);
    assert_eq!(run.samples.first().unwrap().iteration, 50);
}

#[test]
fn full_run_burn_in_is_half_of_max_iter() {
    let (support, labels) = toy_setup();
    let mut config = TrainConfig::default();
    config.max_iter = 200;
    let model = PosteriorModel::new(&support, &labels, config.alpha, 3.0, 1.0);

    let run = run_chain(&config, &model, 0, None, None).unwrap();
    assert_eq!(run.samples.len(), 100);
    let visited: u64 = run
        .cache
        .iter()
        .map(|(_, stats)| stats.visits)
        .sum();
    assert_eq!(visited, 100);
}

#[test]
fn final_score_matches_a_fresh_evaluation() {
    let (support, labels) = toy_setup();
    let mut config = TrainConfig::default();
    config.max_iter = 300;
    let model = PosteriorModel::new(&support, &labels, config.alpha, 3.0, 1.0);

    let run = run_chain(&config, &model, 1, None, None).unwrap();
    let fresh = model.score(&run.final_list);
    assert!((run.final_score.log_posterior - fresh.log_posterior).abs() < 1e-12);
}

#[test]
fn out_of_range_warm_start_is_rejected() {
    let (support, labels) = toy_setup();
    let config = TrainConfig::default();
    let model = PosteriorModel::new(&support, &labels, config.alpha, 3.0, 1.0);

    let warm = brl_core::RuleList::new(vec![9]).unwrap();
    let err = run_chain(&config, &model, 0, Some(warm), Some(10)).unwrap_err();
    assert_eq!(err.detail().code, "warm-start-out-of-range");
}
