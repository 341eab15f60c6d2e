use brl_mcmc::diagnostics::gelman_rubin;
use brl_mcmc::RHAT_THRESHOLD;

#[test]
fn agreeing_chains_stay_below_threshold() {
    let chains = vec![
        vec![0.0, 0.2, -0.1, 0.1, 0.0, -0.2, 0.1, -0.1],
        vec![0.1, -0.1, 0.0, 0.2, -0.2, 0.0, 0.1, 0.0],
    ];
    let rhat = gelman_rubin(&chains);
    assert!(rhat < RHAT_THRESHOLD, "rhat was {rhat}");
}

#[test]
fn diverged_chains_are_flagged() {
    let chains = vec![
        vec![0.0, 0.1, -0.1, 0.05, 0.0, -0.05],
        vec![10.0, 10.1, 9.9, 10.05, 10.0, 9.95],
    ];
    let rhat = gelman_rubin(&chains);
    assert!(rhat >= RHAT_THRESHOLD, "rhat was {rhat}");
}

#[test]
fn convergence_report_serde_roundtrip() {
    let report = brl_mcmc::ConvergenceReport {
        rhat_log_posterior: 1.02,
        rhat_list_length: 1.2,
        threshold: RHAT_THRESHOLD,
        healthy: false,
    };
    let json = serde_json::to_string(&report).unwrap();
    let back: brl_mcmc::ConvergenceReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, back);
}

#[test]
fn degenerate_histories_default_to_one() {
    assert_eq!(gelman_rubin(&[]), 1.0);
    assert_eq!(gelman_rubin(&[vec![1.0, 2.0]]), 1.0);
    assert_eq!(gelman_rubin(&[vec![1.0], vec![2.0]]), 1.0);
    // Constant chains have no within-chain variance to compare against.
    assert_eq!(
        gelman_rubin(&[vec![1.0, 1.0, 1.0], vec![1.0, 1.0, 1.0]]),
        1.0
    );
}
