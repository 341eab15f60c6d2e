use brl_mcmc::TrainConfig;

#[test]
fn defaults_match_the_documented_surface() {
    let config = TrainConfig::default();
    assert_eq!(config.list_length_prior, 3.0);
    assert_eq!(config.list_width_prior, 1.0);
    assert_eq!(config.max_cardinality, 2);
    assert_eq!(config.min_support, 10.0);
    assert_eq!(config.alpha, [1.0, 1.0]);
    assert_eq!(config.n_chains, 3);
    assert_eq!(config.max_iter, 50_000);
    assert_eq!(config.thinning, 1);
    assert_eq!(config.burn_in(), 25_000);
    assert_eq!(config.class1_label, "class 1");
}

#[test]
fn yaml_roundtrip_preserves_the_config() {
    let mut config = TrainConfig::default();
    config.n_chains = 5;
    config.min_support = 2.5;
    config.seed_policy.label = Some("trial".to_string());

    let yaml = config.to_yaml_string().unwrap();
    let back = TrainConfig::from_yaml_str(&yaml).unwrap();
    assert_eq!(config, back);
}

#[test]
fn partial_yaml_fills_in_defaults() {
    let config = TrainConfig::from_yaml_str("max_iter: 1000\nn_chains: 1\n").unwrap();
    assert_eq!(config.max_iter, 1000);
    assert_eq!(config.n_chains, 1);
    assert_eq!(config.burn_in(), 500);
    assert_eq!(config.alpha, [1.0, 1.0]);
}

#[test]
fn validation_rejects_degenerate_settings() {
    let mut config = TrainConfig::default();
    config.alpha = [0.0, 1.0];
    assert!(config.validate().is_err());

    let mut config = TrainConfig::default();
    config.n_chains = 0;
    assert!(config.validate().is_err());

    let mut config = TrainConfig::default();
    config.thinning = 0;
    assert!(config.validate().is_err());

    let mut config = TrainConfig::default();
    config.list_length_prior = 0.0;
    assert!(config.validate().is_err());
}
