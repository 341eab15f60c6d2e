use brl_core::{Itemset, Transaction};
use brl_mine::{mine_candidates, MinerConfig};

fn toy_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(["a", "b"]),
        Transaction::new(["a"]),
        Transaction::new(["b"]),
        Transaction::new(Vec::<String>::new()),
    ]
}

#[test]
fn toy_scenario_mines_expected_itemsets() {
    let transactions = toy_transactions();
    let labels = [1u8, 1, 0, 0];
    let config = MinerConfig {
        min_support: 1.0,
        max_cardinality: 2,
    };

    let mined = mine_candidates(&transactions, &labels, &config).unwrap();
    let expected = vec![
        Itemset::new(["a"]),
        Itemset::new(["a", "b"]),
        Itemset::new(["b"]),
    ];
    assert_eq!(mined, expected);
}

#[test]
fn mined_candidates_are_deduplicated() {
    let transactions = toy_transactions();
    let labels = [1u8, 1, 0, 0];
    let config = MinerConfig {
        min_support: 1.0,
        max_cardinality: 2,
    };

    let mined = mine_candidates(&transactions, &labels, &config).unwrap();
    let mut deduped = mined.clone();
    deduped.dedup();
    assert_eq!(mined, deduped);
}

#[test]
fn cardinality_bound_is_respected() {
    let transactions = toy_transactions();
    let labels = [1u8, 1, 0, 0];
    let config = MinerConfig {
        min_support: 1.0,
        max_cardinality: 1,
    };

    let mined = mine_candidates(&transactions, &labels, &config).unwrap();
    assert!(mined.iter().all(|itemset| itemset.cardinality() <= 1));
    assert_eq!(
        mined,
        vec![Itemset::new(["a"]), Itemset::new(["b"])]
    );
}

#[test]
fn miner_config_serde_roundtrip() {
    let config = MinerConfig {
        min_support: 2.5,
        max_cardinality: 3,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: MinerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}

#[test]
fn unreachable_support_is_a_mining_error() {
    let transactions = toy_transactions();
    let labels = [1u8, 1, 0, 0];
    let config = MinerConfig {
        min_support: 300.0,
        max_cardinality: 2,
    };

    let err = mine_candidates(&transactions, &labels, &config).unwrap_err();
    assert_eq!(err.detail().code, "no-candidates");
    assert!(err.detail().hint.is_some());
}
