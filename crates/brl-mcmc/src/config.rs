use brl_core::errors::ErrorDetail;
use brl_core::BrlError;
use brl_mine::MinerConfig;
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing one training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Expected list length (excluding the default rule).
    #[serde(default = "default_list_length_prior")]
    pub list_length_prior: f64,
    /// Expected antecedent width of an included rule.
    #[serde(default = "default_list_width_prior")]
    pub list_width_prior: f64,
    /// Maximum itemset cardinality considered by the miner.
    #[serde(default = "default_max_cardinality")]
    pub max_cardinality: usize,
    /// Minimum itemset support within a class partition, in percent.
    #[serde(default = "default_min_support")]
    pub min_support: f64,
    /// Dirichlet pseudocounts for the `[class 0, class 1]` counts.
    #[serde(default = "default_alpha")]
    pub alpha: [f64; 2],
    /// Number of independent chains.
    #[serde(default = "default_n_chains")]
    pub n_chains: usize,
    /// Iterations per chain.
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    /// Interval at which post-burn-in samples are retained.
    #[serde(default = "default_thinning")]
    pub thinning: usize,
    /// Display label for class 1 (cosmetic only).
    #[serde(default = "default_class1_label")]
    pub class1_label: String,
    /// Master seed and stream labeling.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_list_length_prior() -> f64 {
    3.0
}

fn default_list_width_prior() -> f64 {
    1.0
}

fn default_max_cardinality() -> usize {
    2
}

fn default_min_support() -> f64 {
    10.0
}

fn default_alpha() -> [f64; 2] {
    [1.0, 1.0]
}

fn default_n_chains() -> usize {
    3
}

fn default_max_iter() -> usize {
    50_000
}

fn default_thinning() -> usize {
    1
}

fn default_class1_label() -> String {
    "class 1".to_string()
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            list_length_prior: default_list_length_prior(),
            list_width_prior: default_list_width_prior(),
            max_cardinality: default_max_cardinality(),
            min_support: default_min_support(),
            alpha: default_alpha(),
            n_chains: default_n_chains(),
            max_iter: default_max_iter(),
            thinning: default_thinning(),
            class1_label: default_class1_label(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl TrainConfig {
    /// Number of initial iterations discarded before sampling starts.
    pub fn burn_in(&self) -> usize {
        self.max_iter / 2
    }

    /// Burn-in re-evaluated for a chain stopped after `completed` iterations.
    pub fn effective_burn_in(&self, completed: usize) -> usize {
        if completed < self.max_iter {
            completed / 2
        } else {
            self.burn_in()
        }
    }

    /// Mining parameters derived from this configuration.
    pub fn miner(&self) -> MinerConfig {
        MinerConfig {
            min_support: self.min_support,
            max_cardinality: self.max_cardinality,
        }
    }

    /// Validates the numeric ranges the sampler relies on.
    pub fn validate(&self) -> Result<(), BrlError> {
        if self.list_length_prior <= 0.0 || self.list_width_prior <= 0.0 {
            return Err(config_error(
                "non-positive-prior",
                "list_length_prior and list_width_prior must be positive",
            ));
        }
        if self.alpha[0] <= 0.0 || self.alpha[1] <= 0.0 {
            return Err(config_error(
                "non-positive-alpha",
                "both pseudocounts must be positive",
            ));
        }
        if self.n_chains == 0 {
            return Err(config_error("no-chains", "n_chains must be at least 1"));
        }
        if self.thinning == 0 {
            return Err(config_error("zero-thinning", "thinning must be at least 1"));
        }
        if self.max_iter == 0 {
            return Err(config_error("zero-iterations", "max_iter must be at least 1"));
        }
        Ok(())
    }

    /// Parses a configuration from its YAML representation.
    pub fn from_yaml_str(input: &str) -> Result<Self, BrlError> {
        serde_yaml::from_str(input)
            .map_err(|err| BrlError::Serde(ErrorDetail::new("config-yaml-parse", err.to_string())))
    }

    /// Renders the configuration as YAML.
    pub fn to_yaml_string(&self) -> Result<String, BrlError> {
        serde_yaml::to_string(self)
            .map_err(|err| BrlError::Serde(ErrorDetail::new("config-yaml-render", err.to_string())))
    }
}

fn config_error(code: &str, message: &str) -> BrlError {
    BrlError::Sampler(ErrorDetail::new(code, message))
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label recorded alongside derived streams.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0x0B1A_5EED_D15C_0DE5_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}
