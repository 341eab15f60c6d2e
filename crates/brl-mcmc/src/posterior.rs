use brl_core::RuleList;
use brl_mine::{first_match_segments, RuleSupport};
use serde::{Deserialize, Serialize};
use statrs::function::gamma::ln_gamma;

/// Log-space breakdown of an un-normalized list posterior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ListScore {
    /// Log prior over the list structure.
    pub log_prior: f64,
    /// Log Dirichlet-multinomial marginal likelihood of the induced segments.
    pub log_likelihood: f64,
    /// Sum of the two terms.
    pub log_posterior: f64,
}

/// Immutable scoring context shared by every chain of one fit.
///
/// All posterior arithmetic stays in log space; the only exponentiation
/// happens inside the Metropolis-Hastings acceptance ratio.
#[derive(Debug, Clone)]
pub struct PosteriorModel<'a> {
    support: &'a RuleSupport,
    labels: &'a [u8],
    alpha: [f64; 2],
    length_prior: f64,
    width_prior: f64,
}

impl<'a> PosteriorModel<'a> {
    /// Builds a scoring context over the encoded training set.
    pub fn new(
        support: &'a RuleSupport,
        labels: &'a [u8],
        alpha: [f64; 2],
        length_prior: f64,
        width_prior: f64,
    ) -> Self {
        Self {
            support,
            labels,
            alpha,
            length_prior,
            width_prior,
        }
    }

    /// Number of candidate rules available to lists under this context.
    pub fn rule_count(&self) -> usize {
        self.support.rule_count()
    }

    /// Scores a list: log prior plus log marginal likelihood.
    pub fn score(&self, list: &RuleList) -> ListScore {
        let log_prior = self.log_prior(list);
        let log_likelihood = self.log_likelihood(list);
        ListScore {
            log_prior,
            log_likelihood,
            log_posterior: log_prior + log_likelihood,
        }
    }

    /// Poisson penalty on the list length plus width penalties per rule.
    ///
    /// Widths are discounted by the log count of candidates sharing the
    /// width, so structurally common widths are not over-penalized.
    fn log_prior(&self, list: &RuleList) -> f64 {
        let mut total = log_poisson_pmf(list.len(), self.length_prior);
        for &rule in list.as_slice() {
            let width = self.support.antecedent_len(rule);
            total += log_poisson_pmf(width, self.width_prior);
            let same_width = self.support.len_histogram().get(&width).copied().unwrap_or(1);
            total -= (same_width as f64).ln();
        }
        total
    }

    /// Dirichlet-multinomial marginal likelihood summed over the segments
    /// induced by first-match attribution (leftovers to the default rule).
    fn log_likelihood(&self, list: &RuleList) -> f64 {
        let [alpha0, alpha1] = self.alpha;
        let alpha_sum = alpha0 + alpha1;
        let normalizer = ln_gamma(alpha_sum) - ln_gamma(alpha0) - ln_gamma(alpha1);

        let mut total = 0.0;
        for segment in first_match_segments(self.support, list.as_slice()) {
            let ones = segment
                .iter()
                .filter(|&&row| self.labels[row] == 1)
                .count() as f64;
            let zeros = segment.len() as f64 - ones;
            total += normalizer + ln_gamma(zeros + alpha0) + ln_gamma(ones + alpha1)
                - ln_gamma(zeros + ones + alpha_sum);
        }
        total
    }
}

/// Log probability mass of `k` under a Poisson with the given rate.
pub fn log_poisson_pmf(k: usize, rate: f64) -> f64 {
    k as f64 * rate.ln() - rate - ln_gamma(k as f64 + 1.0)
}
