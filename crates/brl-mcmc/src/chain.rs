use std::collections::BTreeMap;

use brl_core::errors::ErrorDetail;
use brl_core::{BrlError, RngHandle, RuleList};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::cache::PermutationCache;
use crate::config::TrainConfig;
use crate::determinism;
use crate::moves::{self, MoveKind};
use crate::posterior::{log_poisson_pmf, ListScore, PosteriorModel};

/// One retained sample from a chain's post-burn-in history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainSample {
    /// Iteration at which the sample was recorded.
    pub iteration: usize,
    /// Length of the list held at that iteration.
    pub list_len: usize,
    /// Un-normalized log posterior of the list held at that iteration.
    pub log_posterior: f64,
}

/// Everything a finished chain hands back to the merger.
///
/// A chain never resumes after finishing within one fit; its cache is
/// consumed exactly once by [`crate::merge_chains`].
#[derive(Debug)]
pub struct ChainRun {
    /// Index of the chain within the run.
    pub chain_index: usize,
    /// Chain-local memoization table with post-burn-in visit counts.
    pub cache: PermutationCache,
    /// Retained post-burn-in, thinned sample history.
    pub samples: Vec<ChainSample>,
    /// List held when the chain finished.
    pub final_list: RuleList,
    /// Score of the final list.
    pub final_score: ListScore,
    /// Accepted proposals per move kind.
    pub accepted: BTreeMap<MoveKind, usize>,
    /// Issued proposals per move kind.
    pub proposed: BTreeMap<MoveKind, usize>,
}

/// Runs a single chain for up to `max_iter` iterations.
///
/// `budget` caps the iteration count below `max_iter` for early stopping;
/// burn-in is then re-evaluated against the shorter run. A budget of zero
/// is rejected as under-sampled.
pub fn run_chain(
    config: &TrainConfig,
    model: &PosteriorModel<'_>,
    chain_index: usize,
    warm_start: Option<RuleList>,
    budget: Option<usize>,
) -> Result<ChainRun, BrlError> {
    let rule_count = model.rule_count();
    if rule_count == 0 {
        return Err(BrlError::Sampler(ErrorDetail::new(
            "no-candidate-rules",
            "the sampler needs at least one mined candidate",
        )));
    }
    let iterations = budget.unwrap_or(config.max_iter).min(config.max_iter);
    if iterations == 0 {
        return Err(BrlError::Sampler(
            ErrorDetail::new("under-sampled", "iteration budget leaves no samples")
                .with_hint("raise the budget or drop the early stop"),
        ));
    }
    let burn_in = config.effective_burn_in(iterations);
    let master_seed = config.seed_policy.master_seed;

    let mut init_rng = RngHandle::from_seed(determinism::chain_seed(master_seed, chain_index));
    let mut current = match warm_start {
        Some(list) => validated_warm_start(list, rule_count)?,
        None => random_initial_list(rule_count, config.list_length_prior, &mut init_rng)?,
    };
    let mut current_score = model.score(&current);

    let mut cache = PermutationCache::new();
    cache.insert_score(current.key(), current_score);

    let mut samples = Vec::new();
    let mut accepted: BTreeMap<MoveKind, usize> = BTreeMap::new();
    let mut proposed: BTreeMap<MoveKind, usize> = BTreeMap::new();

    for iteration in 0..iterations {
        let mut move_rng =
            RngHandle::from_seed(determinism::move_seed(master_seed, chain_index, iteration));
        let kinds = MoveKind::feasible(current.len(), rule_count);
        let kind = kinds[(move_rng.next_u64() as usize) % kinds.len()];
        *proposed.entry(kind).or_insert(0) += 1;

        if let Ok(proposal) = moves::propose(kind, &current, rule_count, &mut move_rng) {
            let key = proposal.candidate.key();
            let candidate_score = match cache.score_of(&key) {
                Some(score) => score,
                None => {
                    let score = model.score(&proposal.candidate);
                    cache.insert_score(key, score);
                    score
                }
            };
            // The feasible-move set differs between states, so the kind
            // selection probability is part of the proposal ratio.
            let reverse_kinds = MoveKind::feasible(proposal.candidate.len(), rule_count);
            let ratio = (kinds.len() as f64 / reverse_kinds.len() as f64)
                * (proposal.reverse_prob / proposal.forward_prob);
            let acceptance = ((candidate_score.log_posterior - current_score.log_posterior)
                .exp()
                * ratio)
                .min(1.0);
            let draw = move_rng.next_u64() as f64 / u64::MAX as f64;
            if draw < acceptance {
                current = proposal.candidate;
                current_score = candidate_score;
                *accepted.entry(kind).or_insert(0) += 1;
            }
        }

        if iteration >= burn_in && (iteration - burn_in) % config.thinning == 0 {
            cache.record_visit(current.key(), current_score);
            samples.push(ChainSample {
                iteration,
                list_len: current.len(),
                log_posterior: current_score.log_posterior,
            });
        }
    }

    Ok(ChainRun {
        chain_index,
        cache,
        samples,
        final_list: current,
        final_score: current_score,
        accepted,
        proposed,
    })
}

fn validated_warm_start(list: RuleList, rule_count: usize) -> Result<RuleList, BrlError> {
    for &rule in list.as_slice() {
        if rule == 0 || rule > rule_count {
            return Err(BrlError::Sampler(ErrorDetail::new(
                "warm-start-out-of-range",
                format!("warm start references rule {rule} outside 1..={rule_count}"),
            )));
        }
    }
    Ok(list)
}

/// Draws an initial list whose length follows a truncated Poisson around
/// the configured expected length.
fn random_initial_list(
    rule_count: usize,
    expected_len: f64,
    rng: &mut RngHandle,
) -> Result<RuleList, BrlError> {
    let target = sample_truncated_poisson(expected_len, rule_count, rng);
    let mut pool: Vec<usize> = (1..=rule_count).collect();
    let mut indices = Vec::with_capacity(target);
    for _ in 0..target {
        let pick = (rng.next_u64() as usize) % pool.len();
        indices.push(pool.swap_remove(pick));
    }
    RuleList::new(indices)
}

fn sample_truncated_poisson(rate: f64, max: usize, rng: &mut RngHandle) -> usize {
    let weights: Vec<f64> = (0..=max)
        .map(|k| log_poisson_pmf(k, rate).exp())
        .collect();
    let total: f64 = weights.iter().sum();
    let mut draw = (rng.next_u64() as f64 / u64::MAX as f64) * total;
    for (k, weight) in weights.iter().enumerate() {
        if draw < *weight {
            return k;
        }
        draw -= weight;
    }
    max
}
