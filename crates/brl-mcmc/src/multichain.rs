use std::collections::BTreeMap;

use brl_core::errors::ErrorDetail;
use brl_core::{BrlError, RuleList};
use brl_mine::RuleSupport;
use rayon::prelude::*;

use crate::chain::{run_chain, ChainRun};
use crate::config::TrainConfig;
use crate::diagnostics::{convergence_report, ConvergenceReport};
use crate::moves::MoveKind;
use crate::posterior::PosteriorModel;

/// Gathered results of all independent chains of one fit.
#[derive(Debug)]
pub struct MultichainOutcome {
    /// Finished chains in chain-index order.
    pub runs: Vec<ChainRun>,
    /// Gelman-Rubin diagnostic over the chain histories.
    pub convergence: ConvergenceReport,
    /// Acceptance rates per move kind, aggregated over all chains.
    pub acceptance_rates: BTreeMap<String, f64>,
}

/// Runs `n_chains` independent chains over the shared immutable inputs.
///
/// Chains only read the satisfaction sets and labels; each owns its own
/// state and cache, so the fan-out needs no locking. Results are gathered
/// in chain order and the convergence diagnostic is computed before the
/// caches are merged.
pub fn run_multichain(
    config: &TrainConfig,
    support: &RuleSupport,
    labels: &[u8],
    warm_starts: &[Option<RuleList>],
) -> Result<MultichainOutcome, BrlError> {
    config.validate()?;
    let model = PosteriorModel::new(
        support,
        labels,
        config.alpha,
        config.list_length_prior,
        config.list_width_prior,
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.n_chains.max(1))
        .build()
        .map_err(|err| BrlError::Sampler(ErrorDetail::new("thread-pool", err.to_string())))?;

    let results: Result<Vec<ChainRun>, BrlError> = pool.install(|| {
        (0..config.n_chains)
            .into_par_iter()
            .map(|chain_index| {
                let warm_start = warm_starts.get(chain_index).cloned().flatten();
                run_chain(config, &model, chain_index, warm_start, None)
            })
            .collect()
    });

    let mut runs = results?;
    runs.sort_by_key(|run| run.chain_index);

    let convergence = convergence_report(&runs);
    let acceptance_rates = aggregate_acceptance(&runs);
    Ok(MultichainOutcome {
        runs,
        convergence,
        acceptance_rates,
    })
}

fn aggregate_acceptance(runs: &[ChainRun]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::<MoveKind, (usize, usize)>::new();
    for run in runs {
        for (kind, proposed) in &run.proposed {
            let entry = totals.entry(*kind).or_insert((0, 0));
            entry.0 += *proposed;
        }
        for (kind, accepted) in &run.accepted {
            let entry = totals.entry(*kind).or_insert((0, 0));
            entry.1 += *accepted;
        }
    }
    totals
        .into_iter()
        .map(|(kind, (proposed, accepted))| {
            let rate = if proposed == 0 {
                0.0
            } else {
                accepted as f64 / proposed as f64
            };
            (kind.as_str().to_string(), rate)
        })
        .collect()
}
