use brl_core::errors::ErrorDetail;
use brl_core::{BrlError, RuleList};
use brl_mine::{first_match_segments, RuleSupport};
use statrs::distribution::{Beta, ContinuousCDF};

/// Central credible interval bounds reported per position.
const LOWER_QUANTILE: f64 = 0.025;
const UPPER_QUANTILE: f64 = 0.975;

/// Posterior class-1 probabilities and credible intervals for a list.
///
/// Output arrays align 1:1 with the positions of `d_star`, with the
/// implicit terminal default rule as the final entry. Each position sees
/// only the transactions exclusively attributed to it under first-match
/// semantics; the posterior is Beta(`alpha1 + n1`, `alpha0 + n0`), whose
/// mean with empty segments and unit pseudocounts is exactly 0.5.
pub fn estimate_consequents(
    support: &RuleSupport,
    labels: &[u8],
    d_star: &RuleList,
    alpha: [f64; 2],
) -> Result<(Vec<f64>, Vec<(f64, f64)>), BrlError> {
    let [alpha0, alpha1] = alpha;
    let segments = first_match_segments(support, d_star.as_slice());

    let mut theta = Vec::with_capacity(segments.len());
    let mut ci_theta = Vec::with_capacity(segments.len());
    for segment in segments {
        let ones = segment.iter().filter(|&&row| labels[row] == 1).count() as f64;
        let zeros = segment.len() as f64 - ones;

        theta.push((alpha1 + ones) / (alpha0 + alpha1 + zeros + ones));

        let posterior = Beta::new(alpha1 + ones, alpha0 + zeros).map_err(|err| {
            BrlError::Model(ErrorDetail::new("credible-interval", err.to_string()))
        })?;
        ci_theta.push((
            posterior.inverse_cdf(LOWER_QUANTILE),
            posterior.inverse_cdf(UPPER_QUANTILE),
        ));
    }
    Ok((theta, ci_theta))
}
