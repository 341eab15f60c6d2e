use brl_core::errors::ErrorDetail;
use brl_core::{BrlError, RngHandle, RuleList};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Kind of structural move proposed over a rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Insert an unused rule at a random position.
    Add,
    /// Remove the rule at a random position.
    Remove,
    /// Swap the rules at two random positions.
    Swap,
    /// Replace the rule at a random position with an unused rule.
    Replace,
}

impl MoveKind {
    /// Short stable name used in acceptance-rate summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveKind::Add => "add",
            MoveKind::Remove => "remove",
            MoveKind::Swap => "swap",
            MoveKind::Replace => "replace",
        }
    }

    /// Move kinds applicable to a list of length `len` over `rule_count`
    /// candidates.
    pub fn feasible(len: usize, rule_count: usize) -> Vec<MoveKind> {
        let mut kinds = Vec::new();
        if len < rule_count {
            kinds.push(MoveKind::Add);
        }
        if len >= 1 {
            kinds.push(MoveKind::Remove);
        }
        if len >= 2 {
            kinds.push(MoveKind::Swap);
        }
        if len >= 1 && len < rule_count {
            kinds.push(MoveKind::Replace);
        }
        kinds
    }
}

/// Result of a list move proposal.
#[derive(Debug, Clone)]
pub struct ListProposal {
    /// Candidate list produced by the move.
    pub candidate: RuleList,
    /// Forward proposal probability for MH acceptance.
    pub forward_prob: f64,
    /// Reverse proposal probability for MH acceptance.
    pub reverse_prob: f64,
    /// Human readable description of the move.
    pub description: String,
}

fn move_error(code: &str, message: &str) -> BrlError {
    BrlError::Sampler(ErrorDetail::new(code, message))
}

fn unused_rules(list: &RuleList, rule_count: usize) -> Vec<usize> {
    (1..=rule_count).filter(|&rule| !list.contains(rule)).collect()
}

/// Proposes inserting an unused rule at a uniform position.
pub fn propose_add(
    list: &RuleList,
    rule_count: usize,
    rng: &mut RngHandle,
) -> Result<ListProposal, BrlError> {
    let unused = unused_rules(list, rule_count);
    if unused.is_empty() {
        return Err(move_error("list-saturated", "every candidate rule is in use"));
    }
    let rule = unused[(rng.next_u64() as usize) % unused.len()];
    let position = (rng.next_u64() as usize) % (list.len() + 1);

    let mut candidate = list.clone();
    candidate.insert(position, rule)?;

    Ok(ListProposal {
        candidate,
        forward_prob: 1.0 / (unused.len() * (list.len() + 1)) as f64,
        reverse_prob: 1.0 / (list.len() + 1) as f64,
        description: format!("add:r{rule}@{position}"),
    })
}

/// Proposes removing the rule at a uniform position.
pub fn propose_remove(
    list: &RuleList,
    rule_count: usize,
    rng: &mut RngHandle,
) -> Result<ListProposal, BrlError> {
    if list.is_empty() {
        return Err(move_error("list-empty", "no rule to remove"));
    }
    let position = (rng.next_u64() as usize) % list.len();

    let mut candidate = list.clone();
    let rule = candidate.remove(position)?;

    let unused_after = rule_count - candidate.len();
    Ok(ListProposal {
        candidate,
        forward_prob: 1.0 / list.len() as f64,
        reverse_prob: 1.0 / (unused_after * list.len()) as f64,
        description: format!("remove:r{rule}@{position}"),
    })
}

/// Proposes swapping the rules at two distinct uniform positions.
pub fn propose_swap(list: &RuleList, rng: &mut RngHandle) -> Result<ListProposal, BrlError> {
    if list.len() < 2 {
        return Err(move_error("list-too-short", "need at least two rules to swap"));
    }
    let a = (rng.next_u64() as usize) % list.len();
    let mut b = (rng.next_u64() as usize) % list.len();
    if b == a {
        b = (b + 1) % list.len();
    }

    let mut candidate = list.clone();
    candidate.swap(a, b)?;

    let pair_prob = 2.0 / (list.len() * (list.len() - 1)) as f64;
    Ok(ListProposal {
        candidate,
        forward_prob: pair_prob,
        reverse_prob: pair_prob,
        description: format!("swap:@{a}-@{b}"),
    })
}

/// Proposes replacing the rule at a uniform position with an unused rule.
pub fn propose_replace(
    list: &RuleList,
    rule_count: usize,
    rng: &mut RngHandle,
) -> Result<ListProposal, BrlError> {
    if list.is_empty() {
        return Err(move_error("list-empty", "no rule to replace"));
    }
    let unused = unused_rules(list, rule_count);
    if unused.is_empty() {
        return Err(move_error("list-saturated", "every candidate rule is in use"));
    }
    let position = (rng.next_u64() as usize) % list.len();
    let rule = unused[(rng.next_u64() as usize) % unused.len()];

    let mut candidate = list.clone();
    let displaced = candidate.replace(position, rule)?;

    let prob = 1.0 / (list.len() * unused.len()) as f64;
    Ok(ListProposal {
        candidate,
        forward_prob: prob,
        reverse_prob: prob,
        description: format!("replace:r{displaced}->r{rule}@{position}"),
    })
}

/// Dispatches a proposal of the given kind.
pub fn propose(
    kind: MoveKind,
    list: &RuleList,
    rule_count: usize,
    rng: &mut RngHandle,
) -> Result<ListProposal, BrlError> {
    match kind {
        MoveKind::Add => propose_add(list, rule_count, rng),
        MoveKind::Remove => propose_remove(list, rule_count, rng),
        MoveKind::Swap => propose_swap(list, rng),
        MoveKind::Replace => propose_replace(list, rule_count, rng),
    }
}
