use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{BrlError, ErrorDetail};

fn list_error(code: &str, message: impl Into<String>) -> BrlError {
    BrlError::Sampler(ErrorDetail::new(code, message.into()))
}

/// A candidate rule antecedent: a set of categorical `feature:value` tokens.
///
/// Tokens are stored sorted and deduplicated so that equal antecedents
/// compare equal and collections of itemsets have a stable order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Itemset {
    tokens: Vec<String>,
}

impl Itemset {
    /// Builds an itemset from the provided tokens, sorting and deduplicating.
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        tokens.sort();
        tokens.dedup();
        Self { tokens }
    }

    /// Returns the empty antecedent used by the default rule.
    pub fn null() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Number of tokens in the antecedent.
    pub fn cardinality(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the antecedent carries no conditions (the default rule).
    pub fn is_null(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Immutable view over the sorted tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether every token of the antecedent occurs in the transaction.
    ///
    /// The null antecedent is satisfied by every transaction.
    pub fn is_satisfied_by(&self, transaction: &Transaction) -> bool {
        self.tokens.iter().all(|token| transaction.contains(token))
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tokens.is_empty() {
            return write!(f, "true");
        }
        write!(f, "{}", self.tokens.join(" AND "))
    }
}

/// An immutable categorical transaction: the set of tokens it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    tokens: BTreeSet<String>,
}

impl Transaction {
    /// Builds a transaction from the provided tokens.
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the transaction carries the given token.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of distinct tokens in the transaction.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the transaction carries no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens in sorted order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// An ordered decision list: distinct candidate indices drawn from `1..=M`.
///
/// Index 0 (the default rule) terminates every list implicitly and is never
/// stored. Evaluation is first-match-wins in storage order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct RuleList {
    indices: Vec<usize>,
}

impl RuleList {
    /// Returns the empty list (default rule only).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a list from explicit indices, validating the invariants.
    pub fn new(indices: Vec<usize>) -> Result<Self, BrlError> {
        let mut seen = BTreeSet::new();
        for &index in &indices {
            if index == 0 {
                return Err(list_error(
                    "null-in-list",
                    "the default rule (index 0) cannot appear inside a list",
                ));
            }
            if !seen.insert(index) {
                return Err(list_error(
                    "duplicate-rule",
                    format!("rule {index} appears more than once"),
                ));
            }
        }
        Ok(Self { indices })
    }

    /// Number of explicit rules in the list (excluding the default rule).
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the list consists of the default rule alone.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Immutable view over the ordered indices.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Whether the list already contains the given rule index.
    pub fn contains(&self, rule: usize) -> bool {
        self.indices.contains(&rule)
    }

    /// Inserts a rule at the given position, rejecting duplicates.
    pub fn insert(&mut self, position: usize, rule: usize) -> Result<(), BrlError> {
        if rule == 0 {
            return Err(list_error(
                "null-in-list",
                "the default rule (index 0) cannot be inserted",
            ));
        }
        if self.contains(rule) {
            return Err(list_error(
                "duplicate-rule",
                format!("rule {rule} is already present"),
            ));
        }
        if position > self.indices.len() {
            return Err(list_error(
                "position-out-of-range",
                format!("insert position {position} exceeds length {}", self.indices.len()),
            ));
        }
        self.indices.insert(position, rule);
        Ok(())
    }

    /// Removes and returns the rule at the given position.
    pub fn remove(&mut self, position: usize) -> Result<usize, BrlError> {
        if position >= self.indices.len() {
            return Err(list_error(
                "position-out-of-range",
                format!("remove position {position} exceeds length {}", self.indices.len()),
            ));
        }
        Ok(self.indices.remove(position))
    }

    /// Swaps the rules at two positions.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), BrlError> {
        if a >= self.indices.len() || b >= self.indices.len() {
            return Err(list_error(
                "position-out-of-range",
                format!("swap positions ({a}, {b}) exceed length {}", self.indices.len()),
            ));
        }
        self.indices.swap(a, b);
        Ok(())
    }

    /// Replaces the rule at a position, returning the displaced index.
    pub fn replace(&mut self, position: usize, rule: usize) -> Result<usize, BrlError> {
        if position >= self.indices.len() {
            return Err(list_error(
                "position-out-of-range",
                format!("replace position {position} exceeds length {}", self.indices.len()),
            ));
        }
        if rule == 0 {
            return Err(list_error(
                "null-in-list",
                "the default rule (index 0) cannot be inserted",
            ));
        }
        if self.indices[position] != rule && self.contains(rule) {
            return Err(list_error(
                "duplicate-rule",
                format!("rule {rule} is already present"),
            ));
        }
        Ok(std::mem::replace(&mut self.indices[position], rule))
    }

    /// Canonical cache key: the index tuple in evaluation order.
    pub fn key(&self) -> Vec<usize> {
        self.indices.clone()
    }
}
