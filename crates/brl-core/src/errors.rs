//! Structured error types shared across the BRL crates.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`BrlError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorDetail {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the BRL engine.
///
/// Input and mining failures are fatal for a fit; convergence problems are
/// never surfaced here (they live in the fit diagnostics), and querying an
/// untrained model yields a `Model` error rather than a panic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum BrlError {
    /// Malformed training input (labels, sample counts).
    #[error("input error: {0}")]
    Input(ErrorDetail),
    /// Candidate itemset mining failures.
    #[error("mining error: {0}")]
    Mining(ErrorDetail),
    /// Rule-list sampler failures.
    #[error("sampler error: {0}")]
    Sampler(ErrorDetail),
    /// Fitted-model usage failures.
    #[error("model error: {0}")]
    Model(ErrorDetail),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorDetail),
}

impl BrlError {
    /// Returns a reference to the payload describing the error.
    pub fn detail(&self) -> &ErrorDetail {
        match self {
            BrlError::Input(detail)
            | BrlError::Mining(detail)
            | BrlError::Sampler(detail)
            | BrlError::Model(detail)
            | BrlError::Serde(detail) => detail,
        }
    }
}
