//! Structured error types shared across netlistx crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`NetlistError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (handles, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for netlistx.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum NetlistError {
    /// Graph and hypergraph structural errors (unknown handles, bad pins).
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Weight and gap ledger lookups outside the declared universe.
    #[error("weight error: {0}")]
    Weight(ErrorInfo),
    /// Cycle search and reconstruction errors.
    #[error("cycle error: {0}")]
    Cycle(ErrorInfo),
    /// Invalid solver or netlist configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl NetlistError {
    /// Shorthand for a [`NetlistError::Graph`] error.
    pub fn graph(code: impl Into<String>, message: impl Into<String>) -> Self {
        NetlistError::Graph(ErrorInfo::new(code, message))
    }

    /// Shorthand for a [`NetlistError::Weight`] error.
    pub fn weight(code: impl Into<String>, message: impl Into<String>) -> Self {
        NetlistError::Weight(ErrorInfo::new(code, message))
    }

    /// Shorthand for a [`NetlistError::Cycle`] error.
    pub fn cycle(code: impl Into<String>, message: impl Into<String>) -> Self {
        NetlistError::Cycle(ErrorInfo::new(code, message))
    }

    /// Shorthand for a [`NetlistError::Config`] error.
    pub fn config(code: impl Into<String>, message: impl Into<String>) -> Self {
        NetlistError::Config(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            NetlistError::Graph(info)
            | NetlistError::Weight(info)
            | NetlistError::Cycle(info)
            | NetlistError::Config(info) => info,
        }
    }

    /// Adds a context entry to the payload, whatever the family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        let value = value.to_string();
        match self {
            NetlistError::Graph(info) => NetlistError::Graph(info.with_context(key, value)),
            NetlistError::Weight(info) => NetlistError::Weight(info.with_context(key, value)),
            NetlistError::Cycle(info) => NetlistError::Cycle(info.with_context(key, value)),
            NetlistError::Config(info) => NetlistError::Config(info.with_context(key, value)),
        }
    }

    /// Sets a remediation hint on the payload, whatever the family.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            NetlistError::Graph(info) => NetlistError::Graph(info.with_hint(hint)),
            NetlistError::Weight(info) => NetlistError::Weight(info.with_hint(hint)),
            NetlistError::Cycle(info) => NetlistError::Cycle(info.with_hint(hint)),
            NetlistError::Config(info) => NetlistError::Config(info.with_hint(hint)),
        }
    }
}
