//! Configuration errors for component construction.

use thiserror::Error;

/// A single rule a configuration parameter broke.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Violation {
    #[error("{name} must be finite (got {value})")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must not be negative (got {value})")]
    NegativeTolerance { name: &'static str, value: f64 },

    #[error("{name} is used as a divisor and must not be zero")]
    ZeroReference { name: &'static str },
}

/// Errors that can occur when constructing a component.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid configuration: {}", render(.violations))]
    InvalidConfiguration { violations: Vec<Violation> },
}

impl ConfigError {
    /// Every violation found, in check order.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::InvalidConfiguration { violations } => violations,
        }
    }
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
