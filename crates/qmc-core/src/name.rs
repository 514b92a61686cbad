//! Identifiers for gradients and backends
//!
//! Both sets are closed: adding a gradient means adding a variant and a data
//! source, adding a backend means adding a variant and an adapter.

use std::fmt;
use std::str::FromStr;

use crate::GradientError;

/// Name of a built-in gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GradientName {
    Lipari,
    Navia,
}

impl GradientName {
    /// All built-in gradients, in registration order
    pub const ALL: [GradientName; 2] = [GradientName::Lipari, GradientName::Navia];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradientName::Lipari => "lipari",
            GradientName::Navia => "navia",
        }
    }
}

impl fmt::Display for GradientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradientName {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lipari" => Ok(GradientName::Lipari),
            "navia" => Ok(GradientName::Navia),
            other => Err(GradientError::UnknownName(other.to_string())),
        }
    }
}

/// Identifier of a visualization backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BackendId {
    /// Continuous evaluation for immediate-mode plotting
    Plot,
    /// Fixed-size lookup table for GPU texture upload
    Texture,
}

impl BackendId {
    pub const ALL: [BackendId; 2] = [BackendId::Plot, BackendId::Texture];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendId::Plot => "plot",
            BackendId::Texture => "texture",
        }
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendId {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plot" => Ok(BackendId::Plot),
            "texture" => Ok(BackendId::Texture),
            other => Err(GradientError::UnsupportedBackend(other.to_string())),
        }
    }
}
