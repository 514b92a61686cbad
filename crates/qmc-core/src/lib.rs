//! Core data model for the qMRI colormap suite
//!
//! This crate defines the gradient and backend identifiers, the control point
//! representation, and the piecewise-linear gradient evaluation that every
//! backend adapter builds on. No I/O happens here.

pub mod gradient;
pub mod name;
pub mod point;

use thiserror::Error;

// Re-export commonly used types
pub use gradient::{Colormap, LinearGradient};
pub use name::{BackendId, GradientName};
pub use point::ControlPoint;

/// Errors from gradient construction and name resolution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientError {
    #[error("gradient needs at least 2 control points, got {count}")]
    TooFewPoints { count: usize },

    #[error("lookup table resolution must be at least 2, got {resolution}")]
    InvalidResolution { resolution: usize },

    #[error("unknown gradient name '{0}', supported: lipari, navia")]
    UnknownName(String),

    #[error("unsupported backend '{0}', supported: plot, texture")]
    UnsupportedBackend(String),
}
