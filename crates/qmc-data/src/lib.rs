//! Gradient data loading for the qMRI colormap suite
//!
//! The authored lipari and navia control point tables ship embedded in the
//! crate; a file-backed mode exists for overriding them from disk.

pub mod store;

use std::path::PathBuf;

use qmc_core::GradientName;
use thiserror::Error;

// Re-exports
pub use store::ColorPointStore;

/// Errors that can occur while loading gradient data
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no data source for gradient '{name}' at {path}")]
    NotFound { name: GradientName, path: PathBuf },

    #[error("data source for gradient '{name}' contains no usable rows")]
    Empty { name: GradientName },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
