//! Backend adapters and lazy colormap registries
//!
//! Each backend owns a process-wide colormap catalogue. A registry fills that
//! catalogue on demand: first lookup of a gradient loads its control points,
//! builds the backend's representation, and registers it under its name. The
//! two backends share one registry implementation behind the
//! [`ColormapRegistry`] contract.

pub mod catalogue;
pub mod plot;
pub mod registry;
pub mod texture;

use qmc_core::{BackendId, GradientError, GradientName};
use qmc_data::StoreError;
use thiserror::Error;

// Re-exports
pub use catalogue::{Catalogue, InMemoryCatalogue};
pub use plot::{PlotBackend, PlotColormap};
pub use registry::{BackendAdapter, ColormapRegistry, Registry};
pub use texture::{TextureBackend, TextureColormap};

/// Failure in the load/build pipeline behind a registration
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Gradient(#[from] GradientError),
}

/// Errors surfaced by the registry contract
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("failed to register colormap '{name}' with {backend} backend: {source}")]
    Registration {
        backend: BackendId,
        name: GradientName,
        #[source]
        source: BuildError,
    },

    #[error("colormap '{name}' is not registered with {backend} backend")]
    UnknownGradient { backend: BackendId, name: String },
}
