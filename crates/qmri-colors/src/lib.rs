//! qMRI colormaps for scientific visualization
//!
//! Provides the lipari and navia colormaps for both supported backends.
//! Registration is lazy: the first lookup of a name registers it with the
//! backend's catalogue, and repeated lookups return the same instance.
//!
//! ```no_run
//! use qmri_colors::{BackendId, Colormap, GradientName};
//!
//! let cmap = qmri_colors::get_colormap(GradientName::Lipari, BackendId::Plot)?;
//! let rgba = cmap.sample(0.5);
//! # Ok::<(), qmri_colors::RegistryError>(())
//! ```
//!
//! Hosts that want every colormap available up front call [`install`], which
//! registers everything and logs (rather than returns) whatever fails.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use qmc_backends::registry::ColormapRegistry;
use qmc_backends::{plot, texture, PlotBackend, Registry, TextureBackend};
use qmc_data::ColorPointStore;
use thiserror::Error;

// Re-exports
pub use qmc_backends::{
    Catalogue, InMemoryCatalogue, PlotColormap, RegistryError, TextureColormap,
};
pub use qmc_core::{BackendId, Colormap, ControlPoint, GradientError, GradientName};

/// Errors from the string-keyed facade surface
#[derive(Error, Debug)]
pub enum ColormapError {
    #[error(transparent)]
    Name(#[from] GradientError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// The two registries behind the facade
///
/// The process-wide instance backs the free functions below; tests build
/// their own suites against substitute stores and catalogues.
pub struct ColormapSuite {
    plot: Registry<PlotBackend>,
    texture: Registry<TextureBackend>,
}

impl ColormapSuite {
    pub fn new(plot: Registry<PlotBackend>, texture: Registry<TextureBackend>) -> Self {
        Self { plot, texture }
    }

    fn registry(&self, backend: BackendId) -> &dyn ColormapRegistry {
        match backend {
            BackendId::Plot => &self.plot,
            BackendId::Texture => &self.texture,
        }
    }

    pub fn get(
        &self,
        name: GradientName,
        backend: BackendId,
    ) -> Result<Arc<dyn Colormap>, RegistryError> {
        self.registry(backend).get(name)
    }

    pub fn list_names(&self, backend: BackendId) -> Vec<String> {
        self.registry(backend).list_names()
    }

    /// Register every gradient with every backend
    ///
    /// A failure on one backend never prevents attempting the other; all
    /// failures end up in the summary.
    pub fn register_all(&self) -> RegistrationSummary {
        let mut summary = RegistrationSummary::default();
        for backend in BackendId::ALL {
            let registered = summary.registered.entry(backend).or_default();
            for name in GradientName::ALL {
                match self.registry(backend).ensure_registered(name) {
                    Ok(()) => {
                        registered.insert(name);
                    }
                    Err(err) => summary.errors.entry(backend).or_default().push(err),
                }
            }
        }
        summary
    }
}

/// Outcome of [`register_all`]: what landed where, and what failed
#[derive(Debug, Default)]
pub struct RegistrationSummary {
    pub registered: BTreeMap<BackendId, BTreeSet<GradientName>>,
    pub errors: BTreeMap<BackendId, Vec<RegistryError>>,
}

impl RegistrationSummary {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

static SUITE: Lazy<ColormapSuite> = Lazy::new(|| {
    ColormapSuite::new(
        Registry::new(PlotBackend, ColorPointStore::embedded(), plot::global_catalogue()),
        Registry::new(
            TextureBackend::default(),
            ColorPointStore::embedded(),
            texture::global_catalogue(),
        ),
    )
});

/// Look up a colormap, registering it on first use
pub fn get_colormap(
    name: GradientName,
    backend: BackendId,
) -> Result<Arc<dyn Colormap>, RegistryError> {
    SUITE.get(name, backend)
}

/// String-keyed lookup mirroring the identifiers used in plot configuration
pub fn get_colormap_by_name(name: &str, backend: &str) -> Result<Arc<dyn Colormap>, ColormapError> {
    let name = GradientName::from_str(name)?;
    let backend = BackendId::from_str(backend)?;
    Ok(get_colormap(name, backend)?)
}

/// Typed lookup on the plot backend
pub fn plot_colormap(name: GradientName) -> Result<Arc<PlotColormap>, RegistryError> {
    SUITE.plot.colormap(name)
}

/// Typed lookup on the texture backend
pub fn texture_colormap(name: GradientName) -> Result<Arc<TextureColormap>, RegistryError> {
    SUITE.texture.colormap(name)
}

/// All names in a backend's catalogue, after registering the built-ins
pub fn list_names(backend: BackendId) -> Vec<String> {
    SUITE.list_names(backend)
}

/// The closed set of built-in gradient names
pub fn list_supported_names() -> [&'static str; 2] {
    [GradientName::Lipari.as_str(), GradientName::Navia.as_str()]
}

/// Register every gradient with every backend
pub fn register_all() -> RegistrationSummary {
    SUITE.register_all()
}

/// Tolerant setup entry point: register everything, log what fails
///
/// Granular errors stay available through [`register_all`] and the summary;
/// this function exists for hosts that treat missing colormaps as a
/// degradation rather than a startup failure.
pub fn install() -> RegistrationSummary {
    let summary = register_all();
    for (backend, errors) in &summary.errors {
        for err in errors {
            tracing::warn!("could not register colormaps for {} backend: {}", backend, err);
        }
    }
    summary
}
