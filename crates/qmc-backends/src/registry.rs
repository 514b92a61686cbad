//! Lazy colormap registries
//!
//! One registry per backend. Registration is idempotent and happens on first
//! use; the check-then-insert sequence is guarded by the registry's mutex so
//! concurrent callers cannot register the same name twice or write the
//! catalogue entry concurrently. A name, once registered, stays registered
//! for the life of the process.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::Mutex;
use qmc_core::{BackendId, Colormap, ControlPoint, GradientError, GradientName};
use qmc_data::ColorPointStore;

use crate::catalogue::Catalogue;
use crate::{BuildError, RegistryError};

/// Builds one backend's colormap representation from a control point sequence
pub trait BackendAdapter: Send + Sync {
    type Colormap: Colormap + 'static;

    fn id(&self) -> BackendId;

    fn build(
        &self,
        name: GradientName,
        points: Vec<ControlPoint>,
    ) -> Result<Self::Colormap, GradientError>;
}

/// Shared contract of the per-backend registries
pub trait ColormapRegistry: Send + Sync {
    fn backend(&self) -> BackendId;

    /// Register `name` if it is not registered yet; no-op otherwise
    fn ensure_registered(&self, name: GradientName) -> Result<(), RegistryError>;

    /// Look up `name`, registering it first when needed
    fn get(&self, name: GradientName) -> Result<Arc<dyn Colormap>, RegistryError>;

    /// Ensure every built-in gradient, then list all names in the backend's
    /// catalogue (including names registered by unrelated code)
    fn list_names(&self) -> Vec<String>;
}

/// Registry implementation shared by both backends
pub struct Registry<A: BackendAdapter> {
    adapter: A,
    store: ColorPointStore,
    catalogue: Arc<dyn Catalogue<A::Colormap>>,
    entries: Mutex<AHashMap<GradientName, Arc<A::Colormap>>>,
}

impl<A: BackendAdapter> Registry<A> {
    pub fn new(
        adapter: A,
        store: ColorPointStore,
        catalogue: Arc<dyn Catalogue<A::Colormap>>,
    ) -> Self {
        Self {
            adapter,
            store,
            catalogue,
            entries: Mutex::new(AHashMap::new()),
        }
    }

    /// Typed variant of [`ColormapRegistry::get`]
    pub fn colormap(&self, name: GradientName) -> Result<Arc<A::Colormap>, RegistryError> {
        self.ensure_registered(name)?;
        self.entries
            .lock()
            .get(&name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownGradient {
                backend: self.adapter.id(),
                name: name.to_string(),
            })
    }

    fn build_colormap(&self, name: GradientName) -> Result<A::Colormap, BuildError> {
        let points = self.store.load(name)?;
        Ok(self.adapter.build(name, points)?)
    }
}

impl<A: BackendAdapter> ColormapRegistry for Registry<A> {
    fn backend(&self) -> BackendId {
        self.adapter.id()
    }

    fn ensure_registered(&self, name: GradientName) -> Result<(), RegistryError> {
        // The lock spans load, build, and both inserts; a failure before the
        // inserts leaves the registry and the catalogue untouched.
        let mut entries = self.entries.lock();
        if entries.contains_key(&name) {
            return Ok(());
        }
        let colormap = self
            .build_colormap(name)
            .map_err(|source| RegistryError::Registration {
                backend: self.adapter.id(),
                name,
                source,
            })?;
        let colormap = Arc::new(colormap);
        self.catalogue.register(name.as_str(), Arc::clone(&colormap));
        entries.insert(name, colormap);
        tracing::info!("registered colormap '{}' with {} backend", name, self.adapter.id());
        Ok(())
    }

    fn get(&self, name: GradientName) -> Result<Arc<dyn Colormap>, RegistryError> {
        self.colormap(name).map(|colormap| colormap as Arc<dyn Colormap>)
    }

    fn list_names(&self) -> Vec<String> {
        for name in GradientName::ALL {
            if let Err(err) = self.ensure_registered(name) {
                tracing::warn!("colormap '{}' unavailable: {}", name, err);
            }
        }
        self.catalogue.names()
    }
}
