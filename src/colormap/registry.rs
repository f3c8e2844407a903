use crate::colormap::builtin::{base_colormaps, custom_colormaps};
use crate::colormap::map::Colormap;
use crate::foundation::error::{MovieError, MovieResult};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

/// Named colormaps.
#[derive(Clone, Debug, Default)]
pub struct ColormapRegistry {
    maps: BTreeMap<String, Arc<Colormap>>,
}

impl ColormapRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the base scales only.
    pub fn with_base_colormaps() -> Self {
        let mut reg = Self::new();
        for cmap in base_colormaps() {
            reg.maps.insert(cmap.name().to_owned(), Arc::new(cmap));
        }
        reg
    }

    /// Add a colormap; a name can be registered only once.
    pub fn insert(&mut self, cmap: Colormap) -> MovieResult<()> {
        if self.maps.contains_key(cmap.name()) {
            return Err(MovieError::validation(format!(
                "colormap '{}' is already registered",
                cmap.name()
            )));
        }
        self.maps.insert(cmap.name().to_owned(), Arc::new(cmap));
        Ok(())
    }

    /// Add `ferret`, `thermal_driving` and `haline_driving`.
    pub fn register_custom(&mut self) -> MovieResult<()> {
        for cmap in custom_colormaps() {
            self.insert(cmap)?;
        }
        Ok(())
    }

    /// Look a colormap up by name.
    pub fn get(&self, name: &str) -> Option<Arc<Colormap>> {
        self.maps.get(name).cloned()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str)
    }
}

static GLOBAL: OnceLock<ColormapRegistry> = OnceLock::new();

/// Process-wide registry, built on first use.
pub fn global() -> &'static ColormapRegistry {
    GLOBAL.get_or_init(|| {
        let mut reg = ColormapRegistry::with_base_colormaps();
        if let Err(e) = reg.register_custom() {
            tracing::warn!(error = %e, "custom colormaps not registered");
        }
        tracing::debug!(count = reg.maps.len(), "colormaps registered");
        reg
    })
}

/// Register the custom colormaps process-wide.
///
/// Returns `true` on the call that performed the registration; later calls are no-ops.
pub fn install() -> bool {
    let first = GLOBAL.get().is_none();
    global();
    first
}

/// Look a colormap up in the process-wide registry.
pub fn get(name: &str) -> Option<Arc<Colormap>> {
    global().get(name)
}

#[cfg(test)]
#[path = "../../tests/unit/colormap/registry.rs"]
mod tests;
