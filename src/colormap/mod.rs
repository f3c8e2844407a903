//! Named color scales.

/// Base scales and the custom composites.
pub mod builtin;
/// Lookup-table colormap.
pub mod map;
/// Register-once colormap namespace.
pub mod registry;

pub use map::Colormap;
pub use registry::{ColormapRegistry, get, install};
