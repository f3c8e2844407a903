//! Model output and the loader seam.

/// Loading model output.
pub mod loader;
/// In-memory dataset model.
pub mod model;
