//! Shared value types, numeric helpers and the error taxonomy.

/// Core value types (axis pairs, extents, limits, pixel rectangles).
pub mod core;
/// Error types.
pub mod error;
/// Numeric helpers.
pub mod math;
