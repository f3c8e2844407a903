//! Frame rendering: figure geometry, panels, annotations and PNG output.

/// Raster canvas with a vector overlay.
pub mod canvas;
/// Comparison frames (grid of panels, colorbar, title).
pub mod compose;
/// Font database and resolver for overlay text.
pub mod fonts;
/// Grid shape and slot geometry.
pub mod layout;
/// SVG annotations rasterized with `resvg`.
pub mod overlay;
/// Single-panel drawing.
pub mod panel;
/// Axis tick placement and labels.
pub mod ticks;
