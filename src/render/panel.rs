//! Drawing one model's field slice into one panel.

use crate::colormap::Colormap;
use crate::dataset::model::FieldSlice;
use crate::foundation::core::{AxisPair, Extent, Limits, PixelRect};
use crate::render::canvas::FrameCanvas;
use crate::render::overlay::Anchor;
use std::sync::Arc;

/// Font size of the in-panel time label (12 pt at 100 dpi).
pub const LABEL_FONT_PX: f64 = 12.0 * 100.0 / 72.0;

/// Everything needed to draw one panel.
#[derive(Clone, Debug)]
pub struct PanelSpec<'a> {
    /// 2D field slice; non-finite values are missing.
    pub field: FieldSlice<'a>,
    /// Text drawn inside the panel.
    pub label: &'a str,
    /// Factor applied before color mapping.
    pub scale: f64,
    /// Color limits.
    pub limits: Limits,
    /// Data-space extent of the image.
    pub extent: Extent,
    /// Plotted axis pair.
    pub axes: AxisPair,
    /// Color scale.
    pub cmap: Arc<Colormap>,
}

/// The color mapping of a drawn panel, used to build the shared colorbar.
#[derive(Clone, Debug)]
pub struct ColorLink {
    /// Color scale.
    pub cmap: Arc<Colormap>,
    /// Color limits.
    pub limits: Limits,
}

/// Axes box and data view limits of a panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelView {
    /// Axes box in figure pixels.
    pub rect: PixelRect,
    /// `(left, right)` data limits.
    pub xlim: (f64, f64),
    /// `(bottom, top)` data limits.
    pub ylim: (f64, f64),
}

impl PanelView {
    /// View for an image with `extent` placed in `slot`.
    ///
    /// The view limits start as `x: (left, right)`, `y: (bottom, top)`. Plan views then swap the
    /// y limits, which together with the swapped `xy` extent puts increasing y at the top.
    pub fn new(slot: PixelRect, extent: Extent, axes: AxisPair) -> Self {
        let rect = if axes.keeps_data_aspect() && extent.height() > 0.0 {
            slot.fit_aspect(extent.width() / extent.height())
        } else {
            slot
        };

        let xlim = (extent.left, extent.right);
        let mut ylim = (extent.bottom, extent.top);
        if axes.inverts_y_axis() {
            ylim = (ylim.1, ylim.0);
        }
        Self { rect, xlim, ylim }
    }

    /// Data coordinates to figure pixels.
    pub fn data_to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        let fx = (x - self.xlim.0) / (self.xlim.1 - self.xlim.0);
        let fy = (y - self.ylim.0) / (self.ylim.1 - self.ylim.0);
        (
            self.rect.x0 + fx * self.rect.width(),
            self.rect.y1 - fy * self.rect.height(),
        )
    }

    /// Figure pixels to data coordinates.
    pub fn pixel_to_data(&self, px: f64, py: f64) -> (f64, f64) {
        let fx = (px - self.rect.x0) / self.rect.width();
        let fy = (self.rect.y1 - py) / self.rect.height();
        (
            self.xlim.0 + fx * (self.xlim.1 - self.xlim.0),
            self.ylim.0 + fy * (self.ylim.1 - self.ylim.0),
        )
    }
}

/// Data cell `(row, col)` under data point `(x, y)`: row 0 at `extent.top`, column 0 at
/// `extent.left`.
pub fn cell_at(extent: &Extent, rows: usize, cols: usize, x: f64, y: f64) -> Option<(usize, usize)> {
    let fx = (x - extent.left) / (extent.right - extent.left);
    let fy = (y - extent.top) / (extent.bottom - extent.top);
    if !(0.0..1.0).contains(&fx) || !(0.0..1.0).contains(&fy) {
        return None;
    }
    let col = ((fx * cols as f64) as usize).min(cols.saturating_sub(1));
    let row = ((fy * rows as f64) as usize).min(rows.saturating_sub(1));
    Some((row, col))
}

/// Draw `spec` into `slot`, returning the panel view and its color link.
pub fn plot_panel(
    canvas: &mut FrameCanvas,
    slot: PixelRect,
    spec: &PanelSpec<'_>,
) -> (PanelView, ColorLink) {
    let view = PanelView::new(slot, spec.extent, spec.axes);
    let field = spec.field;

    if field.rows > 0 && field.cols > 0 {
        let (x0, y0, x1, y1) = canvas.pixel_span(view.rect);
        for py in y0..y1 {
            for px in x0..x1 {
                let (x, y) = view.pixel_to_data(px as f64 + 0.5, py as f64 + 0.5);
                let Some((row, col)) = cell_at(&spec.extent, field.rows, field.cols, x, y) else {
                    continue;
                };
                let v = f64::from(field.get(row, col));
                let rgba = spec.cmap.map_value(v * spec.scale, &spec.limits);
                canvas.put(px, py, rgba);
            }
        }
    }

    let overlay = canvas.overlay();
    overlay.outline(view.rect, 1.0);
    let (ax, ay) = spec.axes.label_anchor();
    let (lx, ly) = view.data_to_pixel(ax, ay);
    overlay.text(lx, ly, spec.label, LABEL_FONT_PX, Anchor::Start);

    let link = ColorLink {
        cmap: spec.cmap.clone(),
        limits: spec.limits,
    };
    (view, link)
}

#[cfg(test)]
#[path = "../../tests/unit/render/panel.rs"]
mod tests;
