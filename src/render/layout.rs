//! Figure geometry: grid shape, slot placement and colorbar position.
//!
//! Geometry is expressed in figure pixels at [`DPI`] with y growing downwards; physical row 0
//! is the top row.

use crate::foundation::core::{AxisPair, PixelRect};
use crate::foundation::error::{MovieError, MovieResult};

/// Pixels per inch.
pub const DPI: f64 = 100.0;
/// Figure width in inches.
pub const FIGURE_WIDTH_IN: f64 = 16.0;

const PLOT_LEFT: f64 = 0.06;
const PLOT_RIGHT: f64 = 0.91;
const PLOT_BOTTOM_PX: f64 = 48.0;
const COLUMN_GAP_PX: f64 = 20.0;
const ROW_GAP_PX: f64 = 30.0;
const COLORBAR_LEFT: f64 = 0.92;
const COLORBAR_WIDTH: f64 = 0.02;

/// One position in the panel grid, in drawing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelSlot {
    /// Physical row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
    /// Model drawn here, `None` for a trailing empty slot.
    pub model: Option<usize>,
}

/// Map drawing order to grid slots.
///
/// Slot `p` sits in physical row `rows - 1 - p / columns` and column `p % columns`, so the
/// bottom row is visited first. Models keep reading order (`row * columns + col`), which puts
/// the empty slots at the end of the bottom row.
pub fn grid_slots(rows: usize, columns: usize, model_count: usize) -> Vec<PanelSlot> {
    (0..rows * columns)
        .map(|p| {
            let row = rows - 1 - p / columns;
            let col = p % columns;
            let model = row * columns + col;
            PanelSlot {
                row,
                col,
                model: (model < model_count).then_some(model),
            }
        })
        .collect()
}

/// Grid shape and figure geometry for one field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    /// Plotted axis pair.
    pub axes: AxisPair,
    /// Number of models.
    pub model_count: usize,
    /// Number of panel columns.
    pub columns: usize,
    /// Number of panel rows.
    pub rows: usize,
}

impl GridLayout {
    /// Grid for `model_count` panels.
    pub fn new(axes: AxisPair, model_count: usize) -> MovieResult<Self> {
        if model_count == 0 {
            return Err(MovieError::render("cannot lay out a frame with no models"));
        }
        let columns = axes.max_columns().min(model_count);
        let rows = model_count.div_ceil(columns);
        Ok(Self {
            axes,
            model_count,
            columns,
            rows,
        })
    }

    /// Slots in drawing order.
    pub fn slots(&self) -> Vec<PanelSlot> {
        grid_slots(self.rows, self.columns, self.model_count)
    }

    /// Figure size in pixels; the height is rounded to an even number for yuv420p encoding.
    pub fn figure_size(&self) -> (u32, u32) {
        let height_in = 0.5 + self.axes.row_scale() * (self.rows as f64 + 0.5);
        let width = (FIGURE_WIDTH_IN * DPI).round() as u32;
        let height = ((height_in * DPI / 2.0).round() as u32) * 2;
        (width, height)
    }

    /// Fraction of the figure height above which nothing but titles is drawn.
    pub fn plot_top_fraction(&self) -> f64 {
        if self.rows == 1 { 0.85 } else { 0.9 }
    }

    fn plot_area(&self) -> PixelRect {
        let (w, h) = self.figure_size();
        let (w, h) = (f64::from(w), f64::from(h));
        PixelRect {
            x0: PLOT_LEFT * w,
            y0: (1.0 - self.plot_top_fraction()) * h,
            x1: PLOT_RIGHT * w,
            y1: h - PLOT_BOTTOM_PX,
        }
    }

    /// Rectangle reserved for the panel at `(row, col)`.
    pub fn slot_rect(&self, row: usize, col: usize) -> PixelRect {
        let area = self.plot_area();
        let cols = self.columns as f64;
        let rows = self.rows as f64;
        let slot_w = (area.width() - COLUMN_GAP_PX * (cols - 1.0)) / cols;
        let slot_h = (area.height() - ROW_GAP_PX * (rows - 1.0)) / rows;
        PixelRect::from_origin_size(
            area.x0 + col as f64 * (slot_w + COLUMN_GAP_PX),
            area.y0 + row as f64 * (slot_h + ROW_GAP_PX),
            slot_w,
            slot_h,
        )
    }

    /// Colorbar spanning from the bottom of the bottom row's rightmost slot to the top of the
    /// top row's rightmost slot.
    pub fn colorbar_rect(&self) -> PixelRect {
        let (w, _) = self.figure_size();
        let w = f64::from(w);
        let top = self.slot_rect(0, self.columns - 1);
        let bottom = self.slot_rect(self.rows - 1, self.columns - 1);
        PixelRect {
            x0: COLORBAR_LEFT * w,
            y0: top.y0,
            x1: (COLORBAR_LEFT + COLORBAR_WIDTH) * w,
            y1: bottom.y1,
        }
    }

    /// `true` for the single-row layout that thins colorbar labels.
    pub fn is_single_row(&self) -> bool {
        self.rows == 1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
