//! One comparison frame: every model's panel in a grid, a shared colorbar and a title.

use crate::config::FieldConfig;
use crate::dataset::model::{Dataset, ModelSet};
use crate::foundation::core::{AxisPair, Coord, Extent};
use crate::foundation::error::{MovieError, MovieResult};
use crate::render::canvas::FrameCanvas;
use crate::render::layout::{DPI, GridLayout, PanelSlot};
use crate::render::overlay::{Anchor, SvgOverlay};
use crate::render::panel::{ColorLink, PanelSpec, PanelView, plot_panel};
use crate::render::ticks::labelled_ticks;
use crate::timeline::{TimeSample, nearest_time_index};
use std::path::{Path, PathBuf};

const TICK_FONT_PX: f64 = 10.0 * DPI / 72.0;
const TITLE_FONT_PX: f64 = 14.4 * DPI / 72.0;
const TICK_LEN_PX: f64 = 3.5;
const TICK_PAD_PX: f64 = 3.5;
const LABEL_PAD_PX: f64 = 4.0;
const AXIS_LINE_PX: f64 = 0.8;

/// Path of the frame for `field` at reference-axis position `index`.
pub fn frame_path(frames_folder: &Path, field: &str, index: usize) -> PathBuf {
    frames_folder
        .join(field)
        .join(format!("{field}_{index:04}.png"))
}

/// `ffmpeg` input pattern matching every frame of `field`.
pub fn frame_pattern(frames_folder: &Path, field: &str) -> PathBuf {
    frames_folder.join(field).join(format!("{field}_%04d.png"))
}

/// Result of a frame request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame was rendered and written.
    Written(PathBuf),
    /// The frame already existed and was left untouched.
    Skipped(PathBuf),
}

impl FrameOutcome {
    /// Frame path in either case.
    pub fn path(&self) -> &Path {
        match self {
            FrameOutcome::Written(p) | FrameOutcome::Skipped(p) => p,
        }
    }
}

/// Everything that identifies and styles one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameRequest<'a> {
    /// Field name, used for the data lookup and the output path.
    pub field_name: &'a str,
    /// Plotting options of the field.
    pub field: &'a FieldConfig,
    /// Seconds per year for the panel labels.
    pub s_per_yr: f64,
    /// Root of the frames tree.
    pub frames_folder: &'a Path,
    /// Reference time and its frame number.
    pub sample: TimeSample,
}

impl FrameRequest<'_> {
    /// Output path of this frame.
    pub fn path(&self) -> PathBuf {
        frame_path(self.frames_folder, self.field_name, self.sample.index)
    }
}

/// Image extent of a model in plotted units.
///
/// Horizontal coordinates are converted to km, `z` stays in m. Plan views swap the vertical
/// bounds (`bottom = max`, `top = min`).
pub fn panel_extent(dataset: &Dataset, axes: AxisPair) -> MovieResult<Extent> {
    let range = |c: Coord| {
        dataset.plot_range(c).ok_or_else(|| {
            MovieError::render(format!(
                "dataset has no finite '{}' coordinate for {axes} panels",
                c.name()
            ))
        })
    };
    let (h, v) = axes.coords();
    let (left, right) = range(h)?;
    let (lo, hi) = range(v)?;

    let (bottom, top) = if axes == AxisPair::Xy {
        (hi, lo)
    } else {
        (lo, hi)
    };
    Ok(Extent {
        left,
        right,
        bottom,
        top,
    })
}

/// Render the frame described by `req`, or skip it if it is already on disk.
pub fn render_frame(req: &FrameRequest<'_>, models: &ModelSet) -> MovieResult<FrameOutcome> {
    use anyhow::Context as _;

    let dir = req.frames_folder.join(req.field_name);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create frames directory '{}'", dir.display()))?;

    let path = req.path();
    if path.exists() {
        tracing::debug!(path = %path.display(), "frame exists, skipping");
        return Ok(FrameOutcome::Skipped(path));
    }

    let axes = req.field.axes;
    let layout = GridLayout::new(axes, models.len())?;
    let cmap = crate::colormap::get(&req.field.cmap).ok_or_else(|| {
        MovieError::validation(format!("unknown colormap '{}'", req.field.cmap))
    })?;
    let limits = req.field.limits();

    let (width, height) = layout.figure_size();
    let mut canvas = FrameCanvas::new(width, height);
    let mut links = Vec::new();

    for slot in layout.slots() {
        let Some(model_index) = slot.model else {
            continue;
        };
        let model = &models.models[model_index];
        let ds = &model.dataset;

        let var = ds.field(req.field_name).ok_or_else(|| {
            MovieError::render(format!(
                "model '{}' has no field '{}'",
                model.name, req.field_name
            ))
        })?;
        let t = nearest_time_index(&ds.time, req.sample.time).ok_or_else(|| {
            MovieError::render(format!("model '{}' has no finite time", model.name))
        })?;
        let slice = var.slice(t).ok_or_else(|| {
            MovieError::render(format!(
                "model '{}': time index {t} outside field '{}'",
                model.name, req.field_name
            ))
        })?;

        let label = format!("{:.2} a", ds.time[t] / req.s_per_yr);
        let spec = PanelSpec {
            field: slice,
            label: &label,
            scale: req.field.scale,
            limits,
            extent: panel_extent(ds, axes)?,
            axes,
            cmap: cmap.clone(),
        };
        let (view, link) = plot_panel(&mut canvas, layout.slot_rect(slot.row, slot.col), &spec);
        decorate_axes(canvas.overlay(), &view, &layout, slot, &model.name);

        if slot.col == layout.columns - 1 {
            links.push(link);
        }
    }

    let link = links.pop().unwrap_or(ColorLink { cmap, limits });
    draw_colorbar(&mut canvas, &layout, &link);

    canvas.overlay().text(
        f64::from(width) / 2.0,
        0.02 * f64::from(height) + TITLE_FONT_PX,
        &req.field.title,
        TITLE_FONT_PX,
        Anchor::Middle,
    );

    canvas.save_png(&path)?;
    tracing::debug!(path = %path.display(), "frame written");
    Ok(FrameOutcome::Written(path))
}

/// Rough upper bound on tick intervals for an axis `len_px` long.
fn tick_bins(len_px: f64) -> usize {
    ((len_px / 60.0) as usize).clamp(2, 9)
}

/// First-column y labels: every other one, starting with the first, stays hidden.
fn shows_y_label(i: usize) -> bool {
    i % 2 == 1
}

/// One-row layouts hide every other colorbar label, starting with the second.
fn shows_colorbar_label(i: usize, single_row: bool) -> bool {
    !single_row || i % 2 == 0
}

fn text_width(s: &str, size_px: f64) -> f64 {
    s.chars().count() as f64 * 0.6 * size_px
}

fn decorate_axes(
    overlay: &mut SvgOverlay,
    view: &PanelView,
    layout: &GridLayout,
    slot: PanelSlot,
    title: &str,
) {
    let rect = view.rect;
    let (x_coord, y_coord) = layout.axes.coords();

    overlay.text(
        (rect.x0 + rect.x1) / 2.0,
        rect.y0 - 6.0,
        title,
        TITLE_FONT_PX,
        Anchor::Middle,
    );

    let bottom_row = slot.row == layout.rows - 1;
    for (v, label) in labelled_ticks(view.xlim.0, view.xlim.1, tick_bins(rect.width())) {
        let (px, _) = view.data_to_pixel(v, view.ylim.0);
        overlay.line(px, rect.y1, px, rect.y1 + TICK_LEN_PX, AXIS_LINE_PX);
        if bottom_row {
            overlay.text(
                px,
                rect.y1 + TICK_LEN_PX + TICK_PAD_PX + TICK_FONT_PX,
                &label,
                TICK_FONT_PX,
                Anchor::Middle,
            );
        }
    }
    if bottom_row {
        overlay.text(
            (rect.x0 + rect.x1) / 2.0,
            rect.y1 + TICK_LEN_PX + TICK_PAD_PX + 2.0 * TICK_FONT_PX + LABEL_PAD_PX,
            x_coord.axis_label(),
            TICK_FONT_PX,
            Anchor::Middle,
        );
    }

    let first_col = slot.col == 0;
    let mut widest: f64 = 0.0;
    for (i, (v, label)) in labelled_ticks(view.ylim.0, view.ylim.1, tick_bins(rect.height()))
        .into_iter()
        .enumerate()
    {
        let (_, py) = view.data_to_pixel(view.xlim.0, v);
        overlay.line(rect.x0 - TICK_LEN_PX, py, rect.x0, py, AXIS_LINE_PX);
        if first_col && shows_y_label(i) {
            widest = widest.max(text_width(&label, TICK_FONT_PX));
            overlay.text_centered_v(
                rect.x0 - TICK_LEN_PX - TICK_PAD_PX,
                py,
                &label,
                TICK_FONT_PX,
                Anchor::End,
            );
        }
    }
    if first_col {
        overlay.text_vertical(
            rect.x0 - TICK_LEN_PX - TICK_PAD_PX - widest - LABEL_PAD_PX - 0.5 * TICK_FONT_PX,
            (rect.y0 + rect.y1) / 2.0,
            y_coord.axis_label(),
            TICK_FONT_PX,
        );
    }
}

fn draw_colorbar(canvas: &mut FrameCanvas, layout: &GridLayout, link: &ColorLink) {
    let rect = layout.colorbar_rect();
    let (x0, y0, x1, y1) = canvas.pixel_span(rect);
    for py in y0..y1 {
        let t = (rect.y1 - (py as f64 + 0.5)) / rect.height();
        let rgba = link.cmap.rgba8(t.clamp(0.0, 1.0));
        for px in x0..x1 {
            canvas.put(px, py, rgba);
        }
    }

    let overlay = canvas.overlay();
    overlay.outline(rect, AXIS_LINE_PX);

    let single_row = layout.is_single_row();
    let (lower, upper) = (link.limits.lower, link.limits.upper);
    for (i, (v, label)) in labelled_ticks(lower, upper, tick_bins(rect.height()))
        .into_iter()
        .enumerate()
    {
        let py = rect.y1 - link.limits.normalize(v) * rect.height();
        overlay.line(rect.x1, py, rect.x1 + TICK_LEN_PX, py, AXIS_LINE_PX);
        if !shows_colorbar_label(i, single_row) {
            continue;
        }
        overlay.text_centered_v(
            rect.x1 + TICK_LEN_PX + TICK_PAD_PX,
            py,
            &label,
            TICK_FONT_PX,
            Anchor::Start,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
