//! Per-field movie production: select times, render frames, encode.

use crate::config::{Config, FieldConfig, validate_field};
use crate::dataset::loader::DatasetLoader;
use crate::dataset::model::ModelSet;
use crate::encode::ffmpeg::{MovieEncoder, frames_to_movie};
use crate::foundation::error::{MovieError, MovieResult};
use crate::render::compose::{FrameOutcome, FrameRequest, render_frame};
use crate::timeline::{TimeSample, select_frames};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Which parts of the pipeline to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Stages {
    /// Render missing frames, then encode.
    #[default]
    All,
    /// Render missing frames only.
    FramesOnly,
    /// Encode existing frames only.
    EncodeOnly,
}

impl Stages {
    fn renders(self) -> bool {
        matches!(self, Stages::All | Stages::FramesOnly)
    }

    fn encodes(self) -> bool {
        matches!(self, Stages::All | Stages::EncodeOnly)
    }
}

/// Frames written vs. found on disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCounts {
    /// Newly rendered frames.
    pub written: usize,
    /// Frames that already existed.
    pub skipped: usize,
}

/// What happened for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieSummary {
    /// Field name.
    pub field: String,
    /// Frame counts (zero when frames were not rendered).
    pub frames: FrameCounts,
    /// Movies written, in extension order.
    pub movies: Vec<PathBuf>,
}

/// Render and encode every field listed in `movies.fields`.
pub fn plot_movies(
    cfg: &Config,
    loader: &dyn DatasetLoader,
    encoder: &dyn MovieEncoder,
) -> MovieResult<Vec<MovieSummary>> {
    run_movies(cfg, &cfg.movies.fields, Stages::All, loader, encoder)
}

/// Run `stages` for each of `fields` in order, stopping at the first error.
pub fn run_movies(
    cfg: &Config,
    fields: &[String],
    stages: Stages,
    loader: &dyn DatasetLoader,
    encoder: &dyn MovieEncoder,
) -> MovieResult<Vec<MovieSummary>> {
    crate::colormap::install();

    // Check every requested field up front so a bad one fails before any output is produced.
    for field in fields {
        validate_field(field, cfg.field(field)?)?;
    }

    fields
        .iter()
        .map(|field| plot_movie(cfg, field, stages, loader, encoder))
        .collect()
}

/// Produce the movie(s) for one field.
#[tracing::instrument(skip(cfg, loader, encoder), fields(experiment = %cfg.experiment.name))]
pub fn plot_movie(
    cfg: &Config,
    field: &str,
    stages: Stages,
    loader: &dyn DatasetLoader,
    encoder: &dyn MovieEncoder,
) -> MovieResult<MovieSummary> {
    let field_cfg = cfg.field(field)?;
    let mut summary = MovieSummary {
        field: field.to_owned(),
        frames: FrameCounts::default(),
        movies: Vec::new(),
    };

    if stages.renders() {
        let models = loader.load(&[field])?;
        let samples = select_frames(cfg.movies.start_year, cfg.movies.end_year, models.max_time)?;
        if samples.is_empty() {
            tracing::debug!(
                start_year = cfg.movies.start_year,
                end_year = cfg.movies.end_year,
                "no reference times in the requested window"
            );
        }
        summary.frames = render_frames(cfg, field, field_cfg, &models, &samples)?;
    }

    if stages.encodes() {
        summary.movies = frames_to_movie(cfg, field, encoder)?;
    }

    tracing::info!(
        written = summary.frames.written,
        skipped = summary.frames.skipped,
        movies = summary.movies.len(),
        "field done"
    );
    Ok(summary)
}

/// Render every sample of `field`, skipping frames already on disk.
pub fn render_frames(
    cfg: &Config,
    field: &str,
    field_cfg: &FieldConfig,
    models: &ModelSet,
    samples: &[TimeSample],
) -> MovieResult<FrameCounts> {
    let bar = ProgressBar::new(samples.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} {percent:>3}% [{bar:40}] {pos}/{len} [{eta}]")
            .map_err(|e| MovieError::render(format!("progress bar template: {e}")))?
            .progress_chars("#>-"),
    );
    bar.set_message(field.to_owned());

    let mut counts = FrameCounts::default();
    for &sample in samples {
        let req = FrameRequest {
            field_name: field,
            field: field_cfg,
            s_per_yr: cfg.constants.s_per_yr,
            frames_folder: &cfg.movies.frames_folder,
            sample,
        };
        match render_frame(&req, models)? {
            FrameOutcome::Written(_) => counts.written += 1,
            FrameOutcome::Skipped(_) => counts.skipped += 1,
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    Ok(counts)
}

#[cfg(test)]
#[path = "../tests/unit/movie.rs"]
mod tests;
