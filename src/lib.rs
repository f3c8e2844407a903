//! fieldmovie renders time-evolving 2D fields from several model runs as side-by-side
//! comparison frames and assembles them into movies with `ffmpeg`.
//!
//! The pipeline is batch and synchronous:
//!
//! - Load and validate a [`Config`]
//! - Load model output through a [`DatasetLoader`]
//! - Render one PNG per reference month ([`render_frame`]), skipping frames already on disk
//! - Encode the frames once per configured extension through a [`MovieEncoder`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Named color scales.
pub mod colormap;
/// Typed run configuration.
pub mod config;
/// Model output and loaders.
pub mod dataset;
/// Movie encoding.
pub mod encode;
/// Shared types, helpers and errors.
pub mod foundation;
/// Per-field orchestration.
pub mod movie;
/// Frame rendering.
pub mod render;
/// Reference calendar and time selection.
pub mod timeline;

pub use crate::config::{Config, FieldConfig};
pub use crate::dataset::loader::{DatasetLoader, InMemoryLoader, JsonDatasetLoader};
pub use crate::dataset::model::{Dataset, FieldVar, ModelSet, NamedDataset};
pub use crate::encode::ffmpeg::{FfmpegEncoder, MovieEncoder, MovieJob, RecordingEncoder};
pub use crate::foundation::core::AxisPair;
pub use crate::foundation::error::{MovieError, MovieResult};
pub use crate::movie::{FrameCounts, MovieSummary, Stages, plot_movie, plot_movies, run_movies};
pub use crate::render::compose::{FrameOutcome, FrameRequest, frame_path, render_frame};
pub use crate::timeline::{TimeSample, select_frames};
