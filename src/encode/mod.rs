//! Movie encoding from rendered frames.
//!
//! Encoders consume a frame-file pattern and write one movie per job.

/// `ffmpeg`-based encoder and the per-field assembly loop.
pub mod ffmpeg;
