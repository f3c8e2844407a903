use crate::config::Config;
use crate::foundation::error::{MovieError, MovieResult};
use crate::render::compose::frame_pattern;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Mutex;

/// One movie to encode from a frame sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieJob {
    /// `printf`-style input pattern, e.g. `frames/temp/temp_%04d.png`.
    pub frames_pattern: PathBuf,
    /// Output movie path; the container follows the extension.
    pub out_path: PathBuf,
}

/// Encoder contract: turn the frames matched by a job's pattern into its output file.
pub trait MovieEncoder {
    /// Encode one movie. Failures are terminal; callers do not retry.
    fn encode(&self, job: &MovieJob) -> MovieResult<()>;
}

/// Encoder that runs an external `ffmpeg` process per movie.
#[derive(Clone, Debug)]
pub struct FfmpegEncoder {
    /// Executable name or path.
    pub executable: String,
    /// Arguments placed before `-i`.
    pub input_args: Vec<String>,
    /// Arguments placed between the input pattern and the output path.
    pub output_args: Vec<String>,
}

impl FfmpegEncoder {
    /// Encoder using the `ffmpeg` section of a configuration.
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            executable: cfg.ffmpeg.executable.clone(),
            input_args: cfg.ffmpeg.input.clone(),
            output_args: cfg.ffmpeg.output.clone(),
        }
    }

    /// Full argument list (without the executable) for `job`.
    pub fn command_args(&self, job: &MovieJob) -> Vec<String> {
        let mut args = Vec::with_capacity(4 + self.input_args.len() + self.output_args.len());
        args.push("-y".to_owned());
        args.extend(self.input_args.iter().cloned());
        args.push("-i".to_owned());
        args.push(job.frames_pattern.to_string_lossy().into_owned());
        args.extend(self.output_args.iter().cloned());
        args.push(job.out_path.to_string_lossy().into_owned());
        args
    }
}

impl MovieEncoder for FfmpegEncoder {
    fn encode(&self, job: &MovieJob) -> MovieResult<()> {
        let out = Command::new(&self.executable)
            .args(self.command_args(job))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                MovieError::encode(format!(
                    "failed to spawn '{}' (is it installed and on PATH?): {e}",
                    self.executable
                ))
            })?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(MovieError::encode(format!(
                "'{}' exited with status {} while writing '{}': {}",
                self.executable,
                out.status,
                job.out_path.display(),
                stderr.trim()
            )));
        }
        Ok(())
    }
}

/// Encoder that only records the jobs it was given.
#[derive(Debug, Default)]
pub struct RecordingEncoder {
    jobs: Mutex<Vec<MovieJob>>,
}

impl RecordingEncoder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Jobs received so far, in order.
    pub fn jobs(&self) -> Vec<MovieJob> {
        self.jobs
            .lock()
            .map(|jobs| jobs.clone())
            .unwrap_or_default()
    }
}

impl MovieEncoder for RecordingEncoder {
    fn encode(&self, job: &MovieJob) -> MovieResult<()> {
        let mut jobs = self
            .jobs
            .lock()
            .map_err(|_| MovieError::encode("recording encoder lock poisoned"))?;
        jobs.push(job.clone());
        Ok(())
    }
}

/// Output path of the movie for `field` in container `extension`.
pub fn movie_path(folder: &Path, experiment: &str, field: &str, extension: &str) -> PathBuf {
    folder.join(format!("{experiment}_{field}.{extension}"))
}

/// Encode the frames of `field` once per configured extension.
///
/// Extensions are processed in order and the first failure aborts the rest.
pub fn frames_to_movie(
    cfg: &Config,
    field: &str,
    encoder: &dyn MovieEncoder,
) -> MovieResult<Vec<PathBuf>> {
    use anyhow::Context as _;

    let folder = &cfg.movies.folder;
    std::fs::create_dir_all(folder)
        .with_context(|| format!("failed to create movie directory '{}'", folder.display()))?;

    let frames_pattern = frame_pattern(&cfg.movies.frames_folder, field);
    let mut written = Vec::with_capacity(cfg.ffmpeg.extensions.len());
    for ext in &cfg.ffmpeg.extensions {
        let job = MovieJob {
            frames_pattern: frames_pattern.clone(),
            out_path: movie_path(folder, &cfg.experiment.name, field, ext),
        };
        encoder.encode(&job)?;
        tracing::info!(path = %job.out_path.display(), "movie written");
        written.push(job.out_path);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
