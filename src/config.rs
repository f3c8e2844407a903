//! Typed run configuration.
//!
//! The configuration is a JSON document deserialized with `serde` and validated once at load
//! time, so the rest of the crate never looks options up by string.

use crate::foundation::core::{AxisPair, Limits};
use crate::foundation::error::{MovieError, MovieResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Seconds in the fixed 365-day year.
pub const SECONDS_PER_YEAR: f64 = 365.0 * 86_400.0;

/// Colormap used when a field section does not name one.
pub const DEFAULT_COLORMAP: &str = "ferret";

/// Complete, validated configuration for one run.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Experiment metadata.
    pub experiment: ExperimentConfig,
    /// Physical constants.
    #[serde(default)]
    pub constants: ConstantsConfig,
    /// Which model outputs to load.
    pub models: ModelsConfig,
    /// Movie selection and output folders.
    pub movies: MoviesConfig,
    /// External encoder invocation.
    pub ffmpeg: FfmpegConfig,
    /// Per-field plotting options, keyed by field name.
    pub fields: BTreeMap<String, FieldConfig>,
}

/// `experiment` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Experiment name, used as the movie file prefix.
    pub name: String,
}

/// `constants` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstantsConfig {
    /// Seconds per year used for the year label on each panel.
    #[serde(rename = "sPerYr", default = "default_s_per_yr")]
    pub s_per_yr: f64,
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            s_per_yr: default_s_per_yr(),
        }
    }
}

/// `models` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelsConfig {
    /// Folder holding one dataset file per model.
    pub folder: PathBuf,
    /// Model names, in panel order.
    pub names: Vec<String>,
}

/// `movies` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct MoviesConfig {
    /// Fields to turn into movies.
    pub fields: Vec<String>,
    /// First year to render.
    pub start_year: f64,
    /// Last year to render (inclusive).
    pub end_year: f64,
    /// Root folder for PNG frames.
    pub frames_folder: PathBuf,
    /// Folder for finished movies.
    pub folder: PathBuf,
}

/// `ffmpeg` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FfmpegConfig {
    /// Encoder executable.
    #[serde(default = "default_executable")]
    pub executable: String,
    /// Arguments placed before `-i <frames>`.
    #[serde(default)]
    pub input: Vec<String>,
    /// Arguments placed after `-i <frames>` and before the output path.
    #[serde(default)]
    pub output: Vec<String>,
    /// One movie is written per extension.
    pub extensions: Vec<String>,
}

/// Per-field section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    /// Plotted axis pair.
    pub axes: AxisPair,
    /// Figure title.
    pub title: String,
    /// Factor applied to the raw field before color mapping.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// `[lower, upper]` color limits (after scaling).
    pub limits: [f64; 2],
    /// Colormap name.
    #[serde(default = "default_cmap")]
    pub cmap: String,
}

impl FieldConfig {
    /// Color limits as a [`Limits`] value.
    pub fn limits(&self) -> Limits {
        Limits {
            lower: self.limits[0],
            upper: self.limits[1],
        }
    }
}

fn default_s_per_yr() -> f64 {
    SECONDS_PER_YEAR
}

fn default_executable() -> String {
    "ffmpeg".to_owned()
}

fn default_scale() -> f64 {
    1.0
}

fn default_cmap() -> String {
    DEFAULT_COLORMAP.to_owned()
}

impl Config {
    /// Parse and validate a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> MovieResult<Self> {
        let cfg: Config = serde_json::from_reader(r)
            .map_err(|e| MovieError::validation(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> MovieResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MovieError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check cross-section consistency.
    pub fn validate(&self) -> MovieResult<()> {
        if self.experiment.name.trim().is_empty() {
            return Err(MovieError::validation("experiment.name must not be empty"));
        }
        let s = self.constants.s_per_yr;
        if !s.is_finite() || s <= 0.0 {
            return Err(MovieError::validation(
                "constants.sPerYr must be finite and positive",
            ));
        }

        let m = &self.movies;
        if !m.start_year.is_finite() || !m.end_year.is_finite() {
            return Err(MovieError::validation(
                "movies.startYear and movies.endYear must be finite",
            ));
        }
        if m.start_year > m.end_year {
            return Err(MovieError::validation(format!(
                "movies.startYear ({}) must be <= movies.endYear ({})",
                m.start_year, m.end_year
            )));
        }

        for name in &m.fields {
            let field = self.fields.get(name).ok_or_else(|| {
                MovieError::validation(format!("movie field '{name}' has no section in 'fields'"))
            })?;
            validate_field(name, field)?;
        }

        if self.ffmpeg.executable.trim().is_empty() {
            return Err(MovieError::validation("ffmpeg.executable must not be empty"));
        }
        if self.ffmpeg.extensions.is_empty() {
            return Err(MovieError::validation(
                "ffmpeg.extensions must list at least one extension",
            ));
        }
        for ext in &self.ffmpeg.extensions {
            if ext.is_empty() || ext.contains(['/', '\\']) {
                return Err(MovieError::validation(format!(
                    "invalid movie extension '{ext}'"
                )));
            }
        }

        Ok(())
    }

    /// Options for a field listed in the configuration.
    pub fn field(&self, name: &str) -> MovieResult<&FieldConfig> {
        self.fields
            .get(name)
            .ok_or_else(|| MovieError::validation(format!("no field section for '{name}'")))
    }
}

/// Check one field section: finite scale and limits, registered colormap.
pub(crate) fn validate_field(name: &str, field: &FieldConfig) -> MovieResult<()> {
    if !field.scale.is_finite() {
        return Err(MovieError::validation(format!(
            "fields.{name}.scale must be finite"
        )));
    }
    if field.limits.iter().any(|v| !v.is_finite()) {
        return Err(MovieError::validation(format!(
            "fields.{name}.limits must be finite"
        )));
    }
    if crate::colormap::get(&field.cmap).is_none() {
        return Err(MovieError::validation(format!(
            "fields.{name}.cmap '{}' is not a registered colormap",
            field.cmap
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
