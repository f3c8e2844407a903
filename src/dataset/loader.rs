use crate::config::Config;
use crate::dataset::model::{Dataset, FieldVar, ModelSet, NamedDataset};
use crate::foundation::error::{MovieError, MovieResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Source of model output for a set of variables.
pub trait DatasetLoader {
    /// Load every model with at least the requested variables.
    fn load(&self, variables: &[&str]) -> MovieResult<ModelSet>;
}

/// Loader that hands out a prebuilt [`ModelSet`]. Useful for tests and embedding.
#[derive(Clone, Debug)]
pub struct InMemoryLoader {
    set: ModelSet,
}

impl InMemoryLoader {
    /// Wrap a model set.
    pub fn new(set: ModelSet) -> Self {
        Self { set }
    }
}

impl DatasetLoader for InMemoryLoader {
    fn load(&self, variables: &[&str]) -> MovieResult<ModelSet> {
        for m in &self.set.models {
            if let Some(missing) = variables.iter().find(|v| m.dataset.field(v).is_none()) {
                return Err(MovieError::validation(format!(
                    "model '{}' has no field '{missing}'",
                    m.name
                )));
            }
        }
        Ok(self.set.clone())
    }
}

/// Loads `<folder>/<model>.json` for each configured model.
#[derive(Clone, Debug)]
pub struct JsonDatasetLoader {
    folder: PathBuf,
    names: Vec<String>,
}

impl JsonDatasetLoader {
    /// Loader over an explicit folder and model list.
    pub fn new(folder: impl Into<PathBuf>, names: Vec<String>) -> Self {
        Self {
            folder: folder.into(),
            names,
        }
    }

    /// Loader for the `models` section of a configuration.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.models.folder.clone(), cfg.models.names.clone())
    }

    /// Path of a model's dataset file.
    pub fn model_path(&self, name: &str) -> PathBuf {
        self.folder.join(format!("{name}.json"))
    }

    fn load_model(&self, name: &str, variables: &[&str]) -> MovieResult<Dataset> {
        let path = self.model_path(name);
        read_dataset_path(&path, variables)
            .map_err(|e| MovieError::validation(format!("model '{name}': {e}")))
    }
}

impl DatasetLoader for JsonDatasetLoader {
    #[tracing::instrument(skip(self))]
    fn load(&self, variables: &[&str]) -> MovieResult<ModelSet> {
        let mut models = Vec::with_capacity(self.names.len());
        for name in &self.names {
            let dataset = self.load_model(name, variables)?;
            tracing::debug!(model = %name, n_time = dataset.time.len(), "loaded dataset");
            models.push(NamedDataset {
                name: name.clone(),
                dataset,
            });
        }
        ModelSet::new(models)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetFile {
    time: Vec<Option<f64>>,
    #[serde(default)]
    x: Option<Vec<Option<f64>>>,
    #[serde(default)]
    y: Option<Vec<Option<f64>>>,
    #[serde(default)]
    z: Option<Vec<Option<f64>>>,
    fields: BTreeMap<String, FieldFile>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldFile {
    shape: [usize; 3],
    data: Vec<Option<f32>>,
}

fn nan_filled_f64(v: Vec<Option<f64>>) -> Vec<f64> {
    v.into_iter().map(|x| x.unwrap_or(f64::NAN)).collect()
}

/// Parse a JSON dataset, keeping only `variables`. `null` entries become `NaN`.
pub fn read_dataset_json<R: std::io::Read>(r: R, variables: &[&str]) -> MovieResult<Dataset> {
    let file: DatasetFile = serde_json::from_reader(r)
        .map_err(|e| MovieError::validation(format!("parse dataset JSON: {e}")))?;

    let time = nan_filled_f64(file.time);
    let mut fields = BTreeMap::new();
    let mut source = file.fields;
    for &var in variables {
        let f = source
            .remove(var)
            .ok_or_else(|| MovieError::validation(format!("dataset has no field '{var}'")))?;
        let [n_time, rows, cols] = f.shape;
        if n_time != time.len() {
            return Err(MovieError::validation(format!(
                "field '{var}' has {n_time} time slices but the time coordinate has {}",
                time.len()
            )));
        }
        let data = f.data.into_iter().map(|v| v.unwrap_or(f32::NAN)).collect();
        fields.insert(var.to_owned(), FieldVar::new(n_time, rows, cols, data)?);
    }

    Ok(Dataset {
        time,
        x: file.x.map(nan_filled_f64),
        y: file.y.map(nan_filled_f64),
        z: file.z.map(nan_filled_f64),
        fields,
    })
}

/// Parse a JSON dataset file.
pub fn read_dataset_path(path: &Path, variables: &[&str]) -> MovieResult<Dataset> {
    let f = File::open(path).map_err(|e| {
        MovieError::validation(format!("open dataset '{}': {e}", path.display()))
    })?;
    read_dataset_json(BufReader::new(f), variables)
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/loader.rs"]
mod tests;
