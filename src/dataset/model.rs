use crate::foundation::core::Coord;
use crate::foundation::error::{MovieError, MovieResult};
use crate::foundation::math::finite_min_max;
use std::collections::BTreeMap;

/// Output of one model run: a time coordinate, spatial coordinates and named fields.
///
/// Times are seconds since the start of the simulation and may contain non-finite entries.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    /// Time coordinate in seconds.
    pub time: Vec<f64>,
    /// `x` coordinate in metres.
    pub x: Option<Vec<f64>>,
    /// `y` coordinate in metres.
    pub y: Option<Vec<f64>>,
    /// `z` coordinate in metres.
    pub z: Option<Vec<f64>>,
    /// Fields keyed by name.
    pub fields: BTreeMap<String, FieldVar>,
}

impl Dataset {
    /// Borrow a spatial coordinate.
    pub fn coord(&self, c: Coord) -> Option<&[f64]> {
        match c {
            Coord::X => self.x.as_deref(),
            Coord::Y => self.y.as_deref(),
            Coord::Z => self.z.as_deref(),
        }
    }

    /// Borrow a field.
    pub fn field(&self, name: &str) -> Option<&FieldVar> {
        self.fields.get(name)
    }

    /// Largest finite time.
    pub fn max_time(&self) -> Option<f64> {
        finite_min_max(&self.time).map(|(_, hi)| hi)
    }

    /// `(min, max)` of a coordinate in plotted units (km for x/y, m for z).
    pub fn plot_range(&self, c: Coord) -> Option<(f64, f64)> {
        let values = self.coord(c)?;
        let (lo, hi) = finite_min_max(values)?;
        Some((lo * c.plot_scale(), hi * c.plot_scale()))
    }
}

/// A field shaped `[n_time, rows, cols]`, row-major, `NaN` where missing.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldVar {
    n_time: usize,
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl FieldVar {
    /// Wrap flat data, checking it matches the shape.
    pub fn new(n_time: usize, rows: usize, cols: usize, data: Vec<f32>) -> MovieResult<Self> {
        let expected = n_time
            .checked_mul(rows)
            .and_then(|v| v.checked_mul(cols))
            .ok_or_else(|| MovieError::validation("field shape overflows"))?;
        if data.len() != expected {
            return Err(MovieError::validation(format!(
                "field data has {} values, shape [{n_time}, {rows}, {cols}] needs {expected}",
                data.len()
            )));
        }
        Ok(Self {
            n_time,
            rows,
            cols,
            data,
        })
    }

    /// Number of time slices.
    pub fn n_time(&self) -> usize {
        self.n_time
    }

    /// The 2D slice at time index `t`.
    pub fn slice(&self, t: usize) -> Option<FieldSlice<'_>> {
        if t >= self.n_time {
            return None;
        }
        let len = self.rows * self.cols;
        let start = t * len;
        Some(FieldSlice {
            rows: self.rows,
            cols: self.cols,
            values: &self.data[start..start + len],
        })
    }
}

/// Borrowed 2D slice of a field, row-major.
#[derive(Clone, Copy, Debug)]
pub struct FieldSlice<'a> {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// `rows * cols` values.
    pub values: &'a [f32],
}

impl FieldSlice<'_> {
    /// Value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values[row * self.cols + col]
    }
}

/// A dataset tagged with its model name.
#[derive(Clone, Debug)]
pub struct NamedDataset {
    /// Model name, used as the panel title.
    pub name: String,
    /// The model's output.
    pub dataset: Dataset,
}

/// All models loaded for one field, in panel order.
#[derive(Clone, Debug)]
pub struct ModelSet {
    /// Models in panel order.
    pub models: Vec<NamedDataset>,
    /// Largest finite time across all models.
    pub max_time: f64,
}

impl ModelSet {
    /// Collect models and compute the overall maximum time.
    pub fn new(models: Vec<NamedDataset>) -> MovieResult<Self> {
        if models.is_empty() {
            return Err(MovieError::validation("no models to plot"));
        }
        let max_time = models
            .iter()
            .filter_map(|m| m.dataset.max_time())
            .fold(None, |acc: Option<f64>, t| Some(acc.map_or(t, |a| a.max(t))))
            .ok_or_else(|| MovieError::validation("no model has a finite time value"))?;
        Ok(Self { models, max_time })
    }

    /// Number of models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// `true` when there are no models.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/model.rs"]
mod tests;
