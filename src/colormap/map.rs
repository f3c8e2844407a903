use crate::foundation::core::Limits;
use crate::foundation::math::{interp, linspace};

/// Light gray used wherever data is missing.
pub const BAD_COLOR: [f64; 3] = [0.9, 0.9, 0.9];

/// A named lookup-table color scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    name: String,
    lut: Vec<[f64; 3]>,
    bad: [f64; 3],
}

impl Colormap {
    /// `n` colors interpolated linearly between `colors`, which are spaced evenly over `[0, 1]`.
    pub fn from_list(name: impl Into<String>, colors: &[[f64; 3]], n: usize) -> Self {
        let positions = linspace(0.0, 1.0, colors.len());
        let anchors: Vec<(f64, [f64; 3])> =
            positions.into_iter().zip(colors.iter().copied()).collect();
        Self::from_anchors(name, &anchors, n)
    }

    /// `n` colors interpolated per channel between `(position, rgb)` anchors, with the
    /// light-gray bad color.
    pub fn from_anchors(name: impl Into<String>, anchors: &[(f64, [f64; 3])], n: usize) -> Self {
        let xp: Vec<f64> = anchors.iter().map(|a| a.0).collect();
        let channels: [Vec<f64>; 3] =
            std::array::from_fn(|c| anchors.iter().map(|a| a.1[c]).collect());

        let lut = linspace(0.0, 1.0, n.max(1))
            .into_iter()
            .map(|x| std::array::from_fn(|c| interp(x, &xp, &channels[c]).clamp(0.0, 1.0)))
            .collect();

        Self {
            name: name.into(),
            lut,
            bad: BAD_COLOR,
        }
    }

    /// Colors in reverse order under a new name.
    pub fn reversed(&self, name: impl Into<String>) -> Self {
        let mut lut = self.lut.clone();
        lut.reverse();
        Self {
            name: name.into(),
            lut,
            bad: self.bad,
        }
    }

    /// Registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of lookup-table entries.
    pub fn len(&self) -> usize {
        self.lut.len()
    }

    /// `true` for an empty table (never produced by the constructors).
    pub fn is_empty(&self) -> bool {
        self.lut.is_empty()
    }

    /// Table color for a normalized position; out-of-range values clamp, `NaN` gives the bad color.
    pub fn sample(&self, t: f64) -> [f64; 3] {
        if t.is_nan() || self.lut.is_empty() {
            return self.bad;
        }
        let n = self.lut.len();
        let idx = if t <= 0.0 {
            0
        } else {
            ((t * n as f64) as usize).min(n - 1)
        };
        self.lut[idx]
    }

    /// Samples at evenly spaced positions over `[start, stop]`.
    pub fn sample_range(&self, start: f64, stop: f64, n: usize) -> Vec<[f64; 3]> {
        linspace(start, stop, n)
            .into_iter()
            .map(|t| self.sample(t))
            .collect()
    }

    /// Opaque RGBA8 for a normalized position.
    pub fn rgba8(&self, t: f64) -> [u8; 4] {
        to_rgba8(self.sample(t))
    }

    /// Opaque RGBA8 for a data value; non-finite values use the bad color.
    pub fn map_value(&self, v: f64, limits: &Limits) -> [u8; 4] {
        if !v.is_finite() {
            return to_rgba8(self.bad);
        }
        self.rgba8(limits.normalize(v))
    }

    /// Missing-data color as RGBA8.
    pub fn bad_rgba8(&self) -> [u8; 4] {
        to_rgba8(self.bad)
    }
}

fn to_rgba8(rgb: [f64; 3]) -> [u8; 4] {
    let c = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [c(rgb[0]), c(rgb[1]), c(rgb[2]), 255]
}

#[cfg(test)]
#[path = "../../tests/unit/colormap/map.rs"]
mod tests;
