use crate::foundation::error::{MovieError, MovieResult};
use std::fmt;
use std::str::FromStr;

/// Spatial coordinate of a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Coord {
    /// Horizontal `x`, stored in metres and plotted in kilometres.
    X,
    /// Horizontal `y`, stored in metres and plotted in kilometres.
    Y,
    /// Vertical `z`, stored and plotted in metres.
    Z,
}

impl Coord {
    /// Factor from stored units to plotted units.
    pub fn plot_scale(self) -> f64 {
        match self {
            Coord::X | Coord::Y => 1e-3,
            Coord::Z => 1.0,
        }
    }

    /// Axis label shown next to the panels.
    pub fn axis_label(self) -> &'static str {
        match self {
            Coord::X => "x (km)",
            Coord::Y => "y (km)",
            Coord::Z => "z (m)",
        }
    }

    /// Coordinate name as used in dataset files.
    pub fn name(self) -> &'static str {
        match self {
            Coord::X => "x",
            Coord::Y => "y",
            Coord::Z => "z",
        }
    }
}

/// The two spatial dimensions plotted in a panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisPair {
    /// Plan view.
    Xy,
    /// Vertical section along x.
    Xz,
    /// Vertical section along y.
    Yz,
}

impl AxisPair {
    /// Configuration spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            AxisPair::Xy => "xy",
            AxisPair::Xz => "xz",
            AxisPair::Yz => "yz",
        }
    }

    /// `(horizontal, vertical)` coordinates.
    pub fn coords(self) -> (Coord, Coord) {
        match self {
            AxisPair::Xy => (Coord::X, Coord::Y),
            AxisPair::Xz => (Coord::X, Coord::Z),
            AxisPair::Yz => (Coord::Y, Coord::Z),
        }
    }

    /// Maximum number of panel columns in a frame.
    pub fn max_columns(self) -> usize {
        match self {
            AxisPair::Xy => 3,
            AxisPair::Xz | AxisPair::Yz => 4,
        }
    }

    /// Figure height (inches) contributed by each panel row.
    pub fn row_scale(self) -> f64 {
        match self {
            AxisPair::Xy => 1.2,
            AxisPair::Xz | AxisPair::Yz => 2.0,
        }
    }

    /// Plan views keep 1:1 pixels, sections stretch to fill their slot.
    pub fn keeps_data_aspect(self) -> bool {
        matches!(self, AxisPair::Xy)
    }

    /// Plan views invert the y view limits after the extent swap so that north is up.
    ///
    /// Sections keep the natural limits: their data row 0 sits at the top of the panel.
    pub fn inverts_y_axis(self) -> bool {
        matches!(self, AxisPair::Xy)
    }

    /// Data-space position of the time label.
    pub fn label_anchor(self) -> (f64, f64) {
        match self {
            AxisPair::Xy => (350.0, 60.0),
            AxisPair::Xz => (350.0, -80.0),
            AxisPair::Yz => (30.0, -80.0),
        }
    }
}

impl fmt::Display for AxisPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisPair {
    type Err = MovieError;

    fn from_str(s: &str) -> MovieResult<Self> {
        match s {
            "xy" => Ok(AxisPair::Xy),
            "xz" => Ok(AxisPair::Xz),
            "yz" => Ok(AxisPair::Yz),
            other => Err(MovieError::validation(format!(
                "unknown axes value '{other}' (expected xy, xz or yz)"
            ))),
        }
    }
}

impl<'de> serde::Deserialize<'de> for AxisPair {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Data-space image extent, `(left, right, bottom, top)`.
///
/// Data row 0 is placed at `top` and data column 0 at `left`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Horizontal position of the first column edge.
    pub left: f64,
    /// Horizontal position of the last column edge.
    pub right: f64,
    /// Vertical position of the last row edge.
    pub bottom: f64,
    /// Vertical position of the first row edge.
    pub top: f64,
}

impl Extent {
    /// Absolute data width.
    pub fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }

    /// Absolute data height.
    pub fn height(&self) -> f64 {
        (self.top - self.bottom).abs()
    }
}

/// Color scale bounds `(lower, upper)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    /// Value mapped to the bottom of the colormap.
    pub lower: f64,
    /// Value mapped to the top of the colormap.
    pub upper: f64,
}

impl Limits {
    /// Map `v` into `[0, 1]` (unclipped).
    pub fn normalize(&self, v: f64) -> f64 {
        let span = self.upper - self.lower;
        if span == 0.0 {
            return 0.0;
        }
        (v - self.lower) / span
    }
}

/// Axis-aligned rectangle in figure pixel space (y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    /// Left edge.
    pub x0: f64,
    /// Top edge.
    pub y0: f64,
    /// Right edge.
    pub x1: f64,
    /// Bottom edge.
    pub y1: f64,
}

impl PixelRect {
    /// Build from origin and size.
    pub fn from_origin_size(x0: f64, y0: f64, width: f64, height: f64) -> Self {
        Self {
            x0,
            y0,
            x1: x0 + width,
            y1: y0 + height,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height in pixels.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Largest centred sub-rectangle with `width / height == aspect`.
    pub fn fit_aspect(&self, aspect: f64) -> Self {
        if !aspect.is_finite() || aspect <= 0.0 {
            return *self;
        }
        let (w, h) = (self.width(), self.height());
        if w / h > aspect {
            let new_w = h * aspect;
            let x0 = self.x0 + 0.5 * (w - new_w);
            Self::from_origin_size(x0, self.y0, new_w, h)
        } else {
            let new_h = w / aspect;
            let y0 = self.y0 + 0.5 * (h - new_h);
            Self::from_origin_size(self.x0, y0, w, new_h)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
