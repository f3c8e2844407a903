//! Base color scales and the three custom scales built from them.
//!
//! The `cmo.*` tables are coarse control-point approximations of the cmocean scales of the
//! same names.

use crate::colormap::map::Colormap;
use crate::foundation::math::{interp, linspace};

const LUT_SIZE: usize = 256;

const ICE: &[(f64, [f64; 3])] = &[
    (0.00, [0.016, 0.020, 0.078]),
    (0.25, [0.153, 0.196, 0.412]),
    (0.50, [0.247, 0.400, 0.667]),
    (0.75, [0.396, 0.667, 0.816]),
    (1.00, [0.918, 0.992, 0.992]),
];

const SOLAR: &[(f64, [f64; 3])] = &[
    (0.00, [0.200, 0.078, 0.094]),
    (0.25, [0.427, 0.125, 0.137]),
    (0.50, [0.647, 0.247, 0.090]),
    (0.75, [0.827, 0.459, 0.055]),
    (1.00, [0.882, 0.992, 0.294]),
];

const CURL: &[(f64, [f64; 3])] = &[
    (0.00, [0.082, 0.114, 0.267]),
    (0.25, [0.118, 0.447, 0.498]),
    (0.50, [0.996, 0.965, 0.961]),
    (0.75, [0.737, 0.329, 0.341]),
    (1.00, [0.204, 0.051, 0.208]),
];

const HALINE: &[(f64, [f64; 3])] = &[
    (0.00, [0.161, 0.094, 0.424]),
    (0.25, [0.067, 0.318, 0.608]),
    (0.50, [0.129, 0.541, 0.549]),
    (0.75, [0.400, 0.725, 0.392]),
    (1.00, [0.992, 0.937, 0.604]),
];

const GRAY: &[(f64, [f64; 3])] = &[(0.0, [0.0, 0.0, 0.0]), (1.0, [1.0, 1.0, 1.0])];

/// Base scales plus their `_r` reversals.
pub fn base_colormaps() -> Vec<Colormap> {
    let bases = [
        ("cmo.ice", ICE),
        ("cmo.solar", SOLAR),
        ("cmo.curl", CURL),
        ("cmo.haline", HALINE),
        ("gray", GRAY),
    ];

    let mut out = Vec::with_capacity(bases.len() * 2);
    for (name, anchors) in bases {
        let cmap = Colormap::from_anchors(name, anchors, LUT_SIZE);
        out.push(cmap.reversed(format!("{name}_r")));
        out.push(cmap);
    }
    out
}

/// `ferret`: piecewise-linear channel tables sampled at 21 points, reversed, 255 entries.
pub fn ferret() -> Colormap {
    const RED: &[(f64, f64)] = &[
        (0.0, 0.6),
        (0.15, 1.0),
        (0.35, 1.0),
        (0.65, 0.0),
        (0.8, 0.0),
        (1.0, 0.75),
    ];
    const GREEN: &[(f64, f64)] = &[(0.0, 0.0), (0.1, 0.0), (0.35, 1.0), (1.0, 0.0)];
    const BLUE: &[(f64, f64)] = &[(0.0, 0.0), (0.5, 0.0), (0.9, 0.9), (1.0, 0.9)];

    fn channel(table: &[(f64, f64)], x: f64) -> f64 {
        let xp: Vec<f64> = table.iter().map(|p| p.0).collect();
        let fp: Vec<f64> = table.iter().map(|p| p.1).collect();
        interp(x, &xp, &fp)
    }

    let mut colors: Vec<[f64; 3]> = linspace(0.0, 1.0, 21)
        .into_iter()
        .map(|x| [channel(RED, x), channel(GREEN, x), channel(BLUE, x)])
        .collect();
    colors.reverse();

    Colormap::from_list("ferret", &colors, 255)
}

/// Two scales stacked: 64 samples of `low` over `low_range`, then 192 of `high` over `[0, 1]`.
fn composite(name: &str, low: &Colormap, low_range: (f64, f64), high: &Colormap) -> Colormap {
    let mut colors = low.sample_range(low_range.0, low_range.1, 64);
    colors.extend(high.sample_range(0.0, 1.0, 192));
    Colormap::from_list(name, &colors, LUT_SIZE)
}

/// `thermal_driving`: reversed ice into solar.
pub fn thermal_driving() -> Colormap {
    let ice_r = Colormap::from_anchors("cmo.ice", ICE, LUT_SIZE).reversed("cmo.ice_r");
    let solar = Colormap::from_anchors("cmo.solar", SOLAR, LUT_SIZE);
    composite("thermal_driving", &ice_r, (0.0, 0.9), &solar)
}

/// `haline_driving`: upper half of curl into haline.
pub fn haline_driving() -> Colormap {
    let curl = Colormap::from_anchors("cmo.curl", CURL, LUT_SIZE);
    let haline = Colormap::from_anchors("cmo.haline", HALINE, LUT_SIZE);
    composite("haline_driving", &curl, (0.5, 0.95), &haline)
}

/// The three scales registered once per process.
pub fn custom_colormaps() -> Vec<Colormap> {
    vec![ferret(), thermal_driving(), haline_driving()]
}

#[cfg(test)]
#[path = "../../tests/unit/colormap/builtin.rs"]
mod tests;
