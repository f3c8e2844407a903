/// Piecewise-linear interpolation of `x` on increasing sample points `xp` with values `fp`.
///
/// Values outside `[xp[0], xp[last]]` clamp to the end values. Returns `NaN` for empty input.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let n = xp.len().min(fp.len());
    if n == 0 {
        return f64::NAN;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // First sample strictly greater than x; 1 <= hi <= n-1 here.
    let hi = xp[..n].partition_point(|&v| v <= x);
    let lo = hi - 1;
    let dx = xp[hi] - xp[lo];
    if dx == 0.0 {
        return fp[lo];
    }
    let t = (x - xp[lo]) / dx;
    fp[lo] + t * (fp[hi] - fp[lo])
}

/// `n` evenly spaced samples over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Minimum and maximum over the finite entries, or `None` when there are none.
pub fn finite_min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Composite one premultiplied RGBA8 pixel over an opaque RGBA8 pixel in place.
pub(crate) fn blend_premul_over_opaque(dst: &mut [u8], src_premul: &[u8]) {
    let a = u16::from(src_premul[3]);
    if a == 0 {
        return;
    }
    if a == 255 {
        dst[..3].copy_from_slice(&src_premul[..3]);
        dst[3] = 255;
        return;
    }

    let inv = 255u16 - a;
    for c in 0..3 {
        let v = u16::from(src_premul[c]) + mul_div255_u16(u16::from(dst[c]), inv);
        dst[c] = v.min(255) as u8;
    }
    dst[3] = 255;
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
