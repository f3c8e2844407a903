/// Round `raw` up to the next step of the form `{1, 2, 2.5, 5} × 10^k`.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    for m in [1.0, 2.0, 2.5, 5.0, 10.0] {
        if m * mag >= raw * (1.0 - 1e-9) {
            return m * mag;
        }
    }
    10.0 * mag
}

/// Tick values on a nice step inside `[min(a, b), max(a, b)]`, at most about `max_bins` intervals.
pub fn nice_ticks(a: f64, b: f64, max_bins: usize) -> Vec<f64> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if hi == lo {
        return vec![lo];
    }

    let step = nice_step((hi - lo) / max_bins.max(1) as f64);
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect()
}

/// Decimal places needed to print multiples of `step` exactly.
pub fn tick_decimals(step: f64) -> usize {
    for d in 0..=6 {
        let scaled = step * 10f64.powi(d as i32);
        if (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0) {
            return d;
        }
    }
    6
}

/// Format a tick value with `decimals` places, never printing a negative zero.
pub fn format_tick(v: f64, decimals: usize) -> String {
    let s = format!("{v:.decimals$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_owned(),
        _ => s,
    }
}

/// Tick values with their labels.
pub fn labelled_ticks(a: f64, b: f64, max_bins: usize) -> Vec<(f64, String)> {
    let ticks = nice_ticks(a, b, max_bins);
    let decimals = match ticks.as_slice() {
        [first, second, ..] => tick_decimals(second - first),
        _ => 2,
    };
    ticks
        .into_iter()
        .map(|v| (v, format_tick(v, decimals)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/ticks.rs"]
mod tests;
