//! Reference calendar and time selection.
//!
//! Frames are numbered by their position on a fixed monthly calendar (non-leap, 365-day year)
//! that always starts at year 0, so a frame keeps its number when the selected year window
//! changes between runs.

use crate::config::SECONDS_PER_YEAR;
use crate::foundation::error::{MovieError, MovieResult};
use crate::foundation::math::interp;

/// Days in each month of the fixed calendar.
pub const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Last year the reference calendar can reach.
pub const MAX_REFERENCE_YEAR: usize = 100_000;

/// A selected reference time and its position on the full reference axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeSample {
    /// Time in seconds.
    pub time: f64,
    /// Index on the full reference axis; used for frame numbering.
    pub index: usize,
}

/// Month-boundary timestamps from year 0 through `ceil(max_time / year)`, twelve per year.
///
/// Fails if that year is beyond [`MAX_REFERENCE_YEAR`].
pub fn reference_time_axis(max_time: f64) -> MovieResult<Vec<f64>> {
    let years = if max_time.is_finite() && max_time > 0.0 {
        (max_time / SECONDS_PER_YEAR).ceil()
    } else {
        0.0
    };
    if years > MAX_REFERENCE_YEAR as f64 {
        return Err(MovieError::validation(format!(
            "time {max_time} s is beyond year {MAX_REFERENCE_YEAR} of the reference calendar"
        )));
    }
    let max_year = years as usize;

    let mut out = Vec::with_capacity(12 * (max_year + 1));
    for year in 0..=max_year {
        let mut t = year as f64 * SECONDS_PER_YEAR;
        out.push(t);
        for days in &DAYS_PER_MONTH[..11] {
            t += f64::from(*days) * SECONDS_PER_DAY;
            out.push(t);
        }
    }
    Ok(out)
}

/// Reference times within `[start_year·year, min(max_time, (end_year+1)·year))`.
///
/// Only the part of the calendar below the window end is built; indices match the full axis.
/// An empty result is valid and yields an empty movie.
pub fn select_frames(
    start_year: f64,
    end_year: f64,
    max_time: f64,
) -> MovieResult<Vec<TimeSample>> {
    let start = start_year * SECONDS_PER_YEAR;
    let end = max_time.min((end_year + 1.0) * SECONDS_PER_YEAR);

    Ok(reference_time_axis(end)?
        .into_iter()
        .enumerate()
        .filter(|&(_, t)| t >= start && t < end)
        .map(|(index, time)| TimeSample { time, index })
        .collect())
}

/// Index of the sample in `times` nearest to `target`.
///
/// Non-finite times are dropped first; `target` is linearly interpolated onto the positions of
/// the remaining samples (clamped at both ends) and rounded half up. The returned index refers
/// to `times` itself and never points at a non-finite entry. `None` if no time is finite.
pub fn nearest_time_index(times: &[f64], target: f64) -> Option<usize> {
    let valid: Vec<usize> = (0..times.len()).filter(|&i| times[i].is_finite()).collect();
    if valid.is_empty() {
        return None;
    }

    let xp: Vec<f64> = valid.iter().map(|&i| times[i]).collect();
    let fp: Vec<f64> = (0..valid.len()).map(|i| i as f64).collect();
    let local = interp(target, &xp, &fp);
    if !local.is_finite() {
        return None;
    }

    let local = ((local + 0.5).floor() as usize).min(valid.len() - 1);
    Some(valid[local])
}

#[cfg(test)]
#[path = "../tests/unit/timeline.rs"]
mod tests;
