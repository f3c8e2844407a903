use super::*;

const YEAR: f64 = SECONDS_PER_YEAR;

#[test]
fn reference_axis_has_twelve_months_per_year() {
    let axis = reference_time_axis(1.5 * YEAR).unwrap();
    // ceil(1.5) = 2 => years 0, 1, 2.
    assert_eq!(axis.len(), 36);
    assert_eq!(axis[0], 0.0);
    assert_eq!(axis[1], 31.0 * SECONDS_PER_DAY);
    assert_eq!(axis[2], 59.0 * SECONDS_PER_DAY);
    assert_eq!(axis[11], 334.0 * SECONDS_PER_DAY);
    assert_eq!(axis[12], YEAR);
    assert_eq!(axis[24], 2.0 * YEAR);
    assert!(axis.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn reference_axis_for_whole_years() {
    assert_eq!(reference_time_axis(YEAR).unwrap().len(), 24);
    assert_eq!(reference_time_axis(0.0).unwrap().len(), 12);
}

#[test]
fn selection_respects_half_open_window() {
    for &(start, end, max_time) in &[
        (0.0, 1.0, YEAR),
        (0.0, 1.0, 5.0 * YEAR),
        (1.0, 3.0, 2.5 * YEAR),
        (2.0, 2.0, 10.0 * YEAR),
    ] {
        let lo = start * YEAR;
        let hi = f64::min(max_time, (end + 1.0) * YEAR);
        let axis = reference_time_axis(max_time).unwrap();
        let sel = select_frames(start, end, max_time).unwrap();
        assert!(sel.iter().all(|s| s.time >= lo && s.time < hi));
        let expected = axis.iter().filter(|&&t| t >= lo && t < hi).count();
        assert_eq!(sel.len(), expected);
        for s in &sel {
            assert_eq!(axis[s.index], s.time);
        }
    }
}

#[test]
fn one_year_of_data_gives_twelve_frames() {
    let sel = select_frames(0.0, 1.0, YEAR).unwrap();
    assert_eq!(sel.len(), 12);
    assert_eq!(sel[0].index, 0);
    assert_eq!(sel[11].index, 11);
}

#[test]
fn indices_are_not_renumbered_per_selection() {
    let sel = select_frames(1.0, 1.0, 3.0 * YEAR).unwrap();
    assert_eq!(sel.len(), 12);
    assert_eq!(sel[0].index, 12);
    assert_eq!(sel[0].time, YEAR);
}

#[test]
fn empty_window_gives_no_frames() {
    assert!(select_frames(5.0, 6.0, YEAR).unwrap().is_empty());
}

#[test]
fn fill_value_time_only_builds_the_window() {
    // Float `_FillValue` that slipped through as a real time.
    let fill = 9.969_209_968_386_869e36;
    let sel = select_frames(0.0, 1.0, fill).unwrap();
    assert_eq!(sel.len(), 24);
    assert_eq!(sel[23].index, 23);
}

#[test]
fn calendar_beyond_last_year_is_rejected() {
    let fill = 9.969_209_968_386_869e36;
    let err = reference_time_axis(fill).unwrap_err();
    assert!(matches!(err, MovieError::Validation(_)));

    let err = select_frames(0.0, 1e30, fill).unwrap_err();
    assert!(matches!(err, MovieError::Validation(_)));

    let last = MAX_REFERENCE_YEAR as f64 * YEAR;
    assert_eq!(
        reference_time_axis(last).unwrap().len(),
        12 * (MAX_REFERENCE_YEAR + 1)
    );
}

#[test]
fn nearest_index_rounds_to_closest_sample() {
    let times = [0.0, 10.0, 20.0, 30.0];
    assert_eq!(nearest_time_index(&times, 4.9), Some(0));
    assert_eq!(nearest_time_index(&times, 5.0), Some(1));
    assert_eq!(nearest_time_index(&times, 26.0), Some(3));
    assert_eq!(nearest_time_index(&times, -100.0), Some(0));
    assert_eq!(nearest_time_index(&times, 1000.0), Some(3));
}

#[test]
fn nearest_index_never_selects_non_finite_time() {
    let times = [0.0, f64::NAN, 20.0, f64::INFINITY, 40.0, f64::NAN];
    for target in [0.0, 5.0, 9.0, 11.0, 20.0, 29.0, 31.0, 40.0, 1e9] {
        let idx = nearest_time_index(&times, target).unwrap();
        assert!(times[idx].is_finite(), "target {target} picked index {idx}");
    }
    assert_eq!(nearest_time_index(&times, 11.0), Some(2));
    assert_eq!(nearest_time_index(&times, 1e9), Some(4));
}

#[test]
fn nearest_index_none_without_finite_times() {
    assert_eq!(nearest_time_index(&[f64::NAN, f64::NAN], 0.0), None);
    assert_eq!(nearest_time_index(&[], 0.0), None);
}
