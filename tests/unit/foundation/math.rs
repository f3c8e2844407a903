use super::*;

#[test]
fn interp_clamps_and_interpolates() {
    let xp = [0.0, 10.0, 20.0];
    let fp = [0.0, 1.0, 2.0];
    assert_eq!(interp(-5.0, &xp, &fp), 0.0);
    assert_eq!(interp(25.0, &xp, &fp), 2.0);
    assert_eq!(interp(5.0, &xp, &fp), 0.5);
    assert_eq!(interp(10.0, &xp, &fp), 1.0);
    assert_eq!(interp(15.0, &xp, &fp), 1.5);
}

#[test]
fn interp_handles_irregular_spacing() {
    let xp = [0.0, 1.0, 11.0];
    let fp = [0.0, 1.0, 2.0];
    assert!((interp(6.0, &xp, &fp) - 1.5).abs() < 1e-12);
}

#[test]
fn interp_empty_is_nan() {
    assert!(interp(1.0, &[], &[]).is_nan());
}

#[test]
fn linspace_hits_both_ends() {
    let v = linspace(0.0, 0.9, 4);
    assert_eq!(v.len(), 4);
    assert_eq!(v[0], 0.0);
    assert_eq!(v[3], 0.9);
    assert!((v[1] - 0.3).abs() < 1e-12);
    assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    assert!(linspace(2.0, 3.0, 0).is_empty());
}

#[test]
fn finite_min_max_skips_nan_and_inf() {
    let v = [f64::NAN, 3.0, -1.0, f64::INFINITY, 2.0];
    assert_eq!(finite_min_max(&v), Some((-1.0, 3.0)));
    assert_eq!(finite_min_max(&[f64::NAN]), None);
}

#[test]
fn blend_alpha_0_keeps_dst() {
    let mut dst = [10u8, 20, 30, 255];
    blend_premul_over_opaque(&mut dst, &[0, 0, 0, 0]);
    assert_eq!(dst, [10, 20, 30, 255]);
}

#[test]
fn blend_alpha_255_is_src() {
    let mut dst = [10u8, 20, 30, 255];
    blend_premul_over_opaque(&mut dst, &[1, 2, 3, 255]);
    assert_eq!(dst, [1, 2, 3, 255]);
}

#[test]
fn blend_half_black_over_white() {
    // Premultiplied black at 50% over white => mid gray.
    let mut dst = [255u8, 255, 255, 255];
    blend_premul_over_opaque(&mut dst, &[0, 0, 0, 128]);
    assert_eq!(dst, [127, 127, 127, 255]);
}
