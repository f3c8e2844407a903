use super::*;

#[test]
fn axis_pair_parses_known_values() {
    assert_eq!("xy".parse::<AxisPair>().unwrap(), AxisPair::Xy);
    assert_eq!("xz".parse::<AxisPair>().unwrap(), AxisPair::Xz);
    assert_eq!("yz".parse::<AxisPair>().unwrap(), AxisPair::Yz);
}

#[test]
fn axis_pair_rejects_unknown_value() {
    let err = "zx".parse::<AxisPair>().unwrap_err();
    assert!(matches!(err, MovieError::Validation(_)));
    assert!(err.to_string().contains("zx"));
}

#[test]
fn axis_pair_layout_constants() {
    assert_eq!(AxisPair::Xy.max_columns(), 3);
    assert_eq!(AxisPair::Xz.max_columns(), 4);
    assert_eq!(AxisPair::Yz.max_columns(), 4);
    assert!(AxisPair::Xy.inverts_y_axis());
    assert!(!AxisPair::Xz.inverts_y_axis());
    assert_eq!(AxisPair::Yz.coords(), (Coord::Y, Coord::Z));
}

#[test]
fn limits_normalize_maps_bounds() {
    let l = Limits {
        lower: -2.0,
        upper: 2.0,
    };
    assert_eq!(l.normalize(-2.0), 0.0);
    assert_eq!(l.normalize(0.0), 0.5);
    assert_eq!(l.normalize(2.0), 1.0);
}

#[test]
fn fit_aspect_centres_wide_slot() {
    let r = PixelRect::from_origin_size(0.0, 0.0, 200.0, 100.0);
    let fit = r.fit_aspect(1.0);
    assert_eq!(fit, PixelRect::from_origin_size(50.0, 0.0, 100.0, 100.0));
}

#[test]
fn fit_aspect_centres_tall_slot() {
    let r = PixelRect::from_origin_size(10.0, 0.0, 100.0, 300.0);
    let fit = r.fit_aspect(2.0);
    assert_eq!(fit, PixelRect::from_origin_size(10.0, 125.0, 100.0, 50.0));
}
