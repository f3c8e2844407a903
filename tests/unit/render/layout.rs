use super::*;

#[test]
fn columns_are_capped_per_axis_pair() {
    let xy = GridLayout::new(AxisPair::Xy, 5).unwrap();
    assert_eq!((xy.columns, xy.rows), (3, 2));
    let xz = GridLayout::new(AxisPair::Xz, 5).unwrap();
    assert_eq!((xz.columns, xz.rows), (4, 2));
    let yz = GridLayout::new(AxisPair::Yz, 2).unwrap();
    assert_eq!((yz.columns, yz.rows), (2, 1));
    let many = GridLayout::new(AxisPair::Xy, 9).unwrap();
    assert_eq!((many.columns, many.rows), (3, 3));
}

#[test]
fn zero_models_is_an_error() {
    assert!(GridLayout::new(AxisPair::Xy, 0).is_err());
}

#[test]
fn slots_visit_bottom_row_first() {
    let slots = grid_slots(2, 3, 5);
    assert_eq!(
        slots,
        vec![
            PanelSlot { row: 1, col: 0, model: Some(3) },
            PanelSlot { row: 1, col: 1, model: Some(4) },
            PanelSlot { row: 1, col: 2, model: None },
            PanelSlot { row: 0, col: 0, model: Some(0) },
            PanelSlot { row: 0, col: 1, model: Some(1) },
            PanelSlot { row: 0, col: 2, model: Some(2) },
        ]
    );
}

#[test]
fn every_model_gets_exactly_one_slot() {
    for axes in [AxisPair::Xy, AxisPair::Xz] {
        for n in 1..=13 {
            let layout = GridLayout::new(axes, n).unwrap();
            let slots = layout.slots();
            assert_eq!(slots.len(), layout.rows * layout.columns);
            let mut models: Vec<usize> = slots.iter().filter_map(|s| s.model).collect();
            models.sort_unstable();
            assert_eq!(models, (0..n).collect::<Vec<_>>());
            let empty = slots.iter().filter(|s| s.model.is_none()).count();
            assert_eq!(empty, layout.rows * layout.columns - n);
            assert!(
                slots
                    .iter()
                    .filter(|s| s.model.is_none())
                    .all(|s| s.row == layout.rows - 1)
            );
        }
    }
}

#[test]
fn figure_size_follows_row_scale() {
    let xy = GridLayout::new(AxisPair::Xy, 2).unwrap();
    assert_eq!(xy.figure_size(), (1600, 230));
    let xz = GridLayout::new(AxisPair::Xz, 6).unwrap();
    assert_eq!(xz.figure_size(), (1600, 550));
}

#[test]
fn slots_tile_without_overlap() {
    let layout = GridLayout::new(AxisPair::Xz, 8).unwrap();
    let a = layout.slot_rect(0, 0);
    let b = layout.slot_rect(0, 1);
    let c = layout.slot_rect(1, 0);
    assert!(a.x1 < b.x0);
    assert!(a.y1 < c.y0);
    assert_eq!(a.width(), b.width());
    assert_eq!(a.height(), c.height());
}

#[test]
fn colorbar_spans_rightmost_column() {
    let layout = GridLayout::new(AxisPair::Xy, 5).unwrap();
    let cb = layout.colorbar_rect();
    assert_eq!(cb.y0, layout.slot_rect(0, 2).y0);
    assert_eq!(cb.y1, layout.slot_rect(1, 2).y1);
    assert!(cb.x0 > layout.slot_rect(0, 2).x1);
    assert!((cb.width() - 32.0).abs() < 1e-9);
}
