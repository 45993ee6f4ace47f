use assert_matches::assert_matches;
use flatgeom::{
    Axis, Bounds, Coord, FlatGeomError, Geometry, GeometryCollection, Layout, LineString, Point,
    Polygon,
};

const LAYOUTS: [Layout; 5] = [
    Layout::NoLayout,
    Layout::XY,
    Layout::XYZ,
    Layout::XYM,
    Layout::XYZM,
];

#[test]
fn layout_merge_algebra() {
    for a in LAYOUTS {
        assert_eq!(a.merge(a), a);
        assert_eq!(Layout::NoLayout.merge(a), a);
        for b in LAYOUTS {
            assert_eq!(a.merge(b), b.merge(a));
            for c in LAYOUTS {
                assert_eq!(a.merge(b).merge(c), a.merge(b.merge(c)));
            }
        }
    }
}

#[test]
fn extend_never_shrinks() {
    let geometries: Vec<Box<dyn Geometry>> = vec![
        Box::new(Point::from_coord(Layout::XY, &[-5.0, 5.0]).unwrap()),
        Box::new(Point::from_coord(Layout::XYZ, &[0.5, 0.5, 100.0]).unwrap()),
        Box::new(
            LineString::from_coords(Layout::XYM, &[[-1.0, -1.0, 0.0], [20.0, 3.0, 1.0]]).unwrap(),
        ),
        Box::new(LineString::new(Layout::XYZM)),
        Box::new(Polygon::new(Layout::XY)),
    ];

    let start = Bounds::from_coords(Layout::XY, &[0.0, 0.0], &[1.0, 1.0]);
    for geometry in &geometries {
        let mut bounds = start.clone();
        bounds.extend(geometry.as_ref());

        for axis in [Axis::X, Axis::Y] {
            let (min, max) = start.range(axis).unwrap();
            let (new_min, new_max) = bounds.range(axis).unwrap();
            assert!(new_min <= min, "{axis:?} min shrunk");
            assert!(new_max >= max, "{axis:?} max shrunk");
        }
    }
}

#[test]
fn emptiness_is_exact() {
    let mut bounds = Bounds::new(Layout::XY);
    assert!(bounds.set(&[0.0, 0.0, -1.0, -1.0]).is_empty());
    assert!(!bounds.set(&[0.0, 0.0, 0.0, 0.0]).is_empty());
    assert!(bounds.set(&[0.0, 0.0, -1e-300, 0.0]).is_empty());
}

#[test]
fn overlap_excludes_any_margin() {
    let bounds = Bounds::from_values(Layout::XY, &[0.0, 0.0, 10.0, 10.0]);
    assert!(!bounds.overlaps_point(Layout::XY, &[-1e-30, 0.0]));
    assert!(bounds.overlaps_point(Layout::XY, &[0.0, 0.0]));

    let touching = Bounds::from_values(Layout::XY, &[10.0, 10.0, 20.0, 20.0]);
    assert!(bounds.overlaps(Layout::XY, &touching));
    let apart = Bounds::from_values(Layout::XY, &[10.0 + 1e-12, 0.0, 20.0, 20.0]);
    assert!(!bounds.overlaps(Layout::XY, &apart));
}

#[test]
fn set_coords_normalizes_order() {
    let mut bounds = Bounds::new(Layout::XY);
    bounds.set_coords(&[20.0, 0.0], &[0.0, 20.0]);
    assert_eq!(bounds.min_coord(), &Coord::from([0.0, 0.0]));
    assert_eq!(bounds.max_coord(), &Coord::from([20.0, 20.0]));
}

#[test]
fn stride_mismatch_leaves_path_intact() {
    let mut line = LineString::from_coords(Layout::XY, &[[9.0, 9.0]]).unwrap();
    let result = line.set_coords(&[vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]);
    assert_matches!(result, Err(FlatGeomError::StrideMismatch { got: 3, want: 2 }));

    assert_eq!(line.flat_coords(), &[9.0, 9.0]);
    assert_eq!(
        line.bounds(),
        Bounds::from_coords(Layout::XY, &[9.0, 9.0], &[9.0, 9.0])
    );
    assert!(line.verify().is_ok());
}

#[test]
fn clone_is_alias_free() {
    let original = LineString::from_coords(Layout::XY, &[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let mut cloned = original.clone();

    let a = original.flat_coords().as_ptr_range();
    let b = cloned.flat_coords().as_ptr_range();
    assert!(a.end <= b.start || b.end <= a.start);

    cloned.push_coord(&[5.0, 6.0]).unwrap();
    cloned.set_coords(&[[0.0, 0.0]]).unwrap();
    assert_eq!(original.flat_coords(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn interpolation_clamps_to_ends() {
    let line = LineString::from_coords(
        Layout::XYM,
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 1.0], [2.0, 0.0, 2.0]],
    )
    .unwrap();
    let m = Layout::XYM.m_index().unwrap();

    assert_eq!(line.interpolate(-0.5, m), (0, 0.0));
    assert_eq!(line.interpolate(2.5, m), (2, 0.0));
    assert_eq!(line.interpolate(0.5, m), (0, 0.5));
    assert_eq!(line.interpolate(1.0, m), (1, 0.0));
}

#[test]
fn collection_aggregates_layout_and_bounds() {
    let mut collection = GeometryCollection::new();
    collection
        .push(Point::from_coord(Layout::XY, &[1.0, 2.0]).unwrap())
        .unwrap()
        .push(Point::from_coord(Layout::XYM, &[3.0, 4.0, 5.0]).unwrap())
        .unwrap();

    assert_eq!(collection.layout(), Layout::XYM);
    assert_eq!(
        collection.bounds(),
        Bounds::from_coords(Layout::XYM, &[1.0, 2.0, 5.0], &[3.0, 4.0, 5.0])
    );
    assert!(!collection.is_empty());
}

#[test]
fn bounds_to_polygon() {
    let mut bounds = Bounds::new(Layout::XY);
    bounds.set(&[1.0, 2.0, 3.0, 4.0]);

    let polygon = bounds.polygon();
    assert_eq!(polygon.layout(), Layout::XY);
    assert_eq!(polygon.num_rings(), 1);
    let ring = polygon.ring(0).unwrap();
    assert_eq!(
        ring.flat_coords(),
        &[1.0, 2.0, 1.0, 4.0, 3.0, 4.0, 3.0, 2.0, 1.0, 2.0]
    );
    assert!(ring.is_closed());
}
