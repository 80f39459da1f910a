use fractalgrid_core::{build_grid, ComplexPoint, EscapeTimeArray, FractalError, Region};

// ============================================================================
// Dimensions
// ============================================================================

#[test]
fn dimensions_follow_ceil_formula() {
    let cases = [
        // (top_left, bottom_right, step, rows, cols)
        ((0.0, 2.0), (2.0, 0.0), 1.0, 2, 2),
        ((-2.0, 1.0), (1.0, -1.0), 0.5, 4, 6),
        ((-2.0, 1.0), (1.0, -1.0), 0.4, 5, 8),
        ((0.0, 0.25), (0.25, 0.0), 1.0, 1, 1),
    ];

    for (tl, br, step, rows, cols) in cases {
        let grid = build_grid(tl.into(), br.into(), step).unwrap();
        assert_eq!(grid.shape(), (rows, cols), "{:?} {:?} step {}", tl, br, step);
    }
}

#[test]
fn degenerate_region_is_empty_not_an_error() {
    let point = ComplexPoint::new(0.5, 0.5);
    let grid = build_grid(point, point, 0.1).unwrap();
    assert_eq!(grid.shape(), (0, 0));
    assert!(grid.is_empty());
}

// ============================================================================
// Coordinates
// ============================================================================

#[test]
fn top_left_is_first_and_bottom_right_is_excluded() {
    let region = Region::new(
        ComplexPoint::new(-2.0, 1.25),
        ComplexPoint::new(1.0, -1.25),
        0.25,
    );
    let grid = region.build_grid().unwrap();

    assert_eq!(grid.points().next(), Some(region.top_left));
    assert!(!grid.contains(region.bottom_right));
    assert!(grid.real_axis().iter().all(|&re| re < 1.0));
    assert!(grid.imag_axis().iter().all(|&im| im > -1.25));
}

#[test]
fn axes_are_strictly_monotonic() {
    let grid = build_grid(
        ComplexPoint::new(-0.7436, 0.1319),
        ComplexPoint::new(-0.7426, 0.1309),
        1e-5,
    )
    .unwrap();

    assert!(grid.real_axis().windows(2).all(|w| w[0] < w[1]));
    assert!(grid.imag_axis().windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn cell_combines_column_real_and_row_imaginary() {
    let grid = build_grid(
        ComplexPoint::new(-1.0, 1.0),
        ComplexPoint::new(1.0, -1.0),
        0.5,
    )
    .unwrap();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = grid.get(row, col).unwrap();
            assert_eq!(cell.re, grid.real_axis()[col]);
            assert_eq!(cell.im, grid.imag_axis()[row]);
        }
    }
    assert_eq!(grid.get(grid.rows(), 0), None);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn step_must_be_positive() {
    let err = build_grid(ComplexPoint::ZERO, ComplexPoint::new(1.0, -1.0), -0.25).unwrap_err();
    assert!(matches!(err, FractalError::InvalidStep { step } if step == -0.25));
}

#[test]
fn escape_array_shape_follows_grid() {
    let grid = build_grid(
        ComplexPoint::new(-1.0, 1.0),
        ComplexPoint::new(1.0, -1.0),
        0.25,
    )
    .unwrap();
    let arr = EscapeTimeArray::not_escaped(grid.rows(), grid.cols(), 10).unwrap();
    assert_eq!(arr.shape(), grid.shape());
    assert_eq!(arr.to_intensity().values().len(), grid.len());
}
