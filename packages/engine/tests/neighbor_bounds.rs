use cellsound_engine::{AutomatonConfig, AutomatonGrid, EngineError};

/// Every coordinate in and around the lattice either counts or is rejected;
/// none reaches the unchecked neighbor sum. Meaningful in release builds too.
#[test]
fn neighbor_count_only_reads_interior_cells() {
    let mut grid = AutomatonGrid::new(AutomatonConfig::default().with_seed(3).with_density(1.0)).unwrap();
    grid.initialize(70.0, 40.0, 10.0).unwrap();
    let (rows, cols) = (grid.row_count(), grid.column_count());
    assert_eq!((rows, cols), (6, 9));

    for y in 0..rows + 3 {
        for x in 0..cols + 3 {
            let interior = (1..=grid.interior_rows()).contains(&y) && (1..=grid.interior_cols()).contains(&x);
            match grid.count_alive_neighbors(y, x) {
                Ok(n) => {
                    assert!(interior, "({y}, {x}) is not interior");
                    assert!(n <= 8);
                }
                Err(e) => {
                    assert!(!interior, "({y}, {x}) is interior");
                    assert_eq!(e, EngineError::OutOfRangeAccess { row: y, col: x, rows, cols });
                }
            }
        }
    }

    for (y, x) in [(u32::MAX, 1), (1, u32::MAX), (u32::MAX, u32::MAX)] {
        assert!(matches!(grid.count_alive_neighbors(y, x), Err(EngineError::OutOfRangeAccess { .. })));
    }
}

#[test]
fn uninitialized_grid_has_no_countable_cells() {
    let grid = AutomatonGrid::default();
    for (y, x) in [(0, 0), (1, 1), (u32::MAX, u32::MAX)] {
        assert_eq!(
            grid.count_alive_neighbors(y, x),
            Err(EngineError::OutOfRangeAccess { row: y, col: x, rows: 0, cols: 0 })
        );
    }
}
