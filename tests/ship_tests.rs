use battleship::{Coordinate, Orientation, Placement, ShipType};

#[test]
fn test_cells_follow_orientation() {
    let ship = ShipType::new("Test", 3);
    let horizontal = Placement::new(ship, Coordinate::new(2, 1), Orientation::Horizontal);
    let cells: Vec<_> = horizontal.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(2, 1),
            Coordinate::new(2, 2),
            Coordinate::new(2, 3)
        ]
    );

    let vertical = Placement::new(ship, Coordinate::new(0, 0), Orientation::Vertical);
    let cells: Vec<_> = vertical.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(2, 0)
        ]
    );
}

#[test]
fn test_fits() {
    let ship = ShipType::new("Test", 4);
    assert!(Placement::new(ship, Coordinate::new(0, 1), Orientation::Horizontal).fits(5));
    assert!(!Placement::new(ship, Coordinate::new(0, 2), Orientation::Horizontal).fits(5));
    assert!(Placement::new(ship, Coordinate::new(1, 4), Orientation::Vertical).fits(5));
    assert!(!Placement::new(ship, Coordinate::new(2, 4), Orientation::Vertical).fits(5));
    assert!(!Placement::new(ship, Coordinate::new(1, 5), Orientation::Vertical).fits(5));
}
