use gridhunt::{
    ship_length, Board, BoardError, Coord, HitGrid, Mark, Orientation, NUM_SHIPS, SHIPS,
    TOTAL_SHIP_CELLS,
};

fn standard_board() -> Board {
    let mut board = Board::new();
    board.place(1, Coord::new(0, 0), Orientation::Horizontal).unwrap();
    board.place(2, Coord::new(0, 2), Orientation::Vertical).unwrap();
    board.place(3, Coord::new(4, 4), Orientation::Horizontal).unwrap();
    board.place(4, Coord::new(9, 0), Orientation::Vertical).unwrap();
    board.place(5, Coord::new(2, 9), Orientation::Horizontal).unwrap();
    board
}

#[test]
fn test_fleet_lengths() {
    let lengths: Vec<usize> = (1..=NUM_SHIPS as u8).map(ship_length).collect();
    assert_eq!(lengths, vec![2, 3, 3, 4, 5]);
    for (i, def) in SHIPS.iter().enumerate() {
        assert_eq!(def.length(), ship_length(i as u8 + 1));
    }
    assert_eq!(SHIPS.iter().map(|s| s.length()).sum::<usize>(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_place_writes_ship_id() {
    let board = standard_board();
    assert_eq!(board.get(Coord::new(0, 0)).unwrap(), 1);
    assert_eq!(board.get(Coord::new(1, 0)).unwrap(), 1);
    assert_eq!(board.get(Coord::new(0, 4)).unwrap(), 2);
    assert_eq!(board.get(Coord::new(6, 4)).unwrap(), 3);
    assert_eq!(board.get(Coord::new(9, 3)).unwrap(), 4);
    assert_eq!(board.get(Coord::new(6, 9)).unwrap(), 5);
    assert_eq!(board.get(Coord::new(5, 5)).unwrap(), 0);
    assert_eq!(board.ship_at(Coord::new(5, 5)), None);
    assert_eq!(board.ship_cells(5).count(), 5);
    board.validate().unwrap();
}

#[test]
fn test_place_rejections() {
    let mut board = Board::new();
    assert_eq!(
        board.place(0, Coord::new(0, 0), Orientation::Horizontal).unwrap_err(),
        BoardError::InvalidIndex
    );
    assert_eq!(
        board.place(6, Coord::new(0, 0), Orientation::Horizontal).unwrap_err(),
        BoardError::InvalidIndex
    );
    assert_eq!(
        board.place(5, Coord::new(6, 0), Orientation::Horizontal).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        board.place(5, Coord::new(0, 10), Orientation::Horizontal).unwrap_err(),
        BoardError::OutOfBounds
    );
    board.place(5, Coord::new(5, 0), Orientation::Horizontal).unwrap();
    assert_eq!(
        board.place(4, Coord::new(7, 0), Orientation::Vertical).unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(
        board.place(5, Coord::new(0, 5), Orientation::Vertical).unwrap_err(),
        BoardError::ShipAlreadyPlaced
    );
    // Touching another ship is allowed.
    board.place(4, Coord::new(4, 0), Orientation::Vertical).unwrap();
}

#[test]
fn test_validate_rejects_bad_layouts() {
    assert!(matches!(
        Board::new().validate(),
        Err(BoardError::InvalidLayout(_))
    ));

    let mut cells = *standard_board().cells();
    // Bend the carrier: move its last cell up one row.
    cells[6][9] = 0;
    cells[6][8] = 5;
    assert!(Board::from_cells(cells).validate().is_err());

    let mut cells = *standard_board().cells();
    cells[5][5] = 7;
    assert!(Board::from_cells(cells).validate().is_err());

    let mut cells = *standard_board().cells();
    cells[2][0] = 1;
    assert!(Board::from_cells(cells).validate().is_err());
}

#[test]
fn test_sunk_detection() {
    let board = standard_board();
    let mut hits = HitGrid::new();
    hits.record(Coord::new(0, 0), true).unwrap();
    assert!(!board.is_sunk(1, &hits));
    hits.record(Coord::new(1, 0), true).unwrap();
    assert!(board.is_sunk(1, &hits));
    assert!(!board.all_sunk(&hits));

    for c in Coord::all() {
        if hits.is_unattacked(c) {
            hits.record(c, board.ship_at(c).is_some()).unwrap();
        }
    }
    assert!(board.all_sunk(&hits));
}

#[test]
fn test_hit_grid_is_monotonic() {
    let mut hits = HitGrid::new();
    let c = Coord::new(3, 7);
    assert_eq!(hits.record(c, false).unwrap(), Mark::Miss);
    assert_eq!(hits.record(c, true).unwrap_err(), BoardError::AlreadyGuessed);
    assert_eq!(hits.get(c).unwrap(), Mark::Miss);
    assert_eq!(hits.record(Coord::new(10, 0), true).unwrap_err(), BoardError::OutOfBounds);
    assert_eq!(hits.unattacked(), 99);
}

#[test]
fn test_hit_grid_integer_encoding() {
    let mut values = [[0i32; 10]; 10];
    values[1][2] = 1;
    values[3][4] = -1;
    let grid = HitGrid::from_values(&values).unwrap();
    assert_eq!(grid.get(Coord::new(1, 2)).unwrap(), Mark::Miss);
    assert_eq!(grid.get(Coord::new(3, 4)).unwrap(), Mark::Hit);
    assert_eq!(grid.values(), values);

    values[0][0] = 2;
    assert_eq!(HitGrid::from_values(&values).unwrap_err(), BoardError::InvalidMark(2));
}

#[test]
fn test_coord_steps_stop_at_edges() {
    use gridhunt::Direction;
    let corner = Coord::new(0, 0);
    assert_eq!(corner.step(Direction::Up), None);
    assert_eq!(corner.step(Direction::Left), None);
    assert_eq!(corner.step(Direction::Down), Some(Coord::new(0, 1)));
    assert_eq!(corner.step(Direction::Right), Some(Coord::new(1, 0)));
    let far = Coord::new(9, 9);
    assert_eq!(far.step(Direction::Down), None);
    assert_eq!(far.step(Direction::Right), None);
}

#[test]
fn test_coord_steps_never_overflow() {
    use gridhunt::Direction;
    let huge = Coord::new(usize::MAX, usize::MAX);
    assert_eq!(huge.step(Direction::Down), None);
    assert_eq!(huge.step(Direction::Right), None);
    assert_eq!(huge.step(Direction::Up), None);
    assert_eq!(huge.step(Direction::Left), None);
}
