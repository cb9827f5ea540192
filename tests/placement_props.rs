use gridhunt::{placement, Board, Coord, GridStore, NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn assert_standard_fleet(board: &Board) -> Result<(), TestCaseError> {
    prop_assert_eq!(board.validate(), Ok(()));
    for ship_id in 1..=NUM_SHIPS as u8 {
        prop_assert_eq!(
            board.ship_cells(ship_id).count(),
            SHIPS[ship_id as usize - 1].length()
        );
    }
    let occupied = Coord::all().filter(|&c| board.ship_at(c).is_some()).count();
    prop_assert_eq!(occupied, TOTAL_SHIP_CELLS);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn random_layouts_hold_the_standard_fleet(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        placement::random_layout(&mut rng, &mut board);
        assert_standard_fleet(&board)?;
    }

    #[test]
    fn place_ships_without_pool_generates(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        placement::place_ships(&mut rng, &mut board, None);
        assert_standard_fleet(&board)?;
    }

    #[test]
    fn random_layout_overwrites_previous_contents(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        placement::random_layout(&mut rng, &mut board);
        placement::random_layout(&mut rng, &mut board);
        assert_standard_fleet(&board)?;
    }
}

#[test]
fn place_ships_replays_stored_layout_once() {
    let dir = tempfile::tempdir().unwrap();
    let store = GridStore::open(dir.path()).unwrap();

    let mut rng = SmallRng::seed_from_u64(99);
    let mut stored = Board::new();
    placement::random_layout(&mut rng, &mut stored);
    store.save(&stored).unwrap();

    let mut replayed = None;
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        placement::place_ships(&mut rng, &mut board, Some(&store));
        board.validate().unwrap();
        if store.is_empty().unwrap() {
            replayed = Some(board);
            break;
        }
    }
    assert_eq!(replayed, Some(stored));
}

#[test]
fn place_ships_survives_corrupt_pool() {
    let dir = tempfile::tempdir().unwrap();
    let store = GridStore::open(dir.path()).unwrap();
    std::fs::write(dir.path().join("0123456789ABCDEF0123456789ABCDEF.gr"), b"short").unwrap();

    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        placement::place_ships(&mut rng, &mut board, Some(&store));
        board.validate().unwrap();
    }
    // The corrupt entry was consumed on the first pool attempt.
    assert!(store.is_empty().unwrap());
}

#[test]
fn random_placement_rejects_unknown_ship() {
    let mut rng = SmallRng::seed_from_u64(3);
    let board = Board::new();
    assert_eq!(
        placement::random_placement(&mut rng, &board, 0).unwrap_err(),
        gridhunt::BoardError::InvalidIndex
    );
    assert_eq!(
        placement::random_placement(&mut rng, &board, NUM_SHIPS as u8 + 1).unwrap_err(),
        gridhunt::BoardError::InvalidIndex
    );
}

#[test]
fn random_layout_places_every_ship_across_seeds() {
    for seed in 0..256 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        placement::random_layout(&mut rng, &mut board);
        for ship_id in 1..=NUM_SHIPS as u8 {
            assert!(board.is_placed(ship_id), "seed {} lost ship {}", seed, ship_id);
        }
    }
}
