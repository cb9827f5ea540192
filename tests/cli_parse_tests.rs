use gridhunt::{coord_to_string, parse_coord, parse_placement, Coord, Orientation};

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("A1").unwrap(), Coord::new(0, 0));
    assert_eq!(parse_coord("j10").unwrap(), Coord::new(9, 9));
    assert_eq!(parse_coord("C7").unwrap(), Coord::new(2, 6));
    assert!(parse_coord("").is_err());
    assert!(parse_coord("A").is_err());
    assert!(parse_coord("K1").is_err());
    assert!(parse_coord("A0").is_err());
    assert!(parse_coord("A11").is_err());
    assert!(parse_coord("1A").is_err());
}

#[test]
fn test_parse_placement() {
    assert_eq!(
        parse_placement("B3 V").unwrap(),
        (Coord::new(1, 2), Orientation::Vertical)
    );
    assert_eq!(
        parse_placement("b3").unwrap(),
        (Coord::new(1, 2), Orientation::Horizontal)
    );
    assert!(parse_placement("B3 X").is_err());
}

#[test]
fn test_coord_to_string_roundtrip() {
    for c in Coord::all() {
        assert_eq!(parse_coord(&coord_to_string(c)).unwrap(), c);
    }
}

#[test]
fn test_repeated_enemy_shot_is_not_fatal() {
    use gridhunt::{CliPlayer, GuessResult, Player};
    let mut player = CliPlayer::new();
    player.handle_opponent_guess(Coord::new(2, 2), GuessResult::Miss);
    player.handle_opponent_guess(Coord::new(2, 2), GuessResult::Miss);
    player.handle_opponent_guess(Coord::new(12, 2), GuessResult::Miss);
}
