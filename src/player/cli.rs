use std::io::{self, BufRead, Write};

use log::warn;
use rand::rngs::SmallRng;

use crate::{
    ai::Hunter,
    board::Board,
    common::{BoardError, Coord, GuessResult},
    config::{BOARD_SIZE, NUM_SHIPS, SHIPS},
    game::GameStatus,
    hit_grid::{HitGrid, Mark},
    placement,
    ship::Orientation,
};

use super::Player;

/// Human player reading moves from stdin.
pub struct CliPlayer {
    advisor: Hunter,
    board: Board,
    incoming: HitGrid,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self {
            advisor: Hunter::new(),
            board: Board::new(),
            incoming: HitGrid::new(),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a coordinate as column letter plus 1-based row, e.g. `C7`.
pub fn coord_to_string(coord: Coord) -> String {
    let col = (b'A' + coord.x as u8) as char;
    format!("{}{}", col, coord.y + 1)
}

/// Parse `A5`-style input into a coordinate.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE as usize {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE as usize {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok(Coord::new(col, row - 1))
}

/// Parse `A5 H` / `B3 V` placement input. Orientation defaults to horizontal.
pub fn parse_placement(input: &str) -> Result<(Coord, Orientation), String> {
    let mut parts = input.split_whitespace();
    let coord = parse_coord(parts.next().unwrap_or(""))?;
    let orientation = match parts.next().and_then(|s| s.chars().next()) {
        None | Some('h') | Some('H') => Orientation::Horizontal,
        Some('v') | Some('V') => Orientation::Vertical,
        Some(other) => {
            return Err(format!("Invalid orientation '{}' - use H or V", other));
        }
    };
    Ok((coord, orientation))
}

/// Read one trimmed line; `None` on end of input or a read error.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn print_header() {
    print!("      ");
    for x in 0..BOARD_SIZE as usize {
        print!(" {}", (b'A' + x as u8) as char);
    }
    println!();
}

/// Print our own board with the opponent's shots on it.
pub fn print_board(board: &Board, incoming: &HitGrid) {
    print_header();
    for y in 0..BOARD_SIZE as usize {
        print!("    {:2}", y + 1);
        for x in 0..BOARD_SIZE as usize {
            let c = Coord::new(x, y);
            let ch = match (incoming.get(c), board.ship_at(c)) {
                (Ok(Mark::Hit), _) => 'X',
                (Ok(Mark::Miss), _) => 'o',
                (_, Some(id)) => (b'0' + id) as char,
                _ => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
    println!("    Legend: 1-5=Ship  X=Hit  o=Miss  .=Water");
}

/// Print what we know about the opponent's board.
pub fn print_guess_board(attacks: &HitGrid) {
    print_header();
    for y in 0..BOARD_SIZE as usize {
        print!("    {:2}", y + 1);
        for x in 0..BOARD_SIZE as usize {
            let ch = match attacks.get(Coord::new(x, y)) {
                Ok(Mark::Hit) => 'X',
                Ok(Mark::Miss) => 'o',
                _ => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
    println!("    Legend: X=Hit  o=Miss  .=Unknown");
}

/// Display the opponent board (top) and the player's board (bottom).
pub fn print_player_view(attacks: &HitGrid, board: &Board, incoming: &HitGrid) {
    println!("Opponent board:");
    print_guess_board(attacks);
    println!("\nYour board:");
    print_board(board, incoming);
}

impl Player for CliPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        self.advisor.reset();
        self.incoming = HitGrid::new();
        println!("\n=== SHIP PLACEMENT ===");
        println!("Enter a cell and orientation (e.g. A5 H or B3 V).");
        println!("Ships extend right (H) or down (V). ENTER places the ship at random.\n");

        board.clear();
        for (i, def) in SHIPS.iter().enumerate() {
            let ship_id = i as u8 + 1;
            loop {
                print_board(board, &HitGrid::new());
                println!(
                    "\nShip {}/{}: {} (length {})",
                    ship_id,
                    NUM_SHIPS,
                    def.name(),
                    def.length()
                );
                let line = read_line("Placement (ENTER for random): ");
                let Some(line) = line.filter(|l| !l.is_empty()) else {
                    // End of input also lands here and finishes the fleet at random.
                    let p = placement::random_placement(rng, board, ship_id)?;
                    board.place(ship_id, p.origin(), p.orientation())?;
                    println!("{} placed at {}", def.name(), coord_to_string(p.origin()));
                    break;
                };
                let (origin, orientation) = match parse_placement(&line) {
                    Ok(v) => v,
                    Err(e) => {
                        println!("Error: {}", e);
                        continue;
                    }
                };
                match board.place(ship_id, origin, orientation) {
                    Ok(_) => break,
                    Err(e) => println!("Error: {}", e),
                }
            }
        }
        println!("\nAll ships placed.\n");
        self.board = *board;
        board.validate()
    }

    fn select_target(&mut self, rng: &mut SmallRng, attacks: &HitGrid) -> Option<Coord> {
        println!();
        print_player_view(attacks, &self.board, &self.incoming);
        let mut suggested = self.advisor.clone();
        let suggestion = suggested.attack(rng, attacks);
        loop {
            let prompt = format!(
                "Target [ENTER = {}, 'quit' to resign]: ",
                coord_to_string(suggestion)
            );
            let line = read_line(&prompt)?;
            if line.is_empty() {
                self.advisor = suggested;
                return Some(suggestion);
            }
            if line.eq_ignore_ascii_case("quit") {
                return None;
            }
            match parse_coord(&line) {
                Ok(c) if attacks.is_unattacked(c) => {
                    self.advisor.note_shot(c);
                    return Some(c);
                }
                Ok(_) => println!("Already attacked, choose another target."),
                Err(e) => println!("Invalid coordinate: {}", e),
            }
        }
    }

    fn handle_guess_result(&mut self, coord: Coord, result: GuessResult) {
        self.advisor.record_outcome(coord, result);
        match result {
            GuessResult::Hit => println!("HIT at {}!", coord_to_string(coord)),
            GuessResult::Miss => println!("Miss at {}.", coord_to_string(coord)),
            GuessResult::Sink(name) => println!("SUNK! You destroyed the enemy's {}!", name),
        }
    }

    fn handle_opponent_guess(&mut self, coord: Coord, result: GuessResult) {
        if let Err(e) = self.incoming.record(coord, result.is_hit()) {
            warn!("could not record enemy shot at {}: {}", coord, e);
        }
        match result {
            GuessResult::Hit => println!("Enemy hit your ship at {}", coord_to_string(coord)),
            GuessResult::Miss => println!("Enemy missed at {}", coord_to_string(coord)),
            GuessResult::Sink(name) => println!(
                "Enemy sank your {} at {}",
                name,
                coord_to_string(coord)
            ),
        }
    }

    fn handle_game_over(&mut self, status: GameStatus, own: &Board, opponent: &Board) {
        println!("\n=== GAME OVER ===");
        match status {
            GameStatus::Won => println!("VICTORY! You have sunk all enemy ships."),
            GameStatus::Lost => println!("DEFEAT. All your ships have been destroyed."),
            GameStatus::InProgress => {}
        }
        println!("\nEnemy layout:");
        print_board(opponent, &HitGrid::new());
        println!("\nYour layout:");
        print_board(own, &HitGrid::new());
    }
}
