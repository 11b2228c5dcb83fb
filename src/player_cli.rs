#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;
use std::vec::Vec;

use rand::rngs::SmallRng;

use crate::{
    bitboard::MoveGrid,
    combat::Resolution,
    common::{CellMark, GridLocation, PlacementError},
    config::GameConfig,
    game::{GameEvent, Match, Move, Side},
    grid::Grid,
    layout::pirate_fleet_layout,
    player::{Player, RandomPlayer},
};

/// Interactive player reading moves from stdin.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a location as column letter plus 1-based row, e.g. `D5`.
pub fn coord_to_string(loc: GridLocation) -> String {
    let col = (b'A' + loc.x as u8) as char;
    std::format!("{}{}", col, loc.y + 1)
}

/// Parse `D5`-style input. Bounds are checked by the match.
pub fn parse_coord(input: &str) -> Option<GridLocation> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let row: i32 = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(GridLocation::new((col_ch as u8 - b'A') as i32, row - 1))
}

/// Parse a full move command: a coordinate, `hit` or `mine`.
pub fn parse_move(input: &str) -> Option<Move> {
    match input.trim().to_ascii_lowercase().as_str() {
        "hit" => Some(Move::GuaranteedHit),
        "mine" => Some(Move::GuaranteedMine),
        other => parse_coord(other).map(Move::Normal),
    }
}

fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

impl Player for CliPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut Grid,
        config: &GameConfig,
    ) -> Result<(), PlacementError> {
        std::print!("Press enter for the stock layout, or type 'r' for a random one: ");
        let _ = io::stdout().flush();
        let random = read_line().map_or(false, |l| l.trim().eq_ignore_ascii_case("r"));
        if !random {
            let mut trial = grid.clone();
            match pirate_fleet_layout(&mut trial) {
                Ok(()) => {
                    *grid = trial;
                    return Ok(());
                }
                Err(e) => {
                    std::println!("Stock layout does not fit this grid ({}), placing at random", e)
                }
            }
        }
        RandomPlayer::new().place_fleet(rng, grid, config)
    }

    fn select_move(&mut self, rng: &mut SmallRng, performed: &MoveGrid) -> Option<Move> {
        let suggestion = match RandomPlayer::new().select_move(rng, performed)? {
            Move::Normal(loc) => loc,
            _ => return None,
        };
        loop {
            std::print!(
                "Enter target, 'hit' or 'mine' [{}]: ",
                coord_to_string(suggestion)
            );
            let _ = io::stdout().flush();
            let line = read_line()?;
            if line.trim().is_empty() {
                return Some(Move::Normal(suggestion));
            }
            match parse_move(&line) {
                Some(Move::Normal(loc)) if performed.contains(loc).unwrap_or(true) => {
                    std::println!("{} is off the grid or already attacked", line.trim());
                }
                Some(mv) => return Some(mv),
                None => std::println!("Invalid input"),
            }
        }
    }

    fn handle_resolution(&mut self, res: &Resolution) {
        std::println!("You {}", describe_resolution(res));
    }

    fn handle_opponent_resolution(&mut self, res: &Resolution) {
        std::println!("Opponent {}", describe_resolution(res));
    }
}

/// One line about a resolved move. Tallies are only quoted when the move
/// counted towards them.
pub fn describe_resolution(res: &Resolution) -> String {
    let target = coord_to_string(res.location);
    if res.tallied {
        std::format!(
            "fired at {} -> {} hit(s), {} miss(es)",
            target,
            res.hits(),
            res.misses()
        )
    } else if res.is_ship_hit() {
        std::format!("set off a mine at {} and struck a ship", target)
    } else {
        std::format!("set off a mine at {}", target)
    }
}

/// What has been drawn on one grid so far.
#[derive(Debug, Clone)]
pub struct BoardView {
    width: usize,
    height: usize,
    marks: Vec<Option<CellMark>>,
    revealed: Vec<bool>,
}

impl BoardView {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            marks: std::vec![None; width * height],
            revealed: std::vec![false; width * height],
        }
    }

    fn index(&self, loc: GridLocation) -> Option<usize> {
        if loc.x < 0 || loc.y < 0 || loc.x as usize >= self.width || loc.y as usize >= self.height
        {
            None
        } else {
            Some(loc.y as usize * self.width + loc.x as usize)
        }
    }

    /// Keeps the strongest mark per cell: ship hit, then hazard, then miss.
    pub fn mark(&mut self, loc: GridLocation, mark: CellMark) {
        if let Some(i) = self.index(loc) {
            if self.marks[i].map_or(true, |old| rank(mark) >= rank(old)) {
                self.marks[i] = Some(mark);
            }
        }
    }

    pub fn reveal(&mut self, cells: &[GridLocation]) {
        for &loc in cells {
            if let Some(i) = self.index(loc) {
                self.revealed[i] = true;
            }
        }
    }

    pub fn mark_at(&self, loc: GridLocation) -> Option<CellMark> {
        self.index(loc).and_then(|i| self.marks[i])
    }

    pub fn is_revealed(&self, loc: GridLocation) -> bool {
        self.index(loc).map_or(false, |i| self.revealed[i])
    }
}

/// Text rendering sink for a human-versus-computer match.
pub struct TerminalSink {
    human: BoardView,
    computer: BoardView,
    /// Print narrative lines as events arrive.
    pub verbose: bool,
}

impl TerminalSink {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            human: BoardView::new(config.width, config.height),
            computer: BoardView::new(config.width, config.height),
            verbose: true,
        }
    }

    pub fn view(&self, owner: Side) -> &BoardView {
        match owner {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    fn view_mut(&mut self, owner: Side) -> &mut BoardView {
        match owner {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }

    /// Apply every queued event of `game`.
    pub fn drain(&mut self, game: &mut Match) {
        for event in game.drain_events() {
            self.apply(&event);
        }
    }

    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::CellMarked {
                owner,
                location,
                mark,
            } => self.view_mut(*owner).mark(*location, *mark),
            GameEvent::CellsRevealed { owner, cells } => self.view_mut(*owner).reveal(cells),
            GameEvent::PenaltyTriggered { attacker, penalty } => {
                if self.verbose {
                    std::println!(
                        "{:?} hit a hazard at {}: {}",
                        attacker,
                        coord_to_string(penalty.location()),
                        penalty.penalty_text()
                    );
                }
            }
            GameEvent::ShipSunk { attacker, location } => {
                if self.verbose {
                    std::println!("{:?} sank a ship at {}!", attacker, coord_to_string(*location));
                }
            }
            GameEvent::PlayerWon(side) => {
                if self.verbose {
                    std::println!("{:?} wins!", side);
                }
            }
            GameEvent::PlayerMoved(_) => {}
        }
    }

    /// Print the computer's grid as seen by the human (top) and the human's
    /// own grid (bottom).
    pub fn print(&self, game: &Match) {
        std::println!("Enemy waters:");
        print_grid(game.side(Side::Computer).grid(), &self.computer, false);
        std::println!("\nYour fleet:");
        print_grid(game.side(Side::Human).grid(), &self.human, true);
    }
}

fn rank(mark: CellMark) -> u8 {
    match mark {
        CellMark::Miss => 0,
        CellMark::MineHit | CellMark::SeaMonsterHit => 1,
        CellMark::ShipHit => 2,
    }
}

fn glyph(mark: CellMark) -> char {
    match mark {
        CellMark::Miss => 'o',
        CellMark::ShipHit => 'X',
        CellMark::MineHit => '*',
        CellMark::SeaMonsterHit => '~',
    }
}

/// Print `grid` with the marks of `view`. Unattacked entities are only drawn
/// when `reveal_all` is set or the cell has been revealed.
pub fn print_grid(grid: &Grid, view: &BoardView, reveal_all: bool) {
    std::print!("   ");
    for x in 0..grid.width() {
        std::print!(" {}", (b'A' + x as u8) as char);
    }
    std::println!();
    for y in 0..grid.height() as i32 {
        std::print!("{:2} ", y + 1);
        for x in 0..grid.width() as i32 {
            let loc = GridLocation::new(x, y);
            let show = reveal_all || view.is_revealed(loc);
            let ch = match (view.mark_at(loc), grid.cell(loc)) {
                (Some(mark), _) => glyph(mark),
                (None, Some(cell)) if show && cell.mine.is_some() => 'M',
                (None, Some(cell)) if show && cell.seamonster.is_some() => 'N',
                (None, Some(cell)) if show && cell.ship.is_some() => 'S',
                _ => '.',
            };
            std::print!(" {}", ch);
        }
        std::println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_round_trip_through_text() {
        let loc = GridLocation::new(3, 4);
        assert_eq!(coord_to_string(loc), "D5");
        assert_eq!(parse_coord("d5"), Some(loc));
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("5"), None);
    }

    #[test]
    fn special_moves_parse() {
        assert_eq!(parse_move(" HIT "), Some(Move::GuaranteedHit));
        assert_eq!(parse_move("mine"), Some(Move::GuaranteedMine));
        assert_eq!(parse_move("B2"), Some(Move::Normal(GridLocation::new(1, 1))));
    }

    #[test]
    fn detonation_does_not_quote_tallies() {
        let config = GameConfig::default();
        let mut grid = Grid::new(&config).unwrap();
        pirate_fleet_layout(&mut grid).unwrap();
        let res = crate::combat::detonate_mine(&mut grid, GridLocation::new(6, 0)).unwrap();
        assert_eq!(describe_resolution(&res), "set off a mine at G1");

        let res = crate::combat::resolve_attack(&mut grid, GridLocation::new(0, 7));
        assert_eq!(describe_resolution(&res), "fired at A8 -> 0 hit(s), 1 miss(es)");
    }

    #[test]
    fn stronger_marks_win() {
        let mut view = BoardView::new(4, 4);
        let loc = GridLocation::new(1, 1);
        view.mark(loc, CellMark::MineHit);
        view.mark(loc, CellMark::Miss);
        assert_eq!(view.mark_at(loc), Some(CellMark::MineHit));
        view.mark(loc, CellMark::ShipHit);
        view.mark(loc, CellMark::SeaMonsterHit);
        assert_eq!(view.mark_at(loc), Some(CellMark::ShipHit));
    }
}
