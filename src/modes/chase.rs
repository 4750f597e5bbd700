//! Panda-Man: a Pac-Man style chase through a small fixed maze
//!
//! The panda eats dots one cell per key press while a gopher closes in on a
//! fixed cooldown. The gopher is greedy: it steps along whichever axis has the
//! larger offset to the panda and simply waits if a wall is in the way.

use log::info;

use crate::game::ModeEvent;
use crate::input_system::GameAction;

pub const MAZE_ROWS: usize = 11;
pub const MAZE_COLS: usize = 20;
/// Dots needed to win a round
pub const WIN_SCORE: u32 = 80;
/// Pursuer cooldown with no wins today
pub const BASE_COOLDOWN: u32 = 30;
/// Cooldown shaved off per win recorded today
pub const COOLDOWN_PER_WIN: u32 = 2;
pub const MIN_COOLDOWN: u32 = 5;

const PLAYER_START: GridPos = GridPos { col: 1, row: 1 };
const PURSUER_START: GridPos = GridPos { col: 10, row: 5 };

// '#' wall, '.' dot, ' ' empty floor
const LAYOUT: [&str; MAZE_ROWS] = [
    "####################",
    "#.....#......#.....#",
    "#.###.#.####.#.###.#",
    "#.#..............#.#",
    "#.#.###.####.###.#.#",
    "#........  ........#",
    "#.#.###.####.###.#.#",
    "#.#..............#.#",
    "#.###.#.####.#.###.#",
    "#.....#......#.....#",
    "####################",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Empty,
    Dot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub col: i32,
    pub row: i32,
}

impl GridPos {
    pub fn offset(&self, dx: i32, dy: i32) -> GridPos {
        GridPos {
            col: self.col + dx,
            row: self.row + dy,
        }
    }
}

/// The maze cells, row-major
#[derive(Debug, Clone)]
pub struct Maze {
    cells: [[Cell; MAZE_COLS]; MAZE_ROWS],
}

impl Maze {
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; MAZE_COLS]; MAZE_ROWS];
        for (row, line) in LAYOUT.iter().enumerate() {
            for (col, ch) in line.chars().enumerate().take(MAZE_COLS) {
                cells[row][col] = match ch {
                    '#' => Cell::Wall,
                    '.' => Cell::Dot,
                    _ => Cell::Empty,
                };
            }
        }
        Maze { cells }
    }

    /// Cell at `pos`, or `None` outside the grid
    pub fn get(&self, pos: GridPos) -> Option<Cell> {
        if pos.col < 0 || pos.row < 0 {
            return None;
        }
        self.cells
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
    }

    /// True if `pos` is inside the grid and not a wall
    pub fn is_open(&self, pos: GridPos) -> bool {
        matches!(self.get(pos), Some(Cell::Empty | Cell::Dot))
    }

    /// Clears a dot at `pos`, returning whether there was one
    fn eat(&mut self, pos: GridPos) -> bool {
        if self.get(pos) == Some(Cell::Dot) {
            self.cells[pos.row as usize][pos.col as usize] = Cell::Empty;
            true
        } else {
            false
        }
    }

    pub fn dots_remaining(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Dot)
            .count()
    }

    /// Iterate `(pos, cell)` over the whole grid
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().map(move |(col, cell)| {
                (
                    GridPos {
                        col: col as i32,
                        row: row as i32,
                    },
                    *cell,
                )
            })
        })
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::new()
    }
}

/// Pursuer cooldown for a given number of wins earlier today
pub fn cooldown_for_wins(wins_today: u32) -> u32 {
    BASE_COOLDOWN
        .saturating_sub(wins_today.saturating_mul(COOLDOWN_PER_WIN))
        .max(MIN_COOLDOWN)
}

#[derive(Debug, Clone)]
pub struct ChaseGame {
    pub maze: Maze,
    pub player: GridPos,
    pub pursuer: GridPos,
    pub pursuer_timer: u32,
    pub pursuer_cooldown: u32,
    pub score: u32,
    pub game_over: bool,
    pub won: bool,
}

impl ChaseGame {
    pub fn new(wins_today: u32) -> Self {
        ChaseGame {
            maze: Maze::new(),
            player: PLAYER_START,
            pursuer: PURSUER_START,
            pursuer_timer: 0,
            pursuer_cooldown: cooldown_for_wins(wins_today),
            score: 0,
            game_over: false,
            won: false,
        }
    }

    /// Fresh maze; difficulty picked from today's wins
    pub fn restart(&mut self, wins_today: u32) {
        *self = ChaseGame::new(wins_today);
    }

    pub fn is_finished(&self) -> bool {
        self.game_over || self.won
    }

    pub fn update(&mut self, actions: &[GameAction], wins_today: u32) -> Vec<ModeEvent> {
        let mut events = Vec::new();

        if self.is_finished() {
            if actions.contains(&GameAction::Interact) {
                self.restart(wins_today);
            }
            return events;
        }

        for action in actions {
            let (dx, dy) = match action {
                GameAction::Left => (-1, 0),
                GameAction::Right => (1, 0),
                GameAction::Up => (0, -1),
                GameAction::Down => (0, 1),
                _ => continue,
            };
            if self.move_player(dx, dy) {
                events.push(ModeEvent::ChaseWon);
                break;
            }
        }

        if !self.won {
            self.pursuer_timer += 1;
            if self.pursuer_timer > self.pursuer_cooldown {
                self.pursuer_timer = 0;
                self.step_pursuer();
            }

            if self.player == self.pursuer {
                info!("Caught by the gopher with {} dots", self.score);
                self.game_over = true;
            }
        }

        events
    }

    /// Returns true when this move wins the round
    fn move_player(&mut self, dx: i32, dy: i32) -> bool {
        let target = self.player.offset(dx, dy);
        if !self.maze.is_open(target) {
            return false;
        }

        self.player = target;
        if self.maze.eat(target) {
            self.score += 1;
            if self.score >= WIN_SCORE {
                info!("Panda-Man cleared with {} dots", self.score);
                self.won = true;
                return true;
            }
        }
        false
    }

    fn step_pursuer(&mut self) {
        let dx = self.player.col - self.pursuer.col;
        let dy = self.player.row - self.pursuer.row;

        let (mx, my) = if dx.abs() > dy.abs() {
            (dx.signum(), 0)
        } else if dy > 0 {
            (0, 1)
        } else {
            (0, -1)
        };

        let target = self.pursuer.offset(mx, my);
        if self.maze.is_open(target) {
            self.pursuer = target;
        }
    }
}
