//! Engine module - the board state machine
//!
//! Ties together the grid, the motion log, and the spawn RNG. A move shifts
//! every line toward the chosen edge, merging equal neighbors at most once
//! per tile per move, then spawns one random tile if anything changed. The
//! engine owns all game state; renderers read it through the accessors or
//! the snapshot API and never mutate it.
//!
//! Calls are synchronous and atomic from the caller's perspective: a move
//! fully computes the new board, motion log, and spawn before returning.

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::board::Board;
use crate::motion::MotionLog;
use crate::rng::{spawn_value, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{
    Cell, Direction, MotionEvent, SpawnEvent, BOARD_SIZE, CELL_COUNT, INITIAL_SPAWN_COUNT,
};

/// Result of applying a directional move
///
/// `changed == false` is a normal outcome (the shift had no effect), not a
/// failure. `game_over` is only raised together with a rejected move: the
/// board is terminal when a shift changes nothing and no direction could.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any tile slid or merged
    pub changed: bool,
    /// Net tile transitions of this move, one event per moved tile
    pub motions: ArrayVec<MotionEvent, CELL_COUNT>,
    /// The tile spawned after a valid move
    pub spawn: Option<SpawnEvent>,
    /// Whether the session has reached a terminal state
    pub game_over: bool,
}

/// Session statistics
///
/// Move count doubles as the score; both values are monotonically
/// non-decreasing for the lifetime of one game and reset on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub move_count: u32,
    pub max_tile: u32,
}

/// Complete game state
///
/// Single-owner structure; not internally locked. Callers must not
/// interleave concurrent moves against the same instance.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Copy of the board taken at move start; cells that move during the
    /// shift are cleared here so a renderer can tell static tiles from
    /// animating ones.
    static_board: Board,
    motion: MotionLog,
    /// Most recent spawn (consumed by the renderer)
    spawn: Option<SpawnEvent>,
    rng: SimpleRng,
    move_count: u32,
    max_tile: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The board starts with four random tiles.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            board: Board::new(),
            static_board: Board::new(),
            motion: MotionLog::new(),
            spawn: None,
            rng: SimpleRng::new(seed),
            move_count: 0,
            max_tile: 0,
            game_over: false,
        };
        state.reset();
        state
    }

    /// Create a game from a prepared board, without initial spawns
    ///
    /// For tests and embedding tools that need a specific position.
    pub fn from_board(board: Board, seed: u32) -> Self {
        Self {
            static_board: board.clone(),
            board,
            motion: MotionLog::new(),
            spawn: None,
            rng: SimpleRng::new(seed),
            move_count: 0,
            max_tile: 0,
            game_over: false,
        }
    }

    /// Restart: clear the board, spawn four fresh tiles, zero the stats
    ///
    /// The RNG stream position is kept, so restarting does not replay the
    /// previous game's spawns.
    pub fn reset(&mut self) {
        self.board.clear();
        self.static_board.clear();
        self.motion.clear();
        self.spawn = None;
        self.move_count = 0;
        self.max_tile = 0;
        self.game_over = false;

        for _ in 0..INITIAL_SPAWN_COUNT {
            let _ = self.spawn_random_tile();
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Tiles that did not move during the last shift (renderer hint)
    pub fn static_board(&self) -> &Board {
        &self.static_board
    }

    /// Net tile transitions of the last move
    pub fn motions(&self) -> &[MotionEvent] {
        self.motion.events()
    }

    /// The most recently spawned tile
    pub fn last_spawn(&self) -> Option<SpawnEvent> {
        self.spawn
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn max_tile(&self) -> u32 {
        self.max_tile
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current RNG stream state (for reproducing a game)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            move_count: self.move_count,
            max_tile: self.max_tile,
        }
    }

    /// Spawn one tile at a uniformly chosen empty cell
    ///
    /// Value is 2 or 4 with a 3:1 split. Returns `None` without touching the
    /// board when no empty cell exists; callers that verified space first
    /// can treat that as unreachable.
    pub fn spawn_random_tile(&mut self) -> Option<SpawnEvent> {
        let candidates = self.board.empty_cells();
        if candidates.is_empty() {
            return None;
        }

        let pick = self.rng.next_range(candidates.len() as u32) as usize;
        let (x, y) = candidates[pick];
        let value = spawn_value(&mut self.rng);

        self.board.set(x as i8, y as i8, Cell::Tile(value));
        let event = SpawnEvent { x, y, value };
        self.spawn = Some(event);
        trace!(x, y, value, "tile spawned");
        Some(event)
    }

    /// Apply a directional move
    ///
    /// Shifts and merges every line toward the edge, coalescing per-tile
    /// motion for the renderer. A valid move spawns one tile and bumps the
    /// stats; an invalid move reports `changed: false` and, when no
    /// direction could change the board either, latches the terminal state.
    /// Once terminal, every further move is rejected until [`reset`].
    ///
    /// [`reset`]: GameState::reset
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome {
                changed: false,
                motions: ArrayVec::new(),
                spawn: None,
                game_over: true,
            };
        }

        self.static_board = self.board.clone();
        self.motion.clear();

        let mut moved = false;
        for lane in 0..BOARD_SIZE {
            self.compact_lane(direction, lane, &mut moved);
        }

        // Merge tags expire with the move; merged tiles are ordinary tiles
        // again on the next shift.
        self.board.unmark_merged();

        if moved {
            let spawn = self.spawn_random_tile();
            self.move_count += 1;
            self.max_tile = self.board.max_tile();
            debug!(
                direction = direction.as_str(),
                move_count = self.move_count,
                max_tile = self.max_tile,
                "valid move"
            );
            MoveOutcome {
                changed: true,
                motions: self.motion.events().iter().copied().collect(),
                spawn,
                game_over: false,
            }
        } else {
            let game_over = !self.has_any_move();
            self.game_over = game_over;
            debug!(direction = direction.as_str(), game_over, "invalid move");
            MoveOutcome {
                changed: false,
                motions: ArrayVec::new(),
                spawn: None,
                game_over,
            }
        }
    }

    /// Compact one line toward the target edge until it stops changing
    ///
    /// Scans from the cell nearest the edge outward; a slide or merge can
    /// open a gap behind it, so the line is rescanned until a full pass
    /// changes nothing (bounded by the line length).
    fn compact_lane(&mut self, direction: Direction, lane: u8, moved: &mut bool) {
        let (dx, dy) = direction.step();

        let mut recheck = true;
        while recheck {
            recheck = false;

            for depth in 1..BOARD_SIZE {
                let (x, y) = lane_cell(direction, lane, depth);
                let Some(cell) = self.board.get(x, y) else {
                    continue;
                };
                if cell.is_empty() {
                    continue;
                }
                let (nx, ny) = (x + dx, y + dy);
                let Some(next) = self.board.get(nx, ny) else {
                    continue;
                };

                match (cell, next) {
                    // Empty neighbor toward the edge: slide one cell.
                    (_, Cell::Empty) => {
                        self.board.set(x, y, Cell::Empty);
                        self.board.set(nx, ny, cell);
                        self.motion.record(
                            direction,
                            x as u8,
                            y as u8,
                            nx as u8,
                            ny as u8,
                            cell.value(),
                        );
                        self.static_board.set(x, y, Cell::Empty);
                        *moved = true;
                        recheck = true;
                    }
                    // Equal unmerged neighbor: merge. The destination is
                    // merge-proof for the remainder of this move.
                    (Cell::Tile(value), Cell::Tile(next_value)) if value == next_value => {
                        self.board.set(x, y, Cell::Empty);
                        self.board.set(nx, ny, Cell::Merged(value + next_value));
                        self.motion
                            .record(direction, x as u8, y as u8, nx as u8, ny as u8, value);
                        self.static_board.set(x, y, Cell::Empty);
                        *moved = true;
                        recheck = true;
                    }
                    _ => {}
                }
            }
        }
    }

    /// Whether at least one of the four shifts would change the board
    ///
    /// Pure read-only check and the sole terminal-state oracle: a false
    /// return means the session is over. Scans every adjacent pair in each
    /// direction for an empty inward neighbor or an equal-valued merge
    /// partner.
    pub fn has_any_move(&self) -> bool {
        for direction in Direction::all() {
            let (dx, dy) = direction.step();
            for lane in 0..BOARD_SIZE {
                for depth in 1..BOARD_SIZE {
                    let (x, y) = lane_cell(direction, lane, depth);
                    let Some(cell) = self.board.get(x, y) else {
                        continue;
                    };
                    if cell.is_empty() {
                        continue;
                    }
                    let Some(next) = self.board.get(x + dx, y + dy) else {
                        continue;
                    };
                    match (cell, next) {
                        (_, Cell::Empty) => return true,
                        (Cell::Tile(value), Cell::Tile(next_value)) if value == next_value => {
                            return true
                        }
                        _ => {}
                    }
                }
            }
        }
        false
    }

    /// Fill a reusable snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        self.static_board.write_grid(&mut out.static_board);
        out.motions.clear();
        out.motions.extend(self.motion.events().iter().copied());
        out.spawn = self.spawn;
        out.move_count = self.move_count;
        out.max_tile = self.max_tile;
        out.game_over = self.game_over;
        out.seed = self.rng.state();
    }

    /// Plain-value snapshot for the renderer
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Cell at `depth` steps from the target edge of `direction`, within `lane`
///
/// Depth 0 is the edge cell itself; the move scan starts at depth 1 and
/// inspects the neighbor one step toward the edge.
fn lane_cell(direction: Direction, lane: u8, depth: u8) -> (i8, i8) {
    let lane = lane as i8;
    let depth = depth as i8;
    let far = (BOARD_SIZE as i8) - 1 - depth;
    match direction {
        Direction::Up => (lane, depth),
        Direction::Down => (lane, far),
        Direction::Left => (depth, lane),
        Direction::Right => (far, lane),
    }
}
