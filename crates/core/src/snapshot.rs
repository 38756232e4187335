//! Snapshot module - plain-value frame handed to renderers
//!
//! A renderer reads one [`GameSnapshot`] per frame instead of borrowing the
//! engine's internals. Grids are value matrices with 0 meaning empty; the
//! snapshot stays valid after the engine mutates, it is simply stale.

use arrayvec::ArrayVec;

use crate::types::{MotionEvent, SpawnEvent, BOARD_SIZE, CELL_COUNT};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Current tile values, 0 = empty
    pub board: [[u32; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    /// Tiles that did not move during the last shift, 0 = empty or moved
    pub static_board: [[u32; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    /// Net tile transitions of the last move
    pub motions: ArrayVec<MotionEvent, CELL_COUNT>,
    /// The most recently spawned tile
    pub spawn: Option<SpawnEvent>,
    pub move_count: u32,
    pub max_tile: u32,
    pub game_over: bool,
    /// RNG stream state at snapshot time
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u32; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        self.static_board = [[0u32; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        self.motions.clear();
        self.spawn = None;
        self.move_count = 0;
        self.max_tile = 0;
        self.game_over = false;
        self.seed = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u32; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            static_board: [[0u32; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            motions: ArrayVec::new(),
            spawn: None,
            move_count: 0,
            max_tile: 0,
            game_over: false,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cleared() {
        let snapshot = GameSnapshot::default();
        assert_eq!(snapshot.board, [[0u32; 4]; 4]);
        assert!(snapshot.motions.is_empty());
        assert!(snapshot.spawn.is_none());
        assert!(!snapshot.game_over);
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut snapshot = GameSnapshot::default();
        snapshot.board[1][2] = 8;
        snapshot.move_count = 3;
        snapshot.game_over = true;

        snapshot.clear();

        assert_eq!(snapshot, GameSnapshot::default());
    }
}
