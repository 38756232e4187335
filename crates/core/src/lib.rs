//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board engine of the sliding-tile merge puzzle:
//! the grid, the move algorithm, the motion log for animation, and the
//! terminal-state detector. It has **zero dependencies** on UI, networking,
//! or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for move processing
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 tile grid with flat-array storage and spawn candidates
//! - [`engine`]: complete game state, the move algorithm, terminal detection
//! - [`motion`]: per-move motion log with chained-step coalescing
//! - [`rng`]: seedable LCG and the 3:1 spawn-value draw
//! - [`snapshot`]: plain-value frames for renderers
//!
//! # Game Rules
//!
//! - A move shifts every line toward the chosen edge until nothing can slide
//! - Equal neighbors merge into their sum, at most once per tile per move
//! - A valid move spawns one tile (2 or 4, 3:1) at a random empty cell
//! - A move that changes nothing is rejected; when no direction could change
//!   the board, the session is over
//!
//! # Example
//!
//! ```
//! use twenty48_core::GameState;
//! use twenty48_core::types::Direction;
//!
//! // Create a game; the board starts with four random tiles.
//! let mut game = GameState::new(12345);
//!
//! let outcome = game.apply_move(Direction::Left);
//! if outcome.changed {
//!     // One motion event per moved tile, plus the spawned tile.
//!     assert_eq!(game.move_count(), 1);
//!     assert!(outcome.spawn.is_some());
//! }
//! ```

pub mod board;
pub mod engine;
pub mod motion;
pub mod rng;
pub mod snapshot;

pub use twenty48_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{GameState, MoveOutcome, Stats};
pub use motion::MotionLog;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
