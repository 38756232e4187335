//! Motion module - per-move tile motion log with chained-step coalescing
//!
//! The move algorithm shifts tiles one cell at a time and may revisit a line
//! several times before it reaches a fixed point, so a single tile can take
//! multiple single-cell steps within one move. A renderer wants one event per
//! tile spanning its net displacement, e.g. steps `1 -> 2` and `2 -> 3`
//! collapse into `1 -> 3` rather than two queued animations.

use arrayvec::ArrayVec;

use crate::types::{Direction, MotionEvent, CELL_COUNT};

/// Accumulates the tile transitions of the move in progress
///
/// Cleared at the start of every move; at most one event per tile survives
/// coalescing, so capacity equals the cell count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotionLog {
    events: ArrayVec<MotionEvent, CELL_COUNT>,
}

impl MotionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            events: ArrayVec::new(),
        }
    }

    /// Discard all recorded events
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Recorded events, one per moved tile
    pub fn events(&self) -> &[MotionEvent] {
        &self.events
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no tile has moved this move
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Record one single-cell step of a tile moving toward `direction`
    ///
    /// If the step continues a motion already in the log (the stored event's
    /// origin lies strictly behind the step's source in travel order, on the
    /// same line), the stored destination is rewritten instead of appending
    /// a second event. Every matching event is rewritten; tiles further back
    /// rewrite theirs again when their own next step is recorded, so the log
    /// converges to one net event per tile. `value` is the value the tile
    /// carries at this step - the pre-merge value when the step merges into
    /// a target.
    pub fn record(
        &mut self,
        direction: Direction,
        from_x: u8,
        from_y: u8,
        to_x: u8,
        to_y: u8,
        value: u32,
    ) {
        let mut chained = false;

        for event in &mut self.events {
            let continues = match direction {
                Direction::Up => event.from_x == from_x && event.from_y > from_y,
                Direction::Down => event.from_x == from_x && event.from_y < from_y,
                Direction::Right => event.from_x < from_x && event.from_y == from_y,
                Direction::Left => event.from_x > from_x && event.from_y == from_y,
            };
            if continues {
                event.to_x = to_x;
                event.to_y = to_y;
                chained = true;
            }
        }

        if !chained {
            self.events.push(MotionEvent {
                from_x,
                from_y,
                to_x,
                to_y,
                value,
            });
        }
    }
}
