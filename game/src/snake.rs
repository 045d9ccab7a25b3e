//! Snake abstractions.

use crate::{
    aux::*,
    segment::{self, Segment},
};
use serde::{Deserialize, Serialize};

/// Snake abstraction structure.
///
/// Body is stored head first, so `body[0]` is the head and the last cell is
/// the tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Snake {
    pub(crate) body: Vec<Cell>,

    /// Direction of snake's head.
    pub(crate) direction: Direction,

    /// Whether the next advance should lengthen the snake.
    pub(crate) growth_pending: bool,

    /// Body the snake returns to on [`reset`](Self::reset).
    spawn: Vec<Cell>,
}

impl Snake {
    /// Body every game starts with.
    pub const SPAWN: [Cell; 3] = [Cell::new(5, 10), Cell::new(4, 10), Cell::new(3, 10)];

    /// Return [`Snake`] standing still with the given head first `body`.
    ///
    /// # Panics
    /// Panics if `body` is empty.
    pub fn new(body: Vec<Cell>) -> Self {
        assert!(!body.is_empty(), "snake must have at least one cell");
        Self {
            spawn: body.clone(),
            body,
            direction: Direction::Neutral,
            growth_pending: false,
        }
    }

    /// Change snake's heading. Turning straight back is ignored, the snake
    /// would run into its own neck otherwise.
    ///
    /// Return `true` if direction was changed.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            log::trace!("ignore turn from {} to {}", self.direction, direction);
            return false;
        }
        self.direction = direction;
        true
    }

    /// Move the snake one cell in its direction.
    ///
    /// The new head is prepended and the tail cell is dropped, unless growth
    /// is pending, in which case the tail stays and the flag is cleared.
    /// A [`Neutral`](Direction::Neutral) snake doesn't move at all.
    pub fn advance(&mut self) {
        if self.direction == Direction::Neutral {
            return;
        }

        let new_head = self.head() + self.direction.delta();
        if self.growth_pending {
            self.growth_pending = false;
        } else {
            self.body.pop();
        }
        self.body.insert(0, new_head);
    }

    /// Lengthen the snake by one cell on the next [`advance`](Self::advance).
    pub fn grow(&mut self) {
        self.growth_pending = true;
    }

    /// Return the snake to its spawn body and stop it.
    pub fn reset(&mut self) {
        self.body = self.spawn.clone();
        self.direction = Direction::Neutral;
        self.growth_pending = false;
    }

    /// Check if head ran into another part of the body.
    pub fn bumped(&self) -> bool {
        let head = self.head();
        self.body[1..].iter().any(|cell| *cell == head)
    }

    /// Return `true` if any cell but the head is at `cell`.
    pub fn covers_without_head(&self, cell: Cell) -> bool {
        self.body[1..].contains(&cell)
    }

    /// Return oriented body cells, head first.
    pub fn segments(&self) -> Vec<Segment> {
        segment::orient(&self.body)
    }

    /// Return the head cell.
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Return the tail cell.
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Return body cells, head first.
    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    /// Return current direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Return `true` if the next advance will lengthen the snake.
    pub fn growth_pending(&self) -> bool {
        self.growth_pending
    }

	/// Return snake's length (amount of cells).
	pub fn len(&self) -> usize {
		self.body.len()
	}

	/// Always false, a snake has at least one cell.
	pub fn is_empty(&self) -> bool {
		self.body.is_empty()
	}

    /// Return length the snake spawns with.
    pub fn initial_len(&self) -> usize {
        self.spawn.len()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new(Self::SPAWN.to_vec())
    }
}
