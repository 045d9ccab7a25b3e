//! Game grid abstractions.
//!
//! Grid is a square of `size` x `size` cells. (0, 0) cell is in the top left
//! corner, X-axis is going right and Y-axis is going down from it.

use crate::aux::Cell;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Square game grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
	/// Number of cells along each side. Valid coordinates are in `0..size`.
	pub size: usize,
}

impl Grid {
	/// Default size of the grid used with [`Default`](Self::default) trait
	/// implementation.
	pub const DEFAULT_SIZE: usize = 20;

	/// Return a new [`Grid`].
	pub fn new(size: usize) -> Self {
		Self { size }
	}

	/// Return `true` if `cell` lies inside the grid.
	pub fn contains(&self, cell: Cell) -> bool {
		let n = self.size as i32;
		(0..n).contains(&cell.x) && (0..n).contains(&cell.y)
	}

	/// Generate random cell framed by grid. Both coordinates are drawn
	/// independently, nothing occupying the grid is taken into account.
	pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
		Cell::new(
			rng.gen_range(0..self.size) as i32,
			rng.gen_range(0..self.size) as i32,
		)
	}

	/// Iterate over every cell of the grid row by row.
	pub fn cells(&self) -> impl Iterator<Item = Cell> {
		let n = self.size as i32;
		(0..n).flat_map(move |y| (0..n).map(move |x| Cell::new(x, y)))
	}
}

impl Default for Grid {
	fn default() -> Self {
		Self::new(Self::DEFAULT_SIZE)
	}
}

impl fmt::Display for Grid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.size, self.size)
	}
}
