//! Fruit abstractions.

use crate::{aux::Cell, grid::Grid};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fruit which is going to be eaten by a snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Fruit {
    cell: Cell,

    /// Number printed on the fruit in the quiz variant.
    value: Option<i32>,
}

impl Fruit {
    /// Return a new [`Fruit`] at `cell`.
    pub fn at(cell: Cell, value: Option<i32>) -> Self {
        Self { cell, value }
    }

    /// Return a new [`Fruit`] at a random cell of `grid`.
    pub fn random<R: Rng + ?Sized>(grid: &Grid, value: Option<i32>, rng: &mut R) -> Self {
        Self::at(grid.random_cell(rng), value)
    }

    /// Move the fruit to a random cell of `grid`.
    ///
    /// The snake and other fruits aren't checked, so the fruit may land
    /// under them.
    pub fn randomize<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        self.cell = grid.random_cell(rng);
    }

	/// Return fruit's cell.
	pub fn cell(&self) -> Cell {
		self.cell
	}

	/// Return fruit's value.
	pub fn value(&self) -> Option<i32> {
		self.value
	}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn randomize_stays_on_grid() {
        let grid = Grid::new(20);
        let mut rng = StdRng::seed_from_u64(42);
        let mut fruit = Fruit::random(&grid, Some(7), &mut rng);
        for _ in 0..200 {
            fruit.randomize(&grid, &mut rng);
            assert!(grid.contains(fruit.cell()));
            assert_eq!(fruit.value(), Some(7));
        }
    }

    #[test]
    fn randomize_reaches_whole_grid() {
        let grid = Grid::new(2);
        let mut rng = StdRng::seed_from_u64(1);
        let mut fruit = Fruit::at(Cell::new(0, 0), None);
        let mut seen = Vec::new();
        for _ in 0..200 {
            fruit.randomize(&grid, &mut rng);
            if !seen.contains(&fruit.cell()) {
                seen.push(fruit.cell());
            }
        }
        assert_eq!(seen.len(), 4);
    }
}
