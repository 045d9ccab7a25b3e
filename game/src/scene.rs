//! Snapshot of the game handed to a renderer.

use crate::{fruit::Fruit, grid::Grid, segment::Segment, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
	pub grid: Grid,

	/// Snake cells, head first.
	pub segments: Vec<Segment>,
	pub fruits: Vec<Fruit>,

	/// Number of cells grown since spawn.
	pub score: usize,

	/// Question text of the quiz variant.
	pub question: Option<String>,
	pub paused: bool,
}

impl Scene {
	/// Convert [`Scene`] to json.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Convert json string to [`Scene`].
	pub fn from_json<T: AsRef<str>>(string: T) -> Result<Self> {
		Ok(serde_json::from_str(string.as_ref())?)
	}
}

impl fmt::Display for Scene {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{} grid, score {}{}", self.grid, self.score, if self.paused { ", paused" } else { "" })?;
		if let Some(question) = &self.question {
			writeln!(f, "question: {}", question)?;
		}
		for (i, segment) in self.segments.iter().enumerate() {
			match segment.kind {
				Some(kind) => writeln!(f, "Segment[{}] at {} drawn as {}", i, segment.cell, kind)?,
				None => writeln!(f, "Segment[{}] at {}", i, segment.cell)?,
			}
		}
		for (i, fruit) in self.fruits.iter().enumerate() {
			match fruit.value() {
				Some(value) => writeln!(f, "Fruit[{}] at {} with value {}", i, fruit.cell(), value)?,
				None => writeln!(f, "Fruit[{}] at {}", i, fruit.cell())?,
			}
		}
		Ok(())
	}
}
