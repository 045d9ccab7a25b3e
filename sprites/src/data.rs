//! Json sidecar file with sprite rectangles.
//!
//! The file is a plain json array of `{"name", "x", "y", "w", "h"}` objects
//! in the order sprites were added.

use crate::{error::SpriteError, rect::SpriteRect, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Default sidecar file name.
pub const DATA_FILE: &str = "sprite_data.json";

/// Ordered list of recorded sprites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteSheetData {
	sprites: Vec<SpriteRect>,
}

impl SpriteSheetData {
	/// Load sprites from `path`. A missing file gives empty data.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		if !path.exists() {
			info!("no sprite data at {}, starting empty", path.display());
			return Ok(Self::default());
		}
		let data: Self = serde_json::from_str(&fs::read_to_string(path)?)?;
		info!("loaded {} sprites from {}", data.len(), path.display());
		Ok(data)
	}

	/// Save sprites to `path` as pretty printed json.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		fs::write(path, serde_json::to_string_pretty(self)?)?;
		info!("saved {} sprites to {}", self.len(), path.display());
		Ok(())
	}

	/// Return name for the next unnamed sprite, like `sprite_007`.
	pub fn next_name(&self) -> String {
		format!("sprite_{:03}", self.sprites.len())
	}

	/// Record a new sprite. Names must be unique, each one becomes a file.
	pub fn push(&mut self, rect: SpriteRect) -> Result<()> {
		if self.get(&rect.name).is_some() {
			return Err(Box::new(SpriteError::DuplicateName(rect.name)));
		}
		self.sprites.push(rect);
		Ok(())
	}

	/// Forget the most recently added sprite.
	pub fn pop(&mut self) -> Option<SpriteRect> {
		self.sprites.pop()
	}

	/// Forget sprite called `name`.
	pub fn remove(&mut self, name: &str) -> Result<SpriteRect> {
		match self.sprites.iter().position(|s| s.name == name) {
			Some(index) => Ok(self.sprites.remove(index)),
			None => Err(Box::new(SpriteError::UnknownSprite(name.to_string()))),
		}
	}

	/// Forget all sprites.
	pub fn clear(&mut self) {
		self.sprites.clear();
	}

	/// Return sprite called `name`.
	pub fn get(&self, name: &str) -> Option<&SpriteRect> {
		self.sprites.iter().find(|s| s.name == name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &SpriteRect> {
		self.sprites.iter()
	}

	pub fn len(&self) -> usize {
		self.sprites.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sprites.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rect::Point;
	use tempfile::TempDir;

	fn rect(name: &str, x: u32) -> SpriteRect {
		SpriteRect::from_corners(name, Point::new(x, 0), Point::new(x + 16, 16))
	}

	#[test]
	fn missing_file_is_empty() -> crate::Result<()> {
		let dir = TempDir::new()?;
		let data = SpriteSheetData::load(dir.path().join(DATA_FILE))?;
		assert!(data.is_empty());
		Ok(())
	}

	#[test]
	fn save_and_load() -> crate::Result<()> {
		let dir = TempDir::new()?;
		let path = dir.path().join(DATA_FILE);

		let mut data = SpriteSheetData::default();
		data.push(rect("head_up", 0))?;
		data.push(rect("tail_up", 16))?;
		data.save(&path)?;

		let text = fs::read_to_string(&path)?;
		let raw: serde_json::Value = serde_json::from_str(&text)?;
		assert_eq!(raw[0]["name"], "head_up");
		assert_eq!(raw[1]["x"], 16);
		assert_eq!(raw[1]["w"], 16);

		assert_eq!(SpriteSheetData::load(&path)?, data);
		Ok(())
	}

	#[test]
	fn malformed_file() -> crate::Result<()> {
		let dir = TempDir::new()?;
		let path = dir.path().join(DATA_FILE);
		fs::write(&path, "{not json")?;
		assert!(SpriteSheetData::load(&path).is_err());
		Ok(())
	}

	#[test]
	fn editing() -> crate::Result<()> {
		let mut data = SpriteSheetData::default();
		assert_eq!(data.next_name(), "sprite_000");

		let name = data.next_name();
		data.push(rect(&name, 0))?;
		assert_eq!(data.next_name(), "sprite_001");
		assert!(data.push(rect("sprite_000", 32)).is_err());

		data.push(rect("apple", 16))?;
		data.push(rect("br", 32))?;
		assert_eq!(data.remove("apple")?.x, 16);
		assert!(data.remove("apple").is_err());

		assert_eq!(data.pop().map(|r| r.name), Some("br".to_string()));
		assert_eq!(data.len(), 1);

		data.clear();
		assert!(data.is_empty());
		assert_eq!(data.pop(), None);
		Ok(())
	}
}
