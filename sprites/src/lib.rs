//! Sprite sheet tooling.
//!
//! Art for the game comes as one sprite sheet. Sprites are described by named
//! rectangles kept in a json sidecar file (see [`data`]) and cut out of the
//! sheet into separate png files (see [`extract`]).

pub mod data;
pub mod error;
pub mod extract;
pub mod rect;

/// This is an alias for standart [`Result`](std::result::Result) type which
/// represents failure.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Common reexports in one place.
pub mod prelude {
	pub use crate::{
		data::SpriteSheetData,
		extract::{extract, extract_all, load_sheet},
		rect::{snap, Point, SpriteRect},
	};
}
