//! Cutting sprites out of the sheet.

use crate::{data::SpriteSheetData, error::SpriteError, rect::SpriteRect, Result};
use image::{imageops, RgbaImage};
use log::{info, warn};
use std::{
	fs,
	path::{Path, PathBuf},
};

/// Default sprite sheet location.
pub const SHEET_PATH: &str = "Graphics/SnakeSprites.png";

/// Default directory extracted sprites are written to.
pub const OUTPUT_DIR: &str = "extracted_sprites";

/// Load the sprite sheet from `path`.
pub fn load_sheet(path: impl AsRef<Path>) -> Result<RgbaImage> {
	let path = path.as_ref();
	if !path.exists() {
		return Err(Box::new(SpriteError::MissingSheet(path.to_path_buf())));
	}
	let sheet = image::open(path)?.to_rgba8();
	info!("loaded {}x{} sheet from {}", sheet.width(), sheet.height(), path.display());
	Ok(sheet)
}

/// Write `rect` area of `sheet` into `<out_dir>/<name>.png`.
///
/// Empty rectangles are skipped, `None` is returned for them.
pub fn extract(sheet: &RgbaImage, rect: &SpriteRect, out_dir: &Path) -> Result<Option<PathBuf>> {
	if rect.is_empty() {
		warn!("skip empty sprite {}", rect);
		return Ok(None);
	}

	let fits = |start: u32, len: u32, max: u32| start.checked_add(len).map_or(false, |end| end <= max);
	if !fits(rect.x, rect.w, sheet.width()) || !fits(rect.y, rect.h, sheet.height()) {
		return Err(Box::new(SpriteError::RectOutsideSheet(rect.name.clone())));
	}

	let sprite = imageops::crop_imm(sheet, rect.x, rect.y, rect.w, rect.h).to_image();
	let path = out_dir.join(format!("{}.png", rect.name));
	sprite.save(&path)?;
	info!("saved {} ({}x{})", path.display(), rect.w, rect.h);

	Ok(Some(path))
}

/// Extract every recorded sprite into `out_dir`, creating it if needed.
///
/// Return number of written files.
pub fn extract_all(sheet: &RgbaImage, data: &SpriteSheetData, out_dir: &Path) -> Result<usize> {
	fs::create_dir_all(out_dir)?;
	let mut written = 0;
	for rect in data.iter() {
		if extract(sheet, rect, out_dir)?.is_some() {
			written += 1;
		}
	}
	Ok(written)
}
