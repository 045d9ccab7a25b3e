//! Sprite rectangles.

use crate::error::ParsePointError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Default snapping grid in sheet pixels.
pub const GRID_SIZE: u32 = 16;

/// Round `value` down to a multiple of `grid`. Zero `grid` disables snapping.
pub fn snap(value: u32, grid: u32) -> u32 {
    if grid == 0 {
        return value;
    }
    (value / grid) * grid
}

/// Pixel position on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    /// Return a new [`Point`].
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Return the point moved onto the `grid`.
    pub fn snapped(self, grid: u32) -> Self {
        Self::new(snap(self.x, grid), snap(self.y, grid))
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = || ParsePointError(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        Ok(Self::new(
            x.trim().parse().map_err(|_| err())?,
            y.trim().parse().map_err(|_| err())?,
        ))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Named area of the sprite sheet. Field names are the ones stored in the
/// sidecar file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteRect {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl SpriteRect {
    /// Return rectangle spanned by two opposite corners, given in any order.
    pub fn from_corners(name: impl Into<String>, a: Point, b: Point) -> Self {
        Self {
            name: name.into(),
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: a.x.max(b.x) - a.x.min(b.x),
            h: a.y.max(b.y) - a.y.min(b.y),
        }
    }

    /// Return `true` if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

impl fmt::Display for SpriteRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ({},{}) {}x{}", self.name, self.x, self.y, self.w, self.h)
    }
}
