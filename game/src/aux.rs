//! Auxiliary abstractions.

use crate::error::*;
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

/// One grid cell.
///
/// Note that this coordinates system is the screen one, so (0, 0) cell is the
/// top left corner of the grid and Y-axis is going down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Cell {
    /// Column.
    pub x: i32,

    /// Row.
    pub y: i32,
}

impl Cell {
    /// Return a new [`Cell`].
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (i32, i32) {
	fn from(c: Cell) -> Self {
		(c.x, c.y)
	}
}

impl From<(i32, i32)> for Cell {
    fn from(t: (i32, i32)) -> Self {
        Self::new(t.0, t.1)
    }
}

impl ops::Add for Cell {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl ops::Sub for Cell {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Heading of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Up.
    Up,

    /// Down.
    Down,

    /// Left.
    Left,

    /// Right.
    Right,

    /// Standing still. Snake waits in this state until the first turn.
    Neutral,
}

impl Direction {
    /// All moving directions.
    pub const MOVING: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Return the unit step of this direction.
    pub fn delta(self) -> Cell {
        match self {
            Self::Up => Cell::new(0, -1),
            Self::Down => Cell::new(0, 1),
            Self::Left => Cell::new(-1, 0),
            Self::Right => Cell::new(1, 0),
            Self::Neutral => Cell::new(0, 0),
        }
    }

    /// Return direction whose [`delta`](Self::delta) is `delta`, if any.
    pub fn from_delta(delta: Cell) -> Option<Self> {
        match (delta.x, delta.y) {
            (0, -1) => Some(Self::Up),
            (0, 1) => Some(Self::Down),
            (-1, 0) => Some(Self::Left),
            (1, 0) => Some(Self::Right),
            (0, 0) => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Return opposite direction. [`Neutral`](Self::Neutral) is its own
    /// opposite.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Neutral => Self::Neutral,
        }
    }

    /// Return `true` if `other` is the exact reversal of `self`.
    pub fn is_opposite(self, other: Self) -> bool {
        self != Self::Neutral && self.opposite() == other
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Neutral
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower_case = format!("{:?}", self).to_lowercase();
        write!(f, "{}", lower_case)
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "right" => Ok(Self::Right),
            "left" => Ok(Self::Left),
            "neutral" => Ok(Self::Neutral),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl ops::Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

/// A color in the sRGB color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Color {
    /// Red component
    pub r: u8,

    /// Green component
    pub g: u8,

    /// Blue component
    pub b: u8,

    /// Transparency
    pub a: u8,
}

impl Color {
    /// The white color.
    pub const WHITE: Color = Color::new(255, 255, 255, 255);

    /// Window background.
    pub const BACKGROUND: Color = Color::new(30, 30, 30, 255);

    /// Playing field.
    pub const FIELD: Color = Color::new(175, 215, 70, 255);

    /// Darker field squares of the checkerboard.
    pub const GRASS: Color = Color::new(155, 195, 50, 255);

    /// Snake body.
    pub const SNAKE: Color = Color::new(79, 118, 222, 255);

    /// Snake head.
    pub const SNAKE_HEAD: Color = Color::new(56, 74, 12, 255);

    /// Fruit.
    pub const FRUIT: Color = Color::new(183, 50, 57, 255);

    /// Return a new [`Color`]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
