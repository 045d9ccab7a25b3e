//! Errors returned by functions related to this crate.

use std::{error, fmt, path::PathBuf};

/// Error type returned by crate's functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteError {
    /// Sprite sheet image doesn't exist at the path.
    MissingSheet(PathBuf),

    /// Sprite with the name specified in variant argument reaches outside of
    /// the sheet.
    RectOutsideSheet(String),

    /// Sprite with the name specified in variant argument is not recorded.
    UnknownSprite(String),

    /// Sprite with the name specified in variant argument is already recorded.
    DuplicateName(String),
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSheet(path) => write!(f, "could not find sprite sheet at {}", path.display()),
            Self::RectOutsideSheet(name) => write!(f, "sprite {} reaches outside of the sheet", name),
            Self::UnknownSprite(name) => write!(f, "sprite {} not found", name),
            Self::DuplicateName(name) => write!(f, "sprite {} already exists", name),
        }
    }
}

impl error::Error for SpriteError {}

/// Error returned if can't parse [`Point`](crate::rect::Point) from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePointError(pub String);

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "can't parse point from \"{}\": expected \"X,Y\" with non-negative integers", self.0)
    }
}

impl error::Error for ParsePointError {}
