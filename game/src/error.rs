//! Errors returned by functions related to this crate.

use crate::aux::*;
use std::{error, fmt};

/// Error type returned when [`Settings`](crate::Settings) can't run a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Initial snake cell specified in variant argument doesn't fit into a grid
    /// of the given size.
    SpawnOutsideGrid(Cell, usize),

    /// Cell size is zero pixels.
    ZeroCellSize,

    /// Tick interval is zero.
    ZeroStep,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SpawnOutsideGrid(cell, size) => write!(f,
				"snake spawn cell {} is outside of {}x{} grid", cell, size, size),
            Self::ZeroCellSize => write!(f, "cell size must be greater than zero"),
            Self::ZeroStep => write!(f, "tick interval must be greater than zero"),
        }
    }
}

impl error::Error for GameError {}

/// Error returned if can't parse [`Direction`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
"can't parse Direction from \"{}\": expected \"up\", \"down\", \"left\", \"right\" or \"neutral\"", self.0)
    }
}

impl error::Error for ParseDirectionError {}

/// Error returned if can't parse [`Variant`](crate::Variant) from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError(pub String);

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown game variant \"{}\": expected \"classic\" or \"quiz\"", self.0)
    }
}

impl error::Error for ParseVariantError {}
