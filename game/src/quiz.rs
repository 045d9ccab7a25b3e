//! Arithmetic question asked in the quiz variant.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive};

/// Range operands are drawn from.
pub const OPERANDS: RangeInclusive<i32> = 1..=10;

/// Range wrong answers are drawn from.
pub const WRONG_ANSWERS: RangeInclusive<i32> = 2..=20;

/// `a + b = ?` question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub a: i32,
    pub b: i32,
}

impl Question {
    /// Return a new [`Question`].
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Return question with both operands drawn from [`OPERANDS`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen_range(OPERANDS), rng.gen_range(OPERANDS))
    }

    /// Return the correct answer.
    pub fn answer(&self) -> i32 {
        self.a + self.b
    }

    /// Return text shown to the player.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = ?", self.a, self.b)
    }
}

/// Draw a value from [`WRONG_ANSWERS`] until it differs from `answer`.
pub fn wrong_answer<R: Rng + ?Sized>(answer: i32, rng: &mut R) -> i32 {
    loop {
        let value = rng.gen_range(WRONG_ANSWERS);
        if value != answer {
            return value;
        }
    }
}
