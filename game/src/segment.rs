//! Snake segment orientation.
//!
//! Renderers pick a sprite (or a shape) for every body cell from its
//! neighbors only, so everything here is a pure function of a few adjacent
//! cells and doesn't depend on any drawing framework.

use crate::aux::{Cell, Direction};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bend of a body segment, named by the two sides it joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Corner {
    /// Return vertical and horizontal sides joined by the corner.
    pub fn sides(self) -> (Direction, Direction) {
        match self {
            Self::UpLeft => (Direction::Up, Direction::Left),
            Self::UpRight => (Direction::Up, Direction::Right),
            Self::DownLeft => (Direction::Down, Direction::Left),
            Self::DownRight => (Direction::Down, Direction::Right),
        }
    }
}

/// How a single snake cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Leading cell looking in the given direction.
    Head(Direction),

    /// Last cell pointing away from the body in the given direction.
    Tail(Direction),

    /// Straight piece joining up and down neighbors.
    Vertical,

    /// Straight piece joining left and right neighbors.
    Horizontal,

    /// Bent piece.
    Corner(Corner),
}

impl SegmentKind {
    /// Return file stem of the sprite used for this kind, as named in the
    /// sprite sheet data.
    pub fn sprite_name(self) -> &'static str {
        match self {
            Self::Head(Direction::Up) => "head_up",
            Self::Head(Direction::Down) => "head_down",
            Self::Head(Direction::Left) => "head_left",
            Self::Head(Direction::Right) | Self::Head(Direction::Neutral) => "head_right",
            Self::Tail(Direction::Up) => "tail_up",
            Self::Tail(Direction::Down) => "tail_down",
            Self::Tail(Direction::Left) => "tail_left",
            Self::Tail(Direction::Right) | Self::Tail(Direction::Neutral) => "tail_right",
            Self::Vertical => "body_vertical",
            Self::Horizontal => "body_horizontal",
            // Corner sprites in the sheet are named after their curve's
            // outer corner.
            Self::Corner(Corner::UpLeft) => "br",
            Self::Corner(Corner::DownLeft) => "tr",
            Self::Corner(Corner::UpRight) => "bl",
            Self::Corner(Corner::DownRight) => "tl",
        }
    }

    /// Return sides of the cell where it's connected to neighbor segments.
    pub fn joins(self) -> Vec<Direction> {
        match self {
            Self::Head(dir) | Self::Tail(dir) => vec![dir.opposite()],
            Self::Vertical => vec![Direction::Up, Direction::Down],
            Self::Horizontal => vec![Direction::Left, Direction::Right],
            Self::Corner(corner) => {
                let (v, h) = corner.sides();
                vec![v, h]
            }
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sprite_name())
    }
}

/// Snake cell with its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub cell: Cell,

    /// `None` when neighbors aren't adjacent (e.g. a single cell snake).
    pub kind: Option<SegmentKind>,
}

/// Direction a terminal cell `end` looks away from its only `neighbor`.
fn facing(end: Cell, neighbor: Cell) -> Option<Direction> {
    Direction::from_delta(end - neighbor).filter(|d| *d != Direction::Neutral)
}

/// Orientation of the head given the cell right behind it.
pub fn head_kind(head: Cell, neck: Cell) -> Option<SegmentKind> {
    facing(head, neck).map(SegmentKind::Head)
}

/// Orientation of the tail given the cell right before it.
pub fn tail_kind(before_tail: Cell, tail: Cell) -> Option<SegmentKind> {
    facing(tail, before_tail).map(SegmentKind::Tail)
}

/// Orientation of an interior cell given its neighbors toward the tail and
/// toward the head.
pub fn body_kind(toward_tail: Cell, cell: Cell, toward_head: Cell) -> Option<SegmentKind> {
    let prev = toward_tail - cell;
    let next = toward_head - cell;

    if prev.x == next.x {
        return Some(SegmentKind::Vertical);
    }
    if prev.y == next.y {
        return Some(SegmentKind::Horizontal);
    }

    // One offset is horizontal and the other one vertical.
    let dx = if prev.y == 0 { prev.x } else { next.x };
    let dy = if prev.x == 0 { prev.y } else { next.y };
    let corner = match (dx, dy) {
        (-1, -1) => Corner::UpLeft,
        (1, -1) => Corner::UpRight,
        (-1, 1) => Corner::DownLeft,
        (1, 1) => Corner::DownRight,
        _ => return None,
    };
    Some(SegmentKind::Corner(corner))
}

/// Orient every cell of a head-first `body`.
pub fn orient(body: &[Cell]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(body.len());

    match body {
        [] => return segments,
        [head] => {
            segments.push(Segment { cell: *head, kind: None });
            return segments;
        }
        [head, neck, ..] => segments.push(Segment {
            cell: *head,
            kind: head_kind(*head, *neck),
        }),
    }

    for (ahead, cell, behind) in body.iter().copied().tuple_windows() {
        segments.push(Segment {
            cell,
            kind: body_kind(behind, cell, ahead),
        });
    }

    let tail = body[body.len() - 1];
    segments.push(Segment {
        cell: tail,
        kind: tail_kind(body[body.len() - 2], tail),
    });

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(raw: &[(i32, i32)]) -> Vec<Cell> {
        raw.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn straight_snake() {
        let segments = orient(&cells(&[(5, 10), (4, 10), (3, 10)]));
        let kinds: Vec<_> = segments.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [
                Some(SegmentKind::Head(Direction::Right)),
                Some(SegmentKind::Horizontal),
                Some(SegmentKind::Tail(Direction::Left)),
            ]
        );
        assert_eq!(segments[0].cell, Cell::new(5, 10));
        assert_eq!(segments[2].cell, Cell::new(3, 10));
    }

    #[test]
    fn vertical_snake() {
        let segments = orient(&cells(&[(2, 2), (2, 3), (2, 4)]));
        assert_eq!(segments[0].kind, Some(SegmentKind::Head(Direction::Up)));
        assert_eq!(segments[1].kind, Some(SegmentKind::Vertical));
        assert_eq!(segments[2].kind, Some(SegmentKind::Tail(Direction::Down)));
    }

    #[test]
    fn corners() {
        let c = Cell::new(5, 5);
        let left = Cell::new(4, 5);
        let right = Cell::new(6, 5);
        let up = Cell::new(5, 4);
        let down = Cell::new(5, 6);

        assert_eq!(body_kind(left, c, up), Some(SegmentKind::Corner(Corner::UpLeft)));
        assert_eq!(body_kind(up, c, left), Some(SegmentKind::Corner(Corner::UpLeft)));
        assert_eq!(body_kind(left, c, down), Some(SegmentKind::Corner(Corner::DownLeft)));
        assert_eq!(body_kind(down, c, left), Some(SegmentKind::Corner(Corner::DownLeft)));
        assert_eq!(body_kind(right, c, up), Some(SegmentKind::Corner(Corner::UpRight)));
        assert_eq!(body_kind(up, c, right), Some(SegmentKind::Corner(Corner::UpRight)));
        assert_eq!(body_kind(right, c, down), Some(SegmentKind::Corner(Corner::DownRight)));
        assert_eq!(body_kind(down, c, right), Some(SegmentKind::Corner(Corner::DownRight)));
    }

    #[test]
    fn corner_sprite_names() {
        assert_eq!(SegmentKind::Corner(Corner::UpLeft).sprite_name(), "br");
        assert_eq!(SegmentKind::Corner(Corner::DownLeft).sprite_name(), "tr");
        assert_eq!(SegmentKind::Corner(Corner::UpRight).sprite_name(), "bl");
        assert_eq!(SegmentKind::Corner(Corner::DownRight).sprite_name(), "tl");
    }

    #[test]
    fn turning_snake() {
        // Head went up after moving right.
        let segments = orient(&cells(&[(6, 9), (6, 10), (5, 10), (4, 10)]));
        assert_eq!(segments[0].kind, Some(SegmentKind::Head(Direction::Up)));
        assert_eq!(segments[1].kind, Some(SegmentKind::Corner(Corner::UpLeft)));
        assert_eq!(segments[2].kind, Some(SegmentKind::Horizontal));
        assert_eq!(segments[3].kind, Some(SegmentKind::Tail(Direction::Left)));
    }

    #[test]
    fn joins() {
        assert_eq!(SegmentKind::Head(Direction::Right).joins(), [Direction::Left]);
        assert_eq!(SegmentKind::Tail(Direction::Up).joins(), [Direction::Down]);
        assert_eq!(
            SegmentKind::Corner(Corner::DownRight).joins(),
            [Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn degenerate_bodies() {
        assert!(orient(&[]).is_empty());

        let lone = orient(&cells(&[(1, 1)]));
        assert_eq!(lone.len(), 1);
        assert_eq!(lone[0].kind, None);

        // Stacked cells have no direction.
        let stacked = orient(&cells(&[(1, 1), (1, 1)]));
        assert_eq!(stacked[0].kind, None);
        assert_eq!(stacked[1].kind, None);
    }
}
