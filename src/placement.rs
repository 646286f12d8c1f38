use crate::board::Board;
use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Words run rightwards or downwards only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Cell occupied by the character at `offset` for a word starting at (x, y).
    pub fn step(&self, x: usize, y: usize, offset: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (x + offset, y),
            Direction::Vertical => (x, y + offset),
        }
    }
}

/// Where a word ended up on the board.
#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    pub word: String,
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

/// One randomized attempt to fit `word` into the board: random start cell,
/// random direction, then the deterministic edge/collision/commit sequence.
pub fn try_place(board: &mut Board, word: &str, rng: &mut fastrand::Rng) -> Option<Placement> {
    let x = rng.usize(0..board.width());
    let y = rng.usize(0..board.height());
    let direction = if rng.bool() {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    place_at(board, word, x, y, direction)
}

/// Deterministic core of a placement attempt. Atomic: success commits every
/// character, failure commits none.
pub fn place_at(
    board: &mut Board,
    word: &str,
    x: usize,
    y: usize,
    direction: Direction,
) -> Option<Placement> {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return None;
    }

    // Edge check: the last character must land inside the grid.
    let (end_x, end_y) = direction.step(x, y, chars.len() - 1);
    if end_x >= board.width() || end_y >= board.height() {
        return None;
    }

    // Collision check: an occupied cell only blocks if it holds a different
    // character. Equal characters are legitimate crossings.
    for (offset, &ch) in chars.iter().enumerate() {
        let (cx, cy) = direction.step(x, y, offset);
        if let Some(existing) = board.get(cx, cy) {
            if existing != ch {
                return None;
            }
        }
    }

    for (offset, &ch) in chars.iter().enumerate() {
        let (cx, cy) = direction.step(x, y, offset);
        board.set(cx, cy, ch);
    }

    Some(Placement {
        word: word.to_string(),
        x,
        y,
        direction,
    })
}
