use crate::alphabet::Alphabet;
use crate::board::Board;

/// A fully materialized output grid, row-major.
pub type CharGrid = Vec<Vec<char>>;

/// The solution view: committed letters as-is, empty cells as single spaces.
pub fn render_key(board: &Board) -> CharGrid {
    (0..board.height())
        .map(|y| board.row(y).iter().map(|c| c.unwrap_or(' ')).collect())
        .collect()
}

/// The puzzle view: committed letters as-is, empty cells filled with uniform
/// draws from the active alphabet.
pub fn render_noise(board: &Board, alphabet: &Alphabet, rng: &mut fastrand::Rng) -> CharGrid {
    (0..board.height())
        .map(|y| {
            board
                .row(y)
                .iter()
                .map(|c| c.unwrap_or_else(|| alphabet.noise(rng)))
                .collect()
        })
        .collect()
}
