use crate::alphabet::{Alphabet, Language};
use crate::board::Dimensions;
use crate::error::WgResult;
use crate::input;
use crate::placement::Placement;
use crate::render::{self, CharGrid};
use crate::sim::{ProgressSink, Simulation};

/// Final outputs of one generation run. Key and board share every committed
/// letter and differ only on unoccupied cells.
#[derive(Debug)]
pub struct Puzzle {
    pub dimensions: Dimensions,
    pub key: CharGrid,
    pub board: CharGrid,
    pub placements: Vec<Placement>,
    pub resets: u64,
    pub attempts: u64,
}

/// Validate, simulate, render. One `Rng` drives every random choice in the
/// run, so a fixed `seed` reproduces the puzzle bit for bit.
pub fn generate(
    words: &[String],
    language: Language,
    dimensions: Dimensions,
    seed: Option<u64>,
    progress: &mut dyn ProgressSink,
) -> WgResult<Puzzle> {
    input::validate_words(words, dimensions)?;

    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let upper: Vec<String> = words.iter().map(|w| w.to_uppercase()).collect();
    let outcome = Simulation::new(dimensions, upper).run(&mut rng, progress);

    let alphabet = Alphabet::for_language(language);
    let key = render::render_key(&outcome.board);
    let board = render::render_noise(&outcome.board, &alphabet, &mut rng);

    Ok(Puzzle {
        dimensions,
        key,
        board,
        placements: outcome.placements,
        resets: outcome.resets,
        attempts: outcome.attempts,
    })
}
