use crate::board::{Board, Dimensions};
use crate::placement::{self, Placement};
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// A word that fails this many consecutive attempts triggers a full reset.
pub const MAX_WORD_RETRIES: u32 = 5;

/// Receives scheduling side effects (spinner frames, reset notices) without
/// the scheduler knowing where they go. Tests plug in [`NullProgress`].
pub trait ProgressSink {
    fn on_attempt(&mut self, word: &str, placed: bool);

    fn on_reset(&mut self, resets: u64) {
        let _ = resets;
    }
}

pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn on_attempt(&mut self, _word: &str, _placed: bool) {}
}

pub struct SimOutcome {
    pub board: Board,
    pub placements: Vec<Placement>,
    pub attempts: u64,
    pub resets: u64,
}

/// Drives randomized placement of every word. Words are popped from the back
/// of the queue and failed words re-enqueued at the front, so each word gets
/// one attempt per pass before retries come around again. A word that keeps
/// failing wipes the board, the counters, and the recorded placements, and
/// the whole pass starts over on a fresh grid.
///
/// Empty words never enter the queue: they occupy no cells, so they are
/// committed trivially rather than retried.
///
/// There is no cap on resets: a word set too dense for the grid loops
/// forever. Feasibility is the caller's problem.
pub struct Simulation {
    dims: Dimensions,
    words: Vec<String>,
}

impl Simulation {
    /// `words` must already be validated and upper-cased.
    pub fn new(dims: Dimensions, words: Vec<String>) -> Self {
        Self { dims, words }
    }

    fn seed_queue(&self) -> VecDeque<&str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|w| !w.is_empty())
            .collect()
    }

    pub fn run(&self, rng: &mut fastrand::Rng, progress: &mut dyn ProgressSink) -> SimOutcome {
        let mut board = Board::new(self.dims);
        let mut retries: HashMap<&str, u32> = HashMap::new();
        let mut queue: VecDeque<&str> = self.seed_queue();
        let mut placements: Vec<Placement> = Vec::with_capacity(self.words.len());
        let mut attempts: u64 = 0;
        let mut resets: u64 = 0;

        while let Some(word) = queue.pop_back() {
            attempts += 1;
            match placement::try_place(&mut board, word, rng) {
                Some(placed) => {
                    progress.on_attempt(word, true);
                    placements.push(placed);
                }
                None => {
                    progress.on_attempt(word, false);
                    let counter = retries.entry(word).or_insert(0);
                    *counter += 1;
                    if *counter > MAX_WORD_RETRIES {
                        resets += 1;
                        debug!(
                            "Reset #{}: '{}' failed {} consecutive attempts on {}",
                            resets, word, counter, self.dims
                        );
                        board.wipe();
                        retries.clear();
                        placements.clear();
                        queue = self.seed_queue();
                        progress.on_reset(resets);
                    } else {
                        queue.push_front(word);
                    }
                }
            }
        }

        SimOutcome {
            board,
            placements,
            attempts,
            resets,
        }
    }
}
