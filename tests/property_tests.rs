use proptest::prelude::*;
use wordgrid::alphabet::Language;
use wordgrid::api;
use wordgrid::board::Dimensions;
use wordgrid::render::CharGrid;
use wordgrid::sim::NullProgress;

fn grid_contains(grid: &CharGrid, word: &str) -> bool {
    for row in grid {
        let line: String = row.iter().collect();
        if line.contains(word) {
            return true;
        }
    }
    let width = grid[0].len();
    for x in 0..width {
        let column: String = grid.iter().map(|row| row[x]).collect();
        if column.contains(word) {
            return true;
        }
    }
    false
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Sparse word sets on a roomy grid: generation always terminates, every
    // word lands in the key, and the board is pure uppercase ASCII.
    #[test]
    fn prop_sparse_word_sets_always_place(
        words in prop::collection::vec("[A-Z]{2,4}", 1..4),
        seed in any::<u64>(),
    ) {
        let puzzle = api::generate(
            &words,
            Language::En,
            Dimensions::new(12, 12),
            Some(seed),
            &mut NullProgress,
        ).unwrap();

        prop_assert_eq!(puzzle.placements.len(), words.len());
        for word in &words {
            prop_assert!(grid_contains(&puzzle.key, word), "'{}' missing from key", word);
            prop_assert!(grid_contains(&puzzle.board, word), "'{}' missing from board", word);
        }
        for row in &puzzle.board {
            for &ch in row {
                prop_assert!(ch.is_ascii_uppercase());
            }
        }
    }

    // Key and board never disagree on a committed cell.
    #[test]
    fn prop_key_is_board_minus_noise(
        words in prop::collection::vec("[A-Z]{2,5}", 1..3),
        seed in any::<u64>(),
    ) {
        let puzzle = api::generate(
            &words,
            Language::En,
            Dimensions::new(10, 10),
            Some(seed),
            &mut NullProgress,
        ).unwrap();

        for (key_row, board_row) in puzzle.key.iter().zip(&puzzle.board) {
            for (&k, &b) in key_row.iter().zip(board_row) {
                if k != ' ' {
                    prop_assert_eq!(k, b);
                }
            }
        }
    }
}
