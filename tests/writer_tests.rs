use std::fs;
use tempfile::tempdir;
use wordgrid::api::Puzzle;
use wordgrid::board::Dimensions;
use wordgrid::placement::{place_at, Direction};
use wordgrid::writer::{export, format_row, write_placements, ExportOptions};

fn sample_puzzle() -> Puzzle {
    Puzzle {
        dimensions: Dimensions::new(2, 2),
        key: vec![vec!['A', 'B'], vec![' ', ' ']],
        board: vec![vec!['A', 'B'], vec!['X', 'Y']],
        placements: Vec::new(),
        resets: 0,
        attempts: 1,
    }
}

#[test]
fn test_file_export_plain() {
    let dir = tempdir().unwrap();
    let folder = dir.path().join("out");
    let opts = ExportOptions {
        include_key: true,
        csv: false,
        folder: Some(folder.clone()),
    };
    export(&sample_puzzle(), &opts).expect("Export failed");

    let key = fs::read_to_string(folder.join("out_key.txt")).unwrap();
    assert_eq!(key, "A B\n   \n");

    let board = fs::read_to_string(folder.join("out_word_search.txt")).unwrap();
    assert_eq!(board, "A B\nX Y\n");
}

#[test]
fn test_file_export_csv() {
    let dir = tempdir().unwrap();
    let folder = dir.path().join("puzzles");
    let opts = ExportOptions {
        include_key: false,
        csv: true,
        folder: Some(folder.clone()),
    };
    export(&sample_puzzle(), &opts).expect("Export failed");

    let board = fs::read_to_string(folder.join("puzzles_word_search.csv")).unwrap();
    assert_eq!(board, "A, B\nX, Y\n");
    assert!(
        !folder.join("puzzles_key.csv").exists(),
        "Key file written without --key"
    );
}

#[test]
fn test_folder_is_created_if_absent() {
    let dir = tempdir().unwrap();
    let folder = dir.path().join("nested").join("deep");
    let opts = ExportOptions {
        include_key: false,
        csv: false,
        folder: Some(folder.clone()),
    };
    export(&sample_puzzle(), &opts).expect("Export failed");
    assert!(folder.join("deep_word_search.txt").exists());
}

#[test]
fn test_row_formatting() {
    assert_eq!(format_row(&['A', 'B', 'C'], false), "A B C");
    assert_eq!(format_row(&['A', 'B', 'C'], true), "A, B, C");
    assert_eq!(format_row(&['Z'], true), "Z");
}

#[test]
fn test_placements_manifest_round_trip() {
    let mut puzzle = sample_puzzle();
    let mut board = wordgrid::board::Board::new(Dimensions::new(2, 2));
    puzzle.placements = vec![
        place_at(&mut board, "AB", 0, 0, Direction::Horizontal).unwrap(),
    ];

    let dir = tempdir().unwrap();
    let path = dir.path().join("placements.json");
    write_placements(&puzzle, &path).expect("Manifest write failed");

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let entry = &parsed[0];
    assert_eq!(entry["word"], "AB");
    assert_eq!(entry["x"], 0);
    assert_eq!(entry["y"], 0);
    assert_eq!(entry["direction"], "horizontal");
}
