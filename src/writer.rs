use crate::api::Puzzle;
use crate::error::{WgResult, WordGridError};
use crate::render::CharGrid;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where and how the rendered grids leave the process.
pub struct ExportOptions {
    /// Emit the key alongside the board. The board is always emitted.
    pub include_key: bool,
    /// Join cells with `", "` instead of `" "`.
    pub csv: bool,
    /// Write two files under this folder instead of printing to stdout.
    pub folder: Option<PathBuf>,
}

pub fn export(puzzle: &Puzzle, opts: &ExportOptions) -> WgResult<()> {
    match &opts.folder {
        None => {
            if opts.include_key {
                println!("Key");
                for row in &puzzle.key {
                    println!("{}", format_row(row, opts.csv));
                }
                println!();
            }
            println!("Board");
            for row in &puzzle.board {
                println!("{}", format_row(row, opts.csv));
            }
            Ok(())
        }
        Some(folder) => {
            fs::create_dir_all(folder)?;
            let basename = folder
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    WordGridError::InvalidInput(format!(
                        "Output folder '{}' has no usable basename",
                        folder.display()
                    ))
                })?;
            let extension = if opts.csv { "csv" } else { "txt" };

            if opts.include_key {
                let key_path = folder.join(format!("{}_key.{}", basename, extension));
                write_grid_file(&puzzle.key, &key_path, opts.csv)?;
            }
            let board_path = folder.join(format!("{}_word_search.{}", basename, extension));
            write_grid_file(&puzzle.board, &board_path, opts.csv)
        }
    }
}

/// Machine-readable solution: every placement as JSON.
pub fn write_placements(puzzle: &Puzzle, path: &Path) -> WgResult<()> {
    let json = serde_json::to_string_pretty(&puzzle.placements)?;
    fs::write(path, json)?;
    info!("📝 Placements written to {}", path.display());
    Ok(())
}

pub fn format_row(row: &[char], csv: bool) -> String {
    let separator = if csv { ", " } else { " " };
    row.iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

fn write_grid_file(grid: &CharGrid, path: &Path, csv: bool) -> WgResult<()> {
    let mut file = File::create(path)?;
    for row in grid {
        let line = format_row(row, csv);
        // A row that fails to write is reported and skipped; partial output
        // beats aborting the whole file.
        if let Err(e) = writeln!(file, "{}", line) {
            warn!("Failed to write row to {}: {} ({})", path.display(), e, line);
        }
    }
    info!("💾 Wrote {}", path.display());
    Ok(())
}
