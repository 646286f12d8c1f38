use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};
use wordgrid::alphabet::Language;
use wordgrid::api;
use wordgrid::error::WgResult;
use wordgrid::input;
use wordgrid::sim::ProgressSink;
use wordgrid::writer::{self, ExportOptions};

mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a word search puzzle from stdin", long_about = None)]
struct Cli {
    #[arg(short = 'k', long)]
    key: bool,

    #[arg(short = 'l', long)]
    language: Option<Language>,

    #[arg(short = 'c', long)]
    csv: bool,

    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    #[arg(short = 'S', long)]
    seed: Option<u64>,

    #[arg(long)]
    placements: Option<PathBuf>,

    #[arg(long)]
    pretty: bool,
}

/// Rotating status indicator on stderr, one frame per placement attempt.
struct Spinner {
    frames: [&'static str; 4],
    idx: usize,
    enabled: bool,
}

impl Spinner {
    fn new() -> Self {
        Self {
            frames: [" / ", "- -", " \\ ", " | "],
            idx: 0,
            enabled: io::stderr().is_terminal(),
        }
    }

    fn finish(&self) {
        if self.enabled {
            eprint!("\r   \n");
        }
    }
}

impl ProgressSink for Spinner {
    fn on_attempt(&mut self, _word: &str, _placed: bool) {
        if !self.enabled {
            return;
        }
        eprint!("\r{}", self.frames[self.idx]);
        let _ = io::stderr().flush();
        self.idx = (self.idx + 1) % self.frames.len();
    }
}

fn read_lines(path: Option<&Path>) -> WgResult<Vec<String>> {
    let raw = match path {
        Some(p) => fs::read_to_string(p)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(raw.lines().map(str::to_string).collect())
}

fn run(cli: Cli) -> WgResult<()> {
    let lines = read_lines(cli.input.as_deref())?;
    let parsed = input::parse_input(&lines, cli.language)?;
    info!(
        "🧩 Grid {} | Language: {} | {} words",
        parsed.dimensions,
        parsed.language,
        parsed.words.len()
    );

    let mut spinner = Spinner::new();
    let puzzle = api::generate(
        &parsed.words,
        parsed.language,
        parsed.dimensions,
        cli.seed,
        &mut spinner,
    )?;
    spinner.finish();
    info!(
        "✅ Placed {} words in {} attempts ({} resets)",
        puzzle.placements.len(),
        puzzle.attempts,
        puzzle.resets
    );

    if let Some(path) = &cli.placements {
        writer::write_placements(&puzzle, path)?;
    }

    if cli.pretty && cli.output.is_none() {
        if cli.key {
            reports::print_grid("Key", &puzzle.key);
        }
        reports::print_grid("Board", &puzzle.board);
        return Ok(());
    }

    writer::export(
        &puzzle,
        &ExportOptions {
            include_key: cli.key,
            csv: cli.csv,
            folder: cli.output.clone(),
        },
    )
}

fn main() {
    // Logs go to stderr so piped stdout stays pure puzzle rows.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        process::exit(1);
    }
}
