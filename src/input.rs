use crate::alphabet::Language;
use crate::board::Dimensions;
use crate::error::{WgResult, WordGridError};

/// Everything the generator needs, parsed from the line-oriented input
/// stream: dimension header, language tag, then one word per line.
#[derive(Debug)]
pub struct PuzzleInput {
    pub dimensions: Dimensions,
    pub language: Language,
    pub words: Vec<String>,
}

/// Parse the full record stream. `language_override` wins over line 2, but
/// line 2 is consumed either way.
pub fn parse_input(lines: &[String], language_override: Option<Language>) -> WgResult<PuzzleInput> {
    if lines.len() < 2 {
        return Err(WordGridError::InvalidInput(
            "Input requires at least a dimension header and a language line".to_string(),
        ));
    }

    let dimensions = parse_dimensions(&lines[0])?;
    let language = match language_override {
        Some(lang) => lang,
        None => Language::parse_tag(&lines[1])?,
    };
    let words: Vec<String> = lines[2..]
        .iter()
        .map(|line| line.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();

    validate_words(&words, dimensions)?;

    Ok(PuzzleInput {
        dimensions,
        language,
        words,
    })
}

/// Header format: `"<width> <height>"`, two positive integers, single space.
pub fn parse_dimensions(header: &str) -> WgResult<Dimensions> {
    let parts: Vec<&str> = header.trim().split(' ').collect();
    if parts.len() != 2 {
        return Err(WordGridError::InvalidInput(format!(
            "Dimension header must be two integers separated by a space, got '{}'",
            header.trim()
        )));
    }

    let parse_axis = |raw: &str, axis: &str| -> WgResult<usize> {
        let value: usize = raw.parse().map_err(|_| {
            WordGridError::InvalidInput(format!("{} '{}' is not a positive integer", axis, raw))
        })?;
        if value == 0 {
            return Err(WordGridError::InvalidInput(format!(
                "{} must be greater than zero",
                axis
            )));
        }
        Ok(value)
    };

    Ok(Dimensions::new(
        parse_axis(parts[0], "Width")?,
        parse_axis(parts[1], "Height")?,
    ))
}

/// A word may exceed one axis (it can still run along the other) but never
/// both. Runs once, eagerly, before any simulation work; idempotent.
pub fn validate_words(words: &[String], dims: Dimensions) -> WgResult<()> {
    for word in words {
        let len = word.chars().count();
        if len > dims.width && len > dims.height {
            return Err(WordGridError::InvalidInput(format!(
                "Word '{}' (length {}) cannot fit a {} grid in either direction",
                word, len, dims
            )));
        }
    }
    Ok(())
}
