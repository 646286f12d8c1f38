use crate::error::{WgResult, WordGridError};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Language tag selecting the noise character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    En,
    De,
}

impl Language {
    /// Parse a tag from the input stream, mapping unknown tags to an explicit
    /// error instead of proceeding with an undefined character set.
    pub fn parse_tag(tag: &str) -> WgResult<Self> {
        Language::from_str(tag.trim())
            .map_err(|_| WordGridError::UnsupportedLanguage(tag.trim().to_string()))
    }
}

/// The ordered character set used to fill unoccupied cells.
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    pub fn for_language(language: Language) -> Self {
        let mut letters: Vec<char> = ('A'..='Z').collect();
        if language == Language::De {
            letters.extend(['ẞ', 'Ä', 'Ö', 'Ü']);
        }
        Self { letters }
    }

    /// One uniform draw from the set.
    pub fn noise(&self, rng: &mut fastrand::Rng) -> char {
        self.letters[rng.usize(0..self.letters.len())]
    }

    pub fn contains(&self, ch: char) -> bool {
        self.letters.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
