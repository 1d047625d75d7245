//! Coordinate tokens as typed at the prompt, e.g. `e2`.
//!
//! A token is a file letter followed by a rank number. Letters `a` through `h`
//! map to files 7 through 0; any other character maps to file `-1`, which
//! `rules::is_on_board` later rejects. Ranks are entered one-based.

use thiserror::Error;

use crate::constants::FILE_LETTERS;
use crate::types::{Move, Square};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty coordinate")]
    Empty,
    #[error("missing rank in coordinate")]
    MissingRank,
    #[error("invalid rank {0:?}")]
    InvalidRank(String),
}

pub const UNKNOWN_FILE: i8 = -1;

pub fn file_from_letter(letter: char) -> i8 {
    FILE_LETTERS
        .iter()
        .position(|&known| known == letter)
        .map_or(UNKNOWN_FILE, |file| file as i8)
}

/// Reads a token into raw `(file, rank)` coordinates, which may be off board.
pub fn parse_coordinate(token: &str) -> Result<(i8, i8), NotationError> {
    let token = token.trim();
    let mut chars = token.chars();
    let letter = chars.next().ok_or(NotationError::Empty)?;
    let digits = chars.as_str();
    if digits.is_empty() {
        return Err(NotationError::MissingRank);
    }
    let rank = digits
        .parse::<i8>()
        .map_err(|_| NotationError::InvalidRank(digits.to_string()))?;
    Ok((file_from_letter(letter), rank.saturating_sub(1)))
}

pub fn square_name(square: Square) -> String {
    format!(
        "{}{}",
        FILE_LETTERS[usize::from(square.file)],
        square.rank + 1
    )
}

impl Move {
    pub fn parse(from: &str, to: &str) -> Result<Self, NotationError> {
        let (from_file, from_rank) = parse_coordinate(from)?;
        let (to_file, to_rank) = parse_coordinate(to)?;
        Ok(Self::new(from_file, from_rank, to_file, to_rank))
    }
}
