//! Match engine - input buffer editing, submission and word scoring.
//!
//! Highlighting is computed per entity from the shared input (see
//! [`FallingWord::highlight`]); this module owns everything that changes state.

use crate::entity::FallingWord;

/// Points for clearing a word of `len` bytes.
///
/// - shorter than 6: 1 point
/// - 6 to 9: 2 points
/// - 10 or more: 3 points
pub fn word_points(len: usize) -> u32 {
    match len {
        0..=5 => 1,
        6..=9 => 2,
        _ => 3,
    }
}

/// True for characters that may enter the input buffer (printable single-byte ASCII).
pub fn accepts_char(c: char) -> bool {
    c == ' ' || c.is_ascii_graphic()
}

/// Append `c` to `input` if it is accepted. Returns whether the buffer changed.
pub fn type_char(input: &mut String, c: char) -> bool {
    if accepts_char(c) {
        input.push(c);
        true
    } else {
        false
    }
}

/// Remove the last character. Returns whether the buffer changed.
pub fn backspace(input: &mut String) -> bool {
    input.pop().is_some()
}

/// Index of the first entity (insertion order) whose word equals `input`.
pub fn find_exact(entities: &[FallingWord], input: &str) -> Option<usize> {
    entities.iter().position(|e| e.exactly_matches(input))
}

/// A word cleared by a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Cleared {
    pub entity: FallingWord,
    pub points: u32,
}

/// Submit `input` against `entities`.
///
/// On an exact match the entity is removed and the input cleared. Without one
/// nothing changes: no penalty, and the input is kept for further editing.
pub fn submit(entities: &mut Vec<FallingWord>, input: &mut String) -> Option<Cleared> {
    let index = find_exact(entities, input)?;
    let entity = entities.remove(index);
    input.clear();
    let points = word_points(entity.word().len());
    Some(Cleared { entity, points })
}
