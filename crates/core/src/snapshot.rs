//! Save-slot snapshot and its line-oriented text codec.
//!
//! ```text
//! <score>
//! <lives>
//! <font size>
//! <font file name>
//! <word> <x> <y> <speed>      one line per active entity
//! ```
//!
//! Floats are written in shortest round-trip form, so decoding an encoded
//! snapshot reproduces every position and speed bit for bit.

use std::fmt::Write as _;

use crate::entity::FallingWord;
use crate::error::GameError;
use crate::types::{FontFamily, FONT_SIZE_MAX, FONT_SIZE_MIN};

/// One saved entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySnapshot {
    pub word: String,
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

impl From<&FallingWord> for EntitySnapshot {
    fn from(value: &FallingWord) -> Self {
        Self {
            word: value.word().to_owned(),
            x: value.x(),
            y: value.y(),
            speed: value.speed(),
        }
    }
}

impl EntitySnapshot {
    pub fn into_entity(self, font_size: u8) -> FallingWord {
        FallingWord::new(self.word, self.x, self.y, self.speed, font_size)
    }
}

/// Everything needed to resume a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub score: u32,
    pub lives: u32,
    pub font_size: u8,
    pub font: FontFamily,
    pub entities: Vec<EntitySnapshot>,
}

impl SessionSnapshot {
    /// Encode into the save-slot text format.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(64 + self.entities.len() * 32);
        let _ = writeln!(out, "{}", self.score);
        let _ = writeln!(out, "{}", self.lives);
        let _ = writeln!(out, "{}", self.font_size);
        let _ = writeln!(out, "{}", self.font.file_name());
        for e in &self.entities {
            let _ = writeln!(out, "{} {} {} {}", e.word, e.x, e.y, e.speed);
        }
        out
    }

    /// Decode save-slot text.
    ///
    /// Returns `Ok(None)` for an empty slot. Any unreadable line makes the
    /// whole snapshot invalid; partial restores are never produced.
    pub fn decode(text: &str) -> Result<Option<Self>, GameError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

        let score: u32 = header(&mut lines, 1, "score")?;
        let lives: u32 = header(&mut lines, 2, "lives")?;
        if lives == 0 {
            return Err(GameError::malformed(2, "a saved game needs at least one life"));
        }
        let font_size: i64 = header(&mut lines, 3, "font size")?;
        let font_size = font_size.clamp(i64::from(FONT_SIZE_MIN), i64::from(FONT_SIZE_MAX)) as u8;

        let (line_no, font_name) = lines
            .next()
            .ok_or_else(|| GameError::malformed(4, "missing font file name"))?;
        let font = FontFamily::from_file_name(font_name)
            .ok_or_else(|| GameError::malformed(line_no, format!("unknown font {font_name:?}")))?;

        let mut entities = Vec::new();
        for (line_no, line) in lines {
            if line.is_empty() {
                continue;
            }
            entities.push(entity_line(line_no, line)?);
        }

        Ok(Some(Self {
            score,
            lives,
            font_size,
            font,
            entities,
        }))
    }
}

fn header<'a, T: std::str::FromStr>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    expected_line: usize,
    what: &str,
) -> Result<T, GameError> {
    let (line_no, line) = lines
        .next()
        .ok_or_else(|| GameError::malformed(expected_line, format!("missing {what}")))?;
    line.parse()
        .map_err(|_| GameError::malformed(line_no, format!("bad {what} {line:?}")))
}

fn entity_line(line_no: usize, line: &str) -> Result<EntitySnapshot, GameError> {
    let fields: Vec<&str> = line.split_ascii_whitespace().collect();
    let [word, x, y, speed] = fields[..] else {
        return Err(GameError::malformed(
            line_no,
            format!("expected `word x y speed`, got {} fields", fields.len()),
        ));
    };

    let num = |name: &str, raw: &str| -> Result<f32, GameError> {
        match raw.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(GameError::malformed(line_no, format!("bad {name} {raw:?}"))),
        }
    };

    let x = num("x", x)?;
    let y = num("y", y)?;
    let speed = num("speed", speed)?;
    if speed <= 0.0 {
        return Err(GameError::malformed(line_no, "speed must be positive"));
    }

    Ok(EntitySnapshot {
        word: word.to_owned(),
        x,
        y,
        speed,
    })
}
