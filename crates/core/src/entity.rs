//! Falling word entity - the unit of gameplay.
//!
//! An entity is pure simulation data. Highlighting is derived from the live
//! input on demand and never stored, so it cannot go stale.

/// A word falling down the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingWord {
    word: String,
    x: f32,
    y: f32,
    speed: f32,
    font_size: u8,
}

impl FallingWord {
    /// Create an entity. `speed` is in pixels per second and must be positive.
    pub fn new(word: impl Into<String>, x: f32, y: f32, speed: f32, font_size: u8) -> Self {
        debug_assert!(speed > 0.0, "speed must be positive");
        Self {
            word: word.into(),
            x,
            y,
            speed,
            font_size,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    pub fn set_font_size(&mut self, font_size: u8) {
        self.font_size = font_size;
    }

    /// Move down by `speed * dt`.
    pub fn advance(&mut self, dt: f32) {
        self.y += self.speed * dt;
    }

    /// Length of the longest common prefix of `input` and the word.
    ///
    /// Byte-wise and case-sensitive; always `<= word().len()`.
    pub fn matched_len(&self, input: &str) -> usize {
        let n = self
            .word
            .bytes()
            .zip(input.bytes())
            .take_while(|(a, b)| a == b)
            .count();
        // Input is ASCII, so a match never ends inside a multi-byte char; stay safe anyway.
        (0..=n)
            .rev()
            .find(|i| self.word.is_char_boundary(*i))
            .unwrap_or(0)
    }

    /// `(matched, remaining)` split of the word against `input`.
    pub fn highlight(&self, input: &str) -> (&str, &str) {
        self.word.split_at(self.matched_len(input))
    }

    /// True once the word reached or passed `deadline_y`.
    pub fn has_crossed(&self, deadline_y: f32) -> bool {
        self.y >= deadline_y
    }

    pub fn exactly_matches(&self, input: &str) -> bool {
        self.word == input
    }
}
