//! Word dictionary - the immutable pool spawned words are drawn from.

use crate::error::GameError;
use crate::rng::SimpleRng;

/// Ordered, non-empty list of candidate words.
///
/// Non-emptiness is established at construction, so [`WordList::pick`] is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list from whitespace-separated text.
    ///
    /// Tokens with bytes outside printable ASCII are skipped: input is
    /// single-byte only, so such words could never be typed.
    pub fn from_text(text: &str) -> Result<Self, GameError> {
        let mut skipped = 0usize;
        let words: Vec<String> = text
            .split_ascii_whitespace()
            .filter(|w| {
                let typable = w.bytes().all(|b| b.is_ascii_graphic());
                if !typable {
                    skipped += 1;
                }
                typable
            })
            .map(str::to_owned)
            .collect();

        if skipped > 0 {
            tracing::warn!(skipped, "skipped words that cannot be typed");
        }

        Self::from_words(words)
    }

    /// Build a list from already-split words.
    pub fn from_words(words: Vec<String>) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyDictionary);
        }
        Ok(Self { words })
    }

    /// Uniformly random word.
    pub fn pick(&self, rng: &mut SimpleRng) -> &str {
        &self.words[rng.next_index(self.words.len())]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_keeps_order() {
        let list = WordList::from_text("dragon  fire\nscale\n\tclaw").unwrap();
        let words: Vec<&str> = list.iter().collect();
        assert_eq!(words, vec!["dragon", "fire", "scale", "claw"]);
        assert_eq!(list.get(2), Some("scale"));
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(matches!(
            WordList::from_text("   \n\n"),
            Err(GameError::EmptyDictionary)
        ));
        assert!(matches!(
            WordList::from_words(Vec::new()),
            Err(GameError::EmptyDictionary)
        ));
    }

    #[test]
    fn test_untypable_words_are_skipped() {
        let list = WordList::from_text("drache café hoard").unwrap();
        let words: Vec<&str> = list.iter().collect();
        assert_eq!(words, vec!["drache", "hoard"]);

        assert!(matches!(
            WordList::from_text("über größe"),
            Err(GameError::EmptyDictionary)
        ));
    }

    #[test]
    fn test_pick_returns_member() {
        let list = WordList::from_text("a b c d e").unwrap();
        let mut rng = SimpleRng::new(3);
        for _ in 0..50 {
            let w = list.pick(&mut rng);
            assert!(list.iter().any(|x| x == w));
        }
    }

    #[test]
    fn test_pick_single_word() {
        let list = WordList::from_text("only").unwrap();
        let mut rng = SimpleRng::new(42);
        assert_eq!(list.pick(&mut rng), "only");
    }
}
