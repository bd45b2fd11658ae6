//! Spawner - decides once per frame whether a new word enters the field.
//!
//! The per-frame spawn chance is `SPAWN_THRESHOLD / spawn_range(score)`, so
//! words arrive more often as the score grows. Speed grows linearly with score.

use crate::dictionary::WordList;
use crate::entity::FallingWord;
use crate::rng::SimpleRng;
use crate::types::{
    BASE_SPEED, SPAWN_RANGE_BASE, SPAWN_SCORE_FACTOR, SPAWN_THRESHOLD, SPAWN_X_MARGIN,
};

/// Upper bound (exclusive) of the per-frame spawn draw. Never below 1.
pub fn spawn_range(score: u32) -> u32 {
    let range = SPAWN_RANGE_BASE - SPAWN_SCORE_FACTOR * i64::from(score);
    // range <= SPAWN_RANGE_BASE, so the cast cannot truncate.
    range.max(1) as u32
}

/// Fall speed of a word spawned at `score`.
pub fn spawn_speed(score: u32) -> f32 {
    BASE_SPEED + score as f32
}

/// Exclusive upper bound of the spawn column, or 0 when the viewport is too narrow.
pub fn spawn_x_bound(viewport_width: f32) -> u32 {
    let room = viewport_width - SPAWN_X_MARGIN;
    if room <= 0.0 {
        0
    } else {
        room as u32
    }
}

/// Random source plus the spawn rule.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SimpleRng,
}

impl Spawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Roll the per-frame spawn draw for `score`.
    pub fn should_spawn(&mut self, score: u32) -> bool {
        let draw = self.rng.next_below(spawn_range(score));
        f64::from(draw) < SPAWN_THRESHOLD
    }

    /// Build a fresh entity at the top of the viewport.
    pub fn spawn(
        &mut self,
        words: &WordList,
        score: u32,
        viewport_width: f32,
        font_size: u8,
    ) -> FallingWord {
        let word = words.pick(&mut self.rng).to_owned();
        let x = self.rng.next_below(spawn_x_bound(viewport_width)) as f32;
        FallingWord::new(word, x, 0.0, spawn_speed(score), font_size)
    }

    /// Roll and, on success, spawn.
    pub fn maybe_spawn(
        &mut self,
        words: &WordList,
        score: u32,
        viewport_width: f32,
        font_size: u8,
    ) -> Option<FallingWord> {
        if self.should_spawn(score) {
            Some(self.spawn(words, score, viewport_width, font_size))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_range_shrinks_with_score() {
        assert_eq!(spawn_range(0), 300);
        assert_eq!(spawn_range(1), 298);
        assert_eq!(spawn_range(100), 100);
        assert_eq!(spawn_range(149), 2);
    }

    #[test]
    fn test_spawn_range_never_below_one() {
        for score in [150u32, 151, 1_000, 1_000_000, u32::MAX] {
            assert_eq!(spawn_range(score), 1);
        }
        for score in 0..2_000u32 {
            assert!(spawn_range(score) >= 1);
        }
    }

    #[test]
    fn test_spawn_range_is_monotonic() {
        let mut prev = spawn_range(0);
        for score in 1..400u32 {
            let r = spawn_range(score);
            assert!(r <= prev);
            prev = r;
        }
    }

    #[test]
    fn test_high_score_always_spawns() {
        let mut spawner = Spawner::new(5);
        for _ in 0..100 {
            assert!(spawner.should_spawn(200));
        }
    }

    #[test]
    fn test_range_two_always_spawns() {
        // Draws 0 and 1 both compare below the 1.5 threshold.
        let mut spawner = Spawner::new(5);
        for _ in 0..100 {
            assert!(spawner.should_spawn(149));
        }
    }

    #[test]
    fn test_low_score_spawns_rarely() {
        let mut spawner = Spawner::new(11);
        let spawned = (0..3_000).filter(|_| spawner.should_spawn(0)).count();
        // Expected rate is 2/300 per frame => ~20 spawns.
        assert!(spawned > 0 && spawned < 80, "spawned {spawned}");
    }

    #[test]
    fn test_spawned_entity_starts_at_top() {
        let words = WordList::from_text("ember").unwrap();
        let mut spawner = Spawner::new(9);
        let e = spawner.spawn(&words, 12, 800.0, 18);
        assert_eq!(e.word(), "ember");
        assert_eq!(e.y(), 0.0);
        assert_eq!(e.speed(), 82.0);
        assert_eq!(e.font_size(), 18);
        assert!(e.x() >= 0.0 && e.x() < 650.0);
    }

    #[test]
    fn test_narrow_viewport_clamps_x_to_zero() {
        let words = WordList::from_text("ember").unwrap();
        let mut spawner = Spawner::new(9);
        for width in [0.0, 100.0, 150.0] {
            let e = spawner.spawn(&words, 0, width, 24);
            assert_eq!(e.x(), 0.0);
        }
        assert_eq!(spawn_x_bound(150.0), 0);
        assert_eq!(spawn_x_bound(151.0), 1);
    }

    #[test]
    fn test_spawner_is_deterministic() {
        let words = WordList::from_text("a bb ccc dddd").unwrap();
        let mut a = Spawner::new(77);
        let mut b = Spawner::new(77);
        for _ in 0..500 {
            assert_eq!(
                a.maybe_spawn(&words, 40, 640.0, 24),
                b.maybe_spawn(&words, 40, 640.0, 24)
            );
        }
    }
}
