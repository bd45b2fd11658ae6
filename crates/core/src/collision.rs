//! Collision & life tracker - words that reach the deadline cost a life.

use crate::entity::FallingWord;
use crate::types::DEADLINE_OFFSET;

/// Y coordinate of the deadline line for a viewport of `viewport_height`.
pub fn deadline_y(viewport_height: f32) -> f32 {
    viewport_height - DEADLINE_OFFSET
}

/// Result of one collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionReport {
    /// Entities removed for crossing the deadline.
    pub missed: u32,
    /// Lives hit zero during this pass.
    pub exhausted: bool,
}

/// Remove every entity at or below `deadline`, one life per entity.
///
/// Entities are visited in insertion order. The pass stops as soon as lives
/// reach zero; later entities stay untouched. Lives never go below zero.
pub fn resolve_crossings(
    entities: &mut Vec<FallingWord>,
    lives: &mut u32,
    deadline: f32,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    if *lives == 0 {
        report.exhausted = true;
        return report;
    }

    let mut i = 0;
    while i < entities.len() {
        if !entities[i].has_crossed(deadline) {
            i += 1;
            continue;
        }

        entities.remove(i);
        *lives = lives.saturating_sub(1);
        report.missed += 1;

        if *lives == 0 {
            report.exhausted = true;
            break;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(word: &str, y: f32) -> FallingWord {
        FallingWord::new(word, 0.0, y, 70.0, 24)
    }

    #[test]
    fn test_deadline_offset() {
        assert_eq!(deadline_y(600.0), 500.0);
        assert_eq!(deadline_y(384.0), 284.0);
    }

    #[test]
    fn test_no_crossings() {
        let mut entities = vec![at("a", 10.0), at("b", 499.0)];
        let mut lives = 3;
        let report = resolve_crossings(&mut entities, &mut lives, 500.0);
        assert_eq!(report, CollisionReport::default());
        assert_eq!(lives, 3);
        assert_eq!(entities.len(), 2);
    }

    #[test]
    fn test_exact_deadline_counts_as_crossed() {
        let mut entities = vec![at("a", 500.0)];
        let mut lives = 3;
        let report = resolve_crossings(&mut entities, &mut lives, 500.0);
        assert_eq!(report.missed, 1);
        assert_eq!(lives, 2);
        assert!(entities.is_empty());
    }

    #[test]
    fn test_multiple_crossings_keep_survivor_order() {
        let mut entities = vec![at("a", 600.0), at("b", 10.0), at("c", 510.0), at("d", 20.0)];
        let mut lives = 3;
        let report = resolve_crossings(&mut entities, &mut lives, 500.0);
        assert_eq!(report.missed, 2);
        assert!(!report.exhausted);
        assert_eq!(lives, 1);
        let left: Vec<&str> = entities.iter().map(FallingWord::word).collect();
        assert_eq!(left, vec!["b", "d"]);
    }

    #[test]
    fn test_pass_stops_when_lives_run_out() {
        let mut entities = vec![at("a", 600.0), at("b", 600.0), at("c", 600.0)];
        let mut lives = 2;
        let report = resolve_crossings(&mut entities, &mut lives, 500.0);
        assert_eq!(report.missed, 2);
        assert!(report.exhausted);
        assert_eq!(lives, 0);
        let left: Vec<&str> = entities.iter().map(FallingWord::word).collect();
        assert_eq!(left, vec!["c"]);
    }

    #[test]
    fn test_zero_lives_never_underflow() {
        let mut entities = vec![at("a", 600.0)];
        let mut lives = 0;
        let report = resolve_crossings(&mut entities, &mut lives, 500.0);
        assert!(report.exhausted);
        assert_eq!(report.missed, 0);
        assert_eq!(lives, 0);
        assert_eq!(entities.len(), 1);
    }
}
