//! High-score list - rewritten in full at game over, ranked for display.

use std::fmt::Write as _;

/// Past final scores in the order they were recorded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighScores {
    entries: Vec<u32>,
}

/// One ranked scoreboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub label: String,
    pub score: u32,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_scores(entries: Vec<u32>) -> Self {
        Self { entries }
    }

    /// Parse the score file: whitespace-separated non-negative integers.
    ///
    /// Reading stops at the first token that is not a score; everything read
    /// up to that point is kept.
    pub fn from_text(text: &str) -> Self {
        let mut entries = Vec::new();
        for token in text.split_ascii_whitespace() {
            match token.parse::<u32>() {
                Ok(score) => entries.push(score),
                Err(_) => {
                    tracing::warn!(
                        token,
                        kept = entries.len(),
                        "stopped reading scores at unreadable entry"
                    );
                    break;
                }
            }
        }
        Self { entries }
    }

    /// Encode as one score per line, newline terminated.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.entries.len() * 4);
        for score in &self.entries {
            let _ = writeln!(out, "{score}");
        }
        out
    }

    pub fn push(&mut self, score: u32) {
        self.entries.push(score);
    }

    /// Scores in recording order.
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scores sorted from highest to lowest.
    pub fn ranked(&self) -> Vec<u32> {
        let mut ranked = self.entries.clone();
        ranked.sort_unstable_by(|a, b| b.cmp(a));
        ranked
    }

    /// Ranked rows with their place labels.
    pub fn standings(&self) -> Vec<Standing> {
        self.ranked()
            .into_iter()
            .enumerate()
            .map(|(i, score)| Standing {
                label: place_label(i + 1),
                score,
            })
            .collect()
    }
}

/// Scoreboard label for a 1-based place: `1st place`, `2nd place`,
/// `3rd place`, then `Nth place`.
pub fn place_label(place: usize) -> String {
    match place {
        1 => "1st place".to_owned(),
        2 => "2nd place".to_owned(),
        3 => "3rd place".to_owned(),
        n => format!("{n}th place"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_is_descending() {
        let scores = HighScores::from_scores(vec![50, 10, 90, 30]);
        assert_eq!(scores.ranked(), vec![90, 50, 30, 10]);
        // Recording order is untouched.
        assert_eq!(scores.entries(), &[50, 10, 90, 30]);
    }

    #[test]
    fn test_standings_labels() {
        let scores = HighScores::from_scores(vec![50, 10, 90, 30]);
        let rows: Vec<(String, u32)> = scores
            .standings()
            .into_iter()
            .map(|s| (s.label, s.score))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("1st place".to_owned(), 90),
                ("2nd place".to_owned(), 50),
                ("3rd place".to_owned(), 30),
                ("4th place".to_owned(), 10),
            ]
        );
    }

    #[test]
    fn test_place_label_after_third() {
        assert_eq!(place_label(5), "5th place");
        assert_eq!(place_label(11), "11th place");
    }

    #[test]
    fn test_from_text_reads_one_per_line() {
        let scores = HighScores::from_text("12\n7\n\n40\n");
        assert_eq!(scores.entries(), &[12, 7, 40]);
    }

    #[test]
    fn test_from_text_stops_at_garbage() {
        let scores = HighScores::from_text("12\n7\noops\n40\n");
        assert_eq!(scores.entries(), &[12, 7]);
        assert!(HighScores::from_text("-3\n5").is_empty());
    }

    #[test]
    fn test_to_text_parses_back() {
        let mut scores = HighScores::new();
        scores.push(3);
        scores.push(14);
        assert_eq!(scores.to_text(), "3\n14\n");
        assert_eq!(HighScores::from_text(&scores.to_text()), scores);
    }

    #[test]
    fn test_empty_list() {
        let scores = HighScores::new();
        assert!(scores.standings().is_empty());
        assert!(scores.ranked().is_empty());
    }
}
