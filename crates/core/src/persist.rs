//! Persistence seam between the session and its storage.
//!
//! The session hands snapshots to a [`Persistence`] implementation on
//! transition boundaries and never keeps a reference to it.

use crate::error::GameError;
use crate::scores::HighScores;
use crate::snapshot::SessionSnapshot;

/// Save slot + high-score storage.
pub trait Persistence {
    /// Current save slot, `None` when there is no save.
    fn read_save(&mut self) -> Result<Option<SessionSnapshot>, GameError>;

    /// Overwrite the save slot.
    fn write_save(&mut self, snapshot: &SessionSnapshot) -> Result<(), GameError>;

    /// Empty the save slot.
    fn clear_save(&mut self) -> Result<(), GameError>;

    /// Durably replace the stored score list with `scores`.
    fn write_scores(&mut self, scores: &HighScores) -> Result<(), GameError>;
}

/// In-memory storage for tests and headless runs.
///
/// The save slot is kept in its encoded text form so that every write and
/// read goes through the same codec as the file store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    save: Option<String>,
    scores: Vec<u32>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose writes always fail, to exercise error paths.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Seed the save slot with raw text.
    pub fn with_save_text(mut self, text: impl Into<String>) -> Self {
        self.save = Some(text.into());
        self
    }

    pub fn save_text(&self) -> Option<&str> {
        self.save.as_deref()
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    fn write_error(&self) -> GameError {
        GameError::WriteFailed {
            path: "<memory>".into(),
            source: std::io::Error::other("writes disabled"),
        }
    }
}

impl Persistence for MemoryStore {
    fn read_save(&mut self) -> Result<Option<SessionSnapshot>, GameError> {
        match &self.save {
            Some(text) => SessionSnapshot::decode(text),
            None => Ok(None),
        }
    }

    fn write_save(&mut self, snapshot: &SessionSnapshot) -> Result<(), GameError> {
        if self.fail_writes {
            return Err(self.write_error());
        }
        self.save = Some(snapshot.encode());
        Ok(())
    }

    fn clear_save(&mut self) -> Result<(), GameError> {
        if self.fail_writes {
            return Err(self.write_error());
        }
        self.save = None;
        Ok(())
    }

    fn write_scores(&mut self, scores: &HighScores) -> Result<(), GameError> {
        if self.fail_writes {
            return Err(self.write_error());
        }
        self.scores = scores.entries().to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FontFamily;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.read_save().unwrap().is_none());

        let snap = SessionSnapshot {
            score: 9,
            lives: 1,
            font_size: 12,
            font: FontFamily::BitFont,
            entities: Vec::new(),
        };
        store.write_save(&snap).unwrap();
        assert_eq!(store.read_save().unwrap(), Some(snap));

        store.clear_save().unwrap();
        assert!(store.read_save().unwrap().is_none());
    }

    #[test]
    fn test_failing_store_keeps_contents() {
        let mut store = MemoryStore::failing().with_save_text("1\n1\n24\narial.ttf\n");
        assert!(store
            .write_scores(&HighScores::from_scores(vec![3]))
            .is_err());
        assert!(store.clear_save().is_err());
        assert!(store.scores().is_empty());
        assert!(store.read_save().unwrap().is_some());
    }
}
