//! File-backed persistence for the word list, the save slot and high scores.
//!
//! All three files are plain text and live in one assets directory:
//!
//! | File | Content |
//! |------|---------|
//! | `words.txt` | Whitespace separated dictionary |
//! | `save.txt` | One session snapshot, empty when there is no save |
//! | `scores.txt` | One final score per line, rewritten at game over |

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dragon_typer_core::{GameError, HighScores, Persistence, SessionSnapshot, WordList};

pub const WORDS_FILE: &str = "words.txt";
pub const SAVE_FILE: &str = "save.txt";
pub const SCORES_FILE: &str = "scores.txt";

/// Paths of every file the game touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub words: PathBuf,
    pub save: PathBuf,
    pub scores: PathBuf,
}

impl AssetPaths {
    /// Standard layout under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            words: dir.join(WORDS_FILE),
            save: dir.join(SAVE_FILE),
            scores: dir.join(SCORES_FILE),
        }
    }

    /// Replace the dictionary path, keeping save and scores where they are.
    pub fn with_words(mut self, words: impl Into<PathBuf>) -> Self {
        self.words = words.into();
        self
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(&self.save, &self.scores)
    }
}

/// Load the dictionary. A missing file or a file without usable words is an error.
pub fn load_word_list(path: &Path) -> Result<WordList, GameError> {
    let text = fs::read_to_string(path).map_err(|source| GameError::ResourceMissing {
        path: path.to_path_buf(),
        source,
    })?;
    let words = WordList::from_text(&text)?;
    tracing::info!(path = %path.display(), count = words.len(), "word list loaded");
    Ok(words)
}

/// Load the high-score list. A missing or unreadable file yields an empty list.
pub fn load_high_scores(path: &Path) -> HighScores {
    match fs::read_to_string(path) {
        Ok(text) => {
            let scores = HighScores::from_text(&text);
            tracing::info!(path = %path.display(), count = scores.len(), "high scores loaded");
            scores
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => HighScores::new(),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "cannot read high scores");
            HighScores::new()
        }
    }
}

/// [`Persistence`] over two files on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    save: PathBuf,
    scores: PathBuf,
}

impl FileStore {
    pub fn new(save: impl Into<PathBuf>, scores: impl Into<PathBuf>) -> Self {
        Self {
            save: save.into(),
            scores: scores.into(),
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.save
    }

    fn write_failed(&self, path: &Path, source: io::Error) -> GameError {
        GameError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Persistence for FileStore {
    fn read_save(&mut self) -> Result<Option<SessionSnapshot>, GameError> {
        let text = match fs::read_to_string(&self.save) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(GameError::ResourceMissing {
                    path: self.save.clone(),
                    source,
                })
            }
        };
        SessionSnapshot::decode(&text)
    }

    fn write_save(&mut self, snapshot: &SessionSnapshot) -> Result<(), GameError> {
        fs::write(&self.save, snapshot.encode())
            .map_err(|source| self.write_failed(&self.save, source))?;
        tracing::info!(
            path = %self.save.display(),
            score = snapshot.score,
            entities = snapshot.entities.len(),
            "session saved"
        );
        Ok(())
    }

    fn clear_save(&mut self) -> Result<(), GameError> {
        // An empty file reads back as "no save".
        fs::write(&self.save, "").map_err(|source| self.write_failed(&self.save, source))
    }

    fn write_scores(&mut self, scores: &HighScores) -> Result<(), GameError> {
        let mut file =
            File::create(&self.scores).map_err(|source| self.write_failed(&self.scores, source))?;
        file.write_all(scores.to_text().as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|source| self.write_failed(&self.scores, source))?;
        tracing::info!(path = %self.scores.display(), count = scores.len(), "scores recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragon_typer_core::EntitySnapshot;
    use dragon_typer_types::FontFamily;
    use tempfile::TempDir;

    fn paths() -> (TempDir, AssetPaths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = AssetPaths::in_dir(dir.path());
        (dir, paths)
    }

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            score: 17,
            lives: 2,
            font_size: 18,
            font: FontFamily::Arial,
            entities: vec![
                EntitySnapshot {
                    word: "wyrm".into(),
                    x: 12.5,
                    y: 301.25,
                    speed: 87.0,
                },
                EntitySnapshot {
                    word: "firebreather".into(),
                    x: 0.1,
                    y: 0.3,
                    speed: 70.0,
                },
            ],
        }
    }

    #[test]
    fn test_asset_paths_layout() {
        let p = AssetPaths::in_dir("assets");
        assert_eq!(p.words, Path::new("assets/words.txt"));
        assert_eq!(p.save, Path::new("assets/save.txt"));
        assert_eq!(p.scores, Path::new("assets/scores.txt"));

        let p = p.with_words("/usr/share/dict/words");
        assert_eq!(p.words, Path::new("/usr/share/dict/words"));
        assert_eq!(p.save, Path::new("assets/save.txt"));
    }

    #[test]
    fn test_load_word_list() {
        let (_dir, p) = paths();
        fs::write(&p.words, "ember\nwyrm  hoard\n").unwrap();
        let words = load_word_list(&p.words).unwrap();
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_missing_word_list_is_fatal() {
        let (_dir, p) = paths();
        let err = load_word_list(&p.words).unwrap_err();
        assert!(matches!(err, GameError::ResourceMissing { .. }));
        assert!(err.to_string().contains("words.txt"));
    }

    #[test]
    fn test_empty_word_list_is_fatal() {
        let (_dir, p) = paths();
        fs::write(&p.words, " \n\n").unwrap();
        assert!(matches!(
            load_word_list(&p.words),
            Err(GameError::EmptyDictionary)
        ));
    }

    #[test]
    fn test_missing_files_mean_empty_state() {
        let (_dir, p) = paths();
        assert!(load_high_scores(&p.scores).is_empty());
        assert!(p.store().read_save().unwrap().is_none());
    }

    #[test]
    fn test_save_round_trip_and_clear() {
        let (_dir, p) = paths();
        let mut store = p.store();
        store.write_save(&snapshot()).unwrap();
        assert_eq!(store.read_save().unwrap(), Some(snapshot()));

        store.clear_save().unwrap();
        assert!(store.save_path().exists());
        assert!(store.read_save().unwrap().is_none());
    }

    #[test]
    fn test_malformed_save_is_reported() {
        let (_dir, p) = paths();
        fs::write(&p.save, "5\n3\n24\ncomic.ttf\n").unwrap();
        let err = p.store().read_save().unwrap_err();
        assert!(matches!(err, GameError::MalformedSave { line: 4, .. }));
    }

    /// Load, record one more score, write back and reload, the way a game over does.
    fn record(p: &AssetPaths, score: u32) -> HighScores {
        let mut scores = load_high_scores(&p.scores);
        scores.push(score);
        p.store().write_scores(&scores).unwrap();
        load_high_scores(&p.scores)
    }

    #[test]
    fn test_scores_accumulate_across_stores() {
        let (_dir, p) = paths();
        record(&p, 50);
        record(&p, 10);
        let scores = record(&p, 90);

        assert_eq!(fs::read_to_string(&p.scores).unwrap(), "50\n10\n90\n");
        assert_eq!(scores.ranked(), vec![90, 50, 10]);
    }

    #[test]
    fn test_scores_after_garbage_line_survive() {
        let (_dir, p) = paths();
        fs::write(&p.scores, "12\noops\n").unwrap();

        let scores = record(&p, 30);
        assert_eq!(scores.entries(), &[12, 30]);
        assert_eq!(fs::read_to_string(&p.scores).unwrap(), "12\n30\n");
    }

    #[test]
    fn test_scores_without_trailing_newline_stay_separate() {
        let (_dir, p) = paths();
        fs::write(&p.scores, "50").unwrap();

        let scores = record(&p, 10);
        assert_eq!(scores.entries(), &[50, 10]);
        assert_eq!(fs::read_to_string(&p.scores).unwrap(), "50\n10\n");
    }

    #[test]
    fn test_shorter_list_truncates_file() {
        let (_dir, p) = paths();
        fs::write(&p.scores, "1\n2\n3\n4\n").unwrap();
        p.store()
            .write_scores(&HighScores::from_scores(vec![7]))
            .unwrap();
        assert_eq!(fs::read_to_string(&p.scores).unwrap(), "7\n");
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let (dir, _) = paths();
        let mut store = AssetPaths::in_dir(dir.path().join("nope")).store();
        let err = store.write_save(&snapshot()).unwrap_err();
        assert!(matches!(err, GameError::WriteFailed { .. }));
        assert!(matches!(
            store.write_scores(&HighScores::from_scores(vec![1])),
            Err(GameError::WriteFailed { .. })
        ));
    }
}
