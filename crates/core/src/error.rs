//! Error taxonomy shared by the core and the file store.

use std::path::PathBuf;

/// Failures the game can observe.
///
/// Only `ResourceMissing` on the word list and `EmptyDictionary` are fatal;
/// everything about saves and scores degrades to empty state.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("cannot read {}: {source}", path.display())]
    ResourceMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list contains no usable words")]
    EmptyDictionary,

    #[error("malformed save at line {line}: {reason}")]
    MalformedSave { line: usize, reason: String },

    #[error("cannot write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GameError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        GameError::MalformedSave {
            line,
            reason: reason.into(),
        }
    }
}
