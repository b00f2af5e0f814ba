use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to parse partition '{partition}': {source}")]
    Partition {
        partition: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown track '{0}'. Run `langdeck list` to see available tracks")]
    UnknownTrack(String),

    #[error("Failed to serialize '{id}': {source}")]
    Serialize {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ContentError>;
