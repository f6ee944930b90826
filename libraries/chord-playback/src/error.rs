//! Error types for playback sequencing

use chord_core::types::TrackId;
use thiserror::Error;

/// Playback sequencing errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Library or playlist document failed to load or parse
    #[error("Data error: {0}")]
    Data(#[from] chord_core::CoreError),

    /// Playlist index outside the loaded playlist list
    #[error("Playlist index out of bounds: {0}")]
    PlaylistIndexOutOfBounds(usize),

    /// Selected track is not a member of the active collection
    #[error("Track not found in active collection: {0}")]
    TrackNotFound(TrackId),

    /// Navigation attempted on an empty collection
    #[error("Active collection is empty")]
    EmptyCollection,

    /// Transport backend failure
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
