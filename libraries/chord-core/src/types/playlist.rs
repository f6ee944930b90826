/// Playlist domain type
use crate::types::{PlaylistId, Track};
use serde::{Deserialize, Serialize};

/// A named, ordered track collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist title
    pub title: String,

    /// Cover art reference (URL or asset path)
    pub cover: String,

    /// Tracks in playlist order
    pub songs: Vec<Track>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(id: PlaylistId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cover: String::new(),
            songs: Vec::new(),
        }
    }
}
