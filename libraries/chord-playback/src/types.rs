//! Core types for playback sequencing

use serde::{Deserialize, Serialize};

/// Direction of a collection's presented sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Titles sorted A to Z
    Ascending,

    /// Titles sorted Z to A
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Which collection navigation operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveCollection {
    /// The single library collection
    Library,

    /// A named playlist, by position in the loaded playlist list
    Playlist(usize),
}

/// Configuration for the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial shuffle state (default: off)
    pub shuffle: bool,

    /// Initial repeat state (default: off)
    pub repeat: bool,

    /// Initial volume, 0.0..=1.0 (default: 0.5)
    pub volume: f32,

    /// Which channel of the library document is the library collection
    /// (default: 0)
    pub library_channel: usize,

    /// Initial sort direction for presented collections
    /// (default: ascending)
    pub sort_direction: SortDirection,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            shuffle: false,
            repeat: false,
            volume: 0.5,
            library_channel: 0,
            sort_direction: SortDirection::Ascending,
        }
    }
}
