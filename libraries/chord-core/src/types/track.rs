/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// A playable track
///
/// Immutable once loaded; every field comes straight from the library or
/// playlist document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist or author name
    pub author: String,

    /// Cover art reference (URL or asset path)
    pub cover: String,

    /// Playable media reference (source URL)
    pub url: String,
}

impl Track {
    /// Create a track with the given identity and display metadata
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId::new(id),
            title: title.into(),
            author: author.into(),
            cover: String::new(),
            url: String::new(),
        }
    }
}
